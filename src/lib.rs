// src/lib.rs
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod poll;
pub mod routes;
pub mod services;
pub mod store;
pub mod validation;

pub use errors::{Error, Result, StoreError, ValidationError};
pub use services::PollService;
