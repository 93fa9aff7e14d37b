// src/validation.rs
use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::errors::ValidationError;

pub const TITLE_LENGTH: RangeInclusive<usize> = 5..=60;
pub const CHOICE_COUNT: RangeInclusive<usize> = 2..=10;
pub const CHOICE_LENGTH: RangeInclusive<usize> = 1..=60;

/// Check a new poll's shape. Only the first failing rule is reported,
/// in the order title, choice count, choice lengths, duplicates.
pub fn validate_create(title: &str, choices: &[String]) -> Result<(), ValidationError> {
    if !TITLE_LENGTH.contains(&title.chars().count()) {
        return Err(ValidationError::TitleLength);
    }

    if !CHOICE_COUNT.contains(&choices.len()) {
        return Err(ValidationError::ChoiceCount);
    }

    if choices
        .iter()
        .any(|choice| !CHOICE_LENGTH.contains(&choice.chars().count()))
    {
        return Err(ValidationError::ChoiceLength);
    }

    let mut seen = HashSet::with_capacity(choices.len());
    if !choices.iter().all(|choice| seen.insert(choice.as_str())) {
        return Err(ValidationError::DuplicateChoice);
    }

    Ok(())
}

/// Exact, case-sensitive membership check
pub fn validate_vote(poll_choices: &[String], chosen: &str) -> Result<(), ValidationError> {
    if poll_choices.iter().any(|choice| choice == chosen) {
        Ok(())
    } else {
        Err(ValidationError::UnknownOption)
    }
}
