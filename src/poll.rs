// src/poll.rs
use std::collections::HashMap;

use crate::models::{AggregateResult, ChoiceCount, Vote};

/// Tally votes per choice, in the poll's own choice order.
///
/// `total` counts every vote handed in, including any whose choice no
/// longer matches an option.
pub fn aggregate(choices: &[String], votes: &[Vote]) -> AggregateResult {
    let mut counts: HashMap<&str, u64> = HashMap::with_capacity(choices.len());
    for vote in votes {
        *counts.entry(vote.choice.as_str()).or_default() += 1;
    }

    let results = choices
        .iter()
        .map(|choice| ChoiceCount {
            choice: choice.clone(),
            count: counts.get(choice.as_str()).copied().unwrap_or(0),
        })
        .collect();

    AggregateResult {
        results,
        total: votes.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn votes_for(poll_id: Uuid, picks: &[&str]) -> Vec<Vote> {
        picks
            .iter()
            .map(|choice| Vote {
                poll_id,
                choice: choice.to_string(),
                created_at: Utc::now(),
            })
            .collect()
    }

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_in_choice_order() {
        let id = Uuid::new_v4();
        let result = aggregate(
            &choices(&["Red", "Green", "Blue"]),
            &votes_for(id, &["Blue", "Blue", "Red", "Blue"]),
        );

        let order: Vec<&str> = result.results.iter().map(|c| c.choice.as_str()).collect();
        assert_eq!(order, vec!["Red", "Green", "Blue"]);
        assert_eq!(result.count_for("Red"), Some(1));
        assert_eq!(result.count_for("Green"), Some(0));
        assert_eq!(result.count_for("Blue"), Some(3));
        assert_eq!(result.total, 4);
    }

    #[test]
    fn vote_order_does_not_matter() {
        let id = Uuid::new_v4();
        let options = choices(&["A", "B", "C"]);
        let first = aggregate(&options, &votes_for(id, &["C", "A", "B", "C"]));
        let second = aggregate(&options, &votes_for(id, &["A", "C", "C", "B"]));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_votes_give_zero_tally() {
        let result = aggregate(&choices(&["Yes", "No"]), &[]);
        assert_eq!(result.total, 0);
        assert!(result.results.iter().all(|c| c.count == 0));
        assert_eq!(result.results.len(), 2);
    }

    #[test]
    fn matching_is_case_sensitive_and_total_counts_everything() {
        let id = Uuid::new_v4();
        let result = aggregate(&choices(&["Yes", "No"]), &votes_for(id, &["Yes", "yes", "No"]));
        assert_eq!(result.count_for("Yes"), Some(1));
        assert_eq!(result.count_for("No"), Some(1));
        assert_eq!(result.total, 3);
    }
}
