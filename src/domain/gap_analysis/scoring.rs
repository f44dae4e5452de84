//! Gap scoring rules.
//!
//! Every function here is a fixed formula over the gap score; there is no
//! per-employee state involved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ProficiencyLevel, ValidationError};

/// Training hours needed per proficiency point of deficit.
pub const HOURS_PER_LEVEL: i32 = 20;

/// Floor for the estimated probability of closing a gap.
pub const MIN_SUCCESS_PROBABILITY: f64 = 0.6;

/// Probability lost per proficiency point of deficit.
pub const SUCCESS_PROBABILITY_STEP: f64 = 0.1;

/// Severity tier of a skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: High=3, Medium=2, Low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    /// Case-insensitive: "high", "High" and "HIGH" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(ValidationError::invalid_format(
                "priority",
                format!("expected high, medium or low, got '{}'", other),
            )),
        }
    }
}

/// `current - required`, with a missing assessment counting as 0.
pub fn compute_gap(current: Option<ProficiencyLevel>, required: ProficiencyLevel) -> i32 {
    current.map_or(0, |level| level.value()) - required.value()
}

/// Maps a gap score to its priority tier.
pub fn classify_priority(gap_score: i32) -> Priority {
    match gap_score {
        i32::MIN..=-2 => Priority::High,
        -1 => Priority::Medium,
        _ => Priority::Low,
    }
}

/// Hours of training needed to close the gap. Zero when there is no deficit.
pub fn predict_training_time(gap_score: i32) -> i32 {
    if gap_score < 0 {
        gap_score.saturating_abs().saturating_mul(HOURS_PER_LEVEL)
    } else {
        0
    }
}

/// Likelihood of closing the gap, in `[0.6, 1.0]`.
pub fn success_probability(gap_score: i32) -> f64 {
    let deficit = f64::from(gap_score.saturating_abs());
    (1.0 - deficit * SUCCESS_PROBABILITY_STEP).max(MIN_SUCCESS_PROBABILITY)
}

/// Rounds to two decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn level(v: i32) -> ProficiencyLevel {
        ProficiencyLevel::try_new(v).unwrap()
    }

    #[test]
    fn missing_proficiency_counts_as_zero() {
        assert_eq!(compute_gap(None, level(3)), -3);
    }

    #[test]
    fn scenario_large_deficit() {
        let gap = compute_gap(Some(level(2)), level(5));
        assert_eq!(gap, -3);
        assert_eq!(classify_priority(gap), Priority::High);
        assert_eq!(predict_training_time(gap), 60);
        assert_eq!(round2(success_probability(gap)), 0.7);
        assert_eq!(round2(success_probability(-5)), 0.6);
    }

    #[test]
    fn scenario_single_point_deficit() {
        let gap = compute_gap(Some(level(4)), level(5));
        assert_eq!(gap, -1);
        assert_eq!(classify_priority(gap), Priority::Medium);
        assert_eq!(predict_training_time(gap), 20);
        assert_eq!(round2(success_probability(gap)), 0.9);
    }

    #[test]
    fn scenario_surplus() {
        let gap = compute_gap(Some(level(5)), level(3));
        assert_eq!(gap, 2);
        assert_eq!(classify_priority(gap), Priority::Low);
        assert_eq!(predict_training_time(gap), 0);
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" Low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
    }

    proptest! {
        #[test]
        fn non_negative_gaps_are_low_and_free(gap in 0i32..=10) {
            prop_assert_eq!(classify_priority(gap), Priority::Low);
            prop_assert_eq!(predict_training_time(gap), 0);
        }

        #[test]
        fn large_deficits_are_high_and_linear(gap in -10i32..=-2) {
            prop_assert_eq!(classify_priority(gap), Priority::High);
            prop_assert_eq!(predict_training_time(gap), 20 * gap.abs());
        }

        #[test]
        fn success_probability_never_increases_with_deficit(a in 0i32..=10, b in 0i32..=10) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(success_probability(-large) <= success_probability(-small));
            prop_assert!(success_probability(-large) >= MIN_SUCCESS_PROBABILITY);
            prop_assert!(success_probability(-small) <= 1.0);
        }

        #[test]
        fn gap_is_current_minus_required(current in 1i32..=5, required in 1i32..=5) {
            prop_assert_eq!(compute_gap(Some(level(current)), level(required)), current - required);
        }
    }

    #[test]
    fn single_point_deficit_is_medium() {
        assert_eq!(classify_priority(-1), Priority::Medium);
        assert_eq!(predict_training_time(-1), 20);
    }
}
