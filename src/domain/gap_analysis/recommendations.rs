//! Training recommendations derived from stored skill gaps.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::foundation::{EmployeeId, SkillId, ValidationError};

use super::record::GapDetails;
use super::scoring::Priority;

/// Flat hourly rate used for cost estimates.
pub const HOURLY_TRAINING_RATE: i64 = 50;

/// Restricts recommendations to one priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn admits(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => *p == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>().map(PriorityFilter::Only)
    }
}

/// Two suggestions sized to the gap magnitude.
pub fn training_suggestions(skill_name: &str, magnitude: i32) -> [String; 2] {
    match magnitude {
        m if m >= 3 => [
            format!("Comprehensive {} bootcamp or certification program", skill_name),
            format!("1-on-1 mentoring with {} expert", skill_name),
        ],
        2 => [
            format!("Intermediate {} workshop series", skill_name),
            format!("Online {} course with practical projects", skill_name),
        ],
        _ => [
            format!("Targeted {} refresher training", skill_name),
            format!("Peer learning session on {}", skill_name),
        ],
    }
}

/// Cost of the given training hours at the flat rate.
pub fn training_cost(hours: i32) -> i64 {
    i64::from(hours) * HOURLY_TRAINING_RATE
}

/// One actionable recommendation for an employee/skill deficit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRecommendation {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub skill_id: SkillId,
    pub skill_name: String,
    pub skill_category: Option<String>,
    pub current_level: i32,
    pub target_level: i32,
    /// Absolute gap score.
    pub gap_size: i32,
    pub priority: Priority,
    pub training_recommendations: Vec<String>,
    /// Hours.
    pub estimated_duration: i32,
    pub cost_estimate: i64,
}

/// Recommendations plus totals over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<TrainingRecommendation>,
    pub total_employees_needing_training: usize,
    pub total_estimated_cost: i64,
    pub total_training_hours: i64,
}

/// Turns stored gaps into ranked training recommendations.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Keeps deficits admitted by `filter`, builds a recommendation for each
    /// and orders them by priority rank then gap magnitude, both descending.
    ///
    /// The sort is stable, so ties keep their input order.
    pub fn generate(gaps: &[GapDetails], filter: PriorityFilter) -> RecommendationReport {
        let mut recommendations: Vec<TrainingRecommendation> = gaps
            .iter()
            .filter(|d| d.record.gap.is_deficit() && filter.admits(d.record.gap.priority))
            .map(Self::recommend)
            .collect();

        recommendations.sort_by(|a, b| {
            (b.priority.rank(), b.gap_size).cmp(&(a.priority.rank(), a.gap_size))
        });

        let employees: HashSet<EmployeeId> =
            recommendations.iter().map(|r| r.employee_id).collect();

        RecommendationReport {
            total_employees_needing_training: employees.len(),
            total_estimated_cost: recommendations.iter().map(|r| r.cost_estimate).sum(),
            total_training_hours: recommendations
                .iter()
                .map(|r| i64::from(r.estimated_duration))
                .sum(),
            recommendations,
        }
    }

    fn recommend(details: &GapDetails) -> TrainingRecommendation {
        let gap = &details.record.gap;
        TrainingRecommendation {
            employee_id: gap.employee_id,
            employee_name: details.employee_name.clone(),
            skill_id: gap.skill_id,
            skill_name: details.skill_name.clone(),
            skill_category: details.skill_category.clone(),
            current_level: gap.current_level,
            target_level: gap.required_level,
            gap_size: gap.magnitude(),
            priority: gap.priority,
            training_recommendations: training_suggestions(&details.skill_name, gap.magnitude())
                .into(),
            estimated_duration: gap.predicted_training_time,
            cost_estimate: training_cost(gap.predicted_training_time),
        }
    }
}
