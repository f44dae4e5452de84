//! Training time and success predictions for stored gaps.

use serde::Serialize;

use crate::domain::foundation::SkillId;

use super::record::GapDetails;
use super::scoring::{round2, success_probability, Priority};

/// Study hours an employee is expected to fit into one week.
pub const STUDY_HOURS_PER_WEEK: i32 = 8;

/// Multipliers applied to the base training time.
///
/// Both are 1.0 until per-employee data exists to derive them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingFactors {
    pub experience_factor: f64,
    pub role_level_factor: f64,
}

impl Default for TrainingFactors {
    fn default() -> Self {
        Self {
            experience_factor: 1.0,
            role_level_factor: 1.0,
        }
    }
}

impl TrainingFactors {
    /// Scales `hours`, truncating toward zero.
    pub fn adjust(&self, hours: i32) -> i32 {
        (f64::from(hours) * self.experience_factor * self.role_level_factor) as i32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillPrediction {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub current_level: i32,
    pub target_level: i32,
    pub predicted_training_hours: i32,
    pub success_probability: f64,
    pub estimated_completion_weeks: i32,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionReport {
    pub predictions: Vec<SkillPrediction>,
    pub total_training_hours: i64,
    pub average_success_probability: f64,
}

pub struct PredictionEngine {
    factors: TrainingFactors,
}

impl PredictionEngine {
    pub fn new(factors: TrainingFactors) -> Self {
        Self { factors }
    }

    /// Predicts every deficit in `gaps`, in input order.
    pub fn predict(&self, gaps: &[GapDetails]) -> PredictionReport {
        let predictions: Vec<SkillPrediction> = gaps
            .iter()
            .filter(|d| d.record.gap.is_deficit())
            .map(|d| self.predict_one(d))
            .collect();

        let total_training_hours = predictions
            .iter()
            .map(|p| i64::from(p.predicted_training_hours))
            .sum();
        let average_success_probability = if predictions.is_empty() {
            0.0
        } else {
            let sum: f64 = predictions.iter().map(|p| p.success_probability).sum();
            round2(sum / predictions.len() as f64)
        };

        PredictionReport {
            predictions,
            total_training_hours,
            average_success_probability,
        }
    }

    fn predict_one(&self, details: &GapDetails) -> SkillPrediction {
        let gap = &details.record.gap;
        let predicted_training_hours = self.factors.adjust(gap.predicted_training_time);
        SkillPrediction {
            skill_id: gap.skill_id,
            skill_name: details.skill_name.clone(),
            current_level: gap.current_level,
            target_level: gap.required_level,
            predicted_training_hours,
            success_probability: round2(success_probability(gap.gap_score)),
            estimated_completion_weeks: predicted_training_hours / STUDY_HOURS_PER_WEEK,
            priority: gap.priority,
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new(TrainingFactors::default())
    }
}
