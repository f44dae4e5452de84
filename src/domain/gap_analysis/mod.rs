//! Gap analysis - the scoring rules and the engines built on them.
//!
//! Everything in this module is synchronous and free of I/O. Callers load
//! employees, requirements and proficiencies through the store ports and
//! persist the resulting records themselves.

mod analyzer;
mod predictions;
mod recommendations;
mod record;
mod scoring;

pub use analyzer::{GapAnalysis, GapAnalyzer, ProficiencyIndex, RequirementIndex};
pub use predictions::{
    PredictionEngine, PredictionReport, SkillPrediction, TrainingFactors, STUDY_HOURS_PER_WEEK,
};
pub use recommendations::{
    training_cost, training_suggestions, PriorityFilter, RecommendationEngine,
    RecommendationReport, TrainingRecommendation, HOURLY_TRAINING_RATE,
};
pub use record::{GapDetails, GapRecordFilter, SkillGap, SkillGapRecord};
pub use scoring::{
    classify_priority, compute_gap, predict_training_time, round2, success_probability,
    Priority, HOURS_PER_LEVEL, MIN_SUCCESS_PROBABILITY, SUCCESS_PROBABILITY_STEP,
};
