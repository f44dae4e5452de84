//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
pub mod sample_data;

pub use handlers::gap_analysis::{
    AnalyzeSkillGapsCommand, AnalyzeSkillGapsHandler, AnalyzeSkillGapsResult,
    GenerateRecommendationsCommand, GenerateRecommendationsHandler, GetEmployeeGapsHandler,
    GetEmployeeGapsQuery, GetSkillPredictionsHandler, GetSkillPredictionsQuery,
};
