//! Gap analysis command and query handlers.

mod analyze_skill_gaps;
mod generate_recommendations;
mod get_employee_gaps;
mod get_skill_predictions;

pub use analyze_skill_gaps::{
    AnalyzeSkillGapsCommand, AnalyzeSkillGapsHandler, AnalyzeSkillGapsResult,
};
pub use generate_recommendations::{
    GenerateRecommendationsCommand, GenerateRecommendationsHandler,
};
pub use get_employee_gaps::{EmployeeGapsResult, GetEmployeeGapsHandler, GetEmployeeGapsQuery};
pub use get_skill_predictions::{
    GetSkillPredictionsHandler, GetSkillPredictionsQuery, SkillPredictionsResult,
};
