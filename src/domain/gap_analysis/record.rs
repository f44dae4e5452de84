//! Skill gap values and their stored form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmployeeId, GapRecordId, SkillId, Timestamp};

use super::scoring::{classify_priority, predict_training_time, Priority};

/// Outcome of comparing one employee's proficiency with one role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub employee_id: EmployeeId,
    pub skill_id: SkillId,
    /// 0 when the employee was never assessed for the skill.
    pub current_level: i32,
    pub required_level: i32,
    pub gap_score: i32,
    pub priority: Priority,
    /// Hours.
    pub predicted_training_time: i32,
}

impl SkillGap {
    /// Derives the score, priority and training time from the two levels.
    pub fn evaluate(
        employee_id: EmployeeId,
        skill_id: SkillId,
        current_level: i32,
        required_level: i32,
    ) -> Self {
        let gap_score = current_level - required_level;
        Self {
            employee_id,
            skill_id,
            current_level,
            required_level,
            gap_score,
            priority: classify_priority(gap_score),
            predicted_training_time: predict_training_time(gap_score),
        }
    }

    /// True when the employee is below the required level.
    pub fn is_deficit(&self) -> bool {
        self.gap_score < 0
    }

    /// Absolute size of the gap.
    pub fn magnitude(&self) -> i32 {
        self.gap_score.saturating_abs()
    }
}

/// Persisted gap analysis row. Unique per (employee, skill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapRecord {
    pub id: GapRecordId,
    #[serde(flatten)]
    pub gap: SkillGap,
    pub analysis_date: Timestamp,
}

impl SkillGapRecord {
    /// Wraps a freshly computed gap for storage.
    ///
    /// The id is only used when no row exists yet for the pair; an upsert
    /// keeps the existing row's id.
    pub fn from_gap(gap: SkillGap, analysis_date: Timestamp) -> Self {
        Self {
            id: GapRecordId::new(),
            gap,
            analysis_date,
        }
    }

    /// The upsert key.
    pub fn key(&self) -> (EmployeeId, SkillId) {
        (self.gap.employee_id, self.gap.skill_id)
    }
}

/// A stored gap together with the names needed to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapDetails {
    pub record: SkillGapRecord,
    pub employee_name: String,
    pub skill_name: String,
    pub skill_category: Option<String>,
}

/// Filter for listing stored gap records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GapRecordFilter {
    pub employee_id: Option<EmployeeId>,
    pub priority: Option<Priority>,
    /// Restrict to rows with `gap_score < 0`.
    pub deficits_only: bool,
}

impl GapRecordFilter {
    /// All records for a single employee.
    pub fn for_employee(employee_id: EmployeeId) -> Self {
        Self {
            employee_id: Some(employee_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, record: &SkillGapRecord) -> bool {
        self.employee_id.map_or(true, |id| record.gap.employee_id == id)
            && self.priority.map_or(true, |p| record.gap.priority == p)
            && (!self.deficits_only || record.gap.is_deficit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_derives_priority_and_hours() {
        let gap = SkillGap::evaluate(EmployeeId::new(), SkillId::new(), 1, 4);
        assert_eq!(gap.gap_score, -3);
        assert_eq!(gap.priority, Priority::High);
        assert_eq!(gap.predicted_training_time, 60);
        assert!(gap.is_deficit());
        assert_eq!(gap.magnitude(), 3);
    }

    #[test]
    fn record_serializes_flat() {
        let gap = SkillGap::evaluate(EmployeeId::new(), SkillId::new(), 3, 3);
        let record = SkillGapRecord::from_gap(gap, Timestamp::now());
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["gap_score"], 0);
        assert_eq!(json["priority"], "Low");
        assert!(json.get("analysis_date").is_some());
    }

    #[test]
    fn filter_combines_conditions() {
        let employee = EmployeeId::new();
        let deficit = SkillGapRecord::from_gap(
            SkillGap::evaluate(employee, SkillId::new(), 2, 3),
            Timestamp::now(),
        );
        let surplus = SkillGapRecord::from_gap(
            SkillGap::evaluate(employee, SkillId::new(), 4, 3),
            Timestamp::now(),
        );

        let filter = GapRecordFilter {
            employee_id: Some(employee),
            priority: None,
            deficits_only: true,
        };
        assert!(filter.matches(&deficit));
        assert!(!filter.matches(&surplus));

        let medium_only = GapRecordFilter {
            priority: Some(Priority::Medium),
            ..Default::default()
        };
        assert!(medium_only.matches(&deficit));
        assert!(!GapRecordFilter::for_employee(EmployeeId::new()).matches(&deficit));
    }
}
