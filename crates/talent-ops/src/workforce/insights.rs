//! Workforce metrics summary.
//!
//! Fixed-formula estimates over whole-collection reads; counts and a templated
//! narrative, not an aggregation pipeline.

use serde::{Deserialize, Serialize};

use crate::entities::ValidationError;

pub const DEFAULT_HORIZON_DAYS: u16 = 30;
pub const MAX_HORIZON_DAYS: u16 = 365;

fn default_horizon() -> u16 {
    DEFAULT_HORIZON_DAYS
}

/// Request body for the insights endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InsightRequest {
    #[serde(default = "default_horizon")]
    pub horizon_days: u16,
}

impl Default for InsightRequest {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl InsightRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.horizon_days < 1 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(ValidationError::OutOfRange {
                field: "horizon_days",
                constraint: "between 1 and 365",
                found: f64::from(self.horizon_days),
            });
        }
        Ok(())
    }
}

/// Raw counts gathered from the store before any arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityCounts {
    pub employees: u64,
    pub tasks_total: u64,
    pub tasks_done: u64,
    pub open_roles: u64,
    pub tickets_open: u64,
    pub timesheet_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforceSummary {
    pub workforce_size: u64,
    pub task_completion_rate: f64,
    pub open_roles: u64,
    pub tickets_open: u64,
    pub utilization_pct: f64,
    pub time_horizon_days: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforceInsights {
    pub summary: WorkforceSummary,
    pub narrative: String,
}

/// Compute the summary and narrative for the given horizon.
///
/// Completion rate is done/total as a percentage (0 with no tasks).
/// Utilization is an average-hours-per-day proxy against an 8-hour day,
/// capped at 100 (0 with no employees). Both round to 2 decimals.
pub(crate) fn build(counts: ActivityCounts, horizon_days: u16) -> WorkforceInsights {
    let task_completion_rate = if counts.tasks_total > 0 {
        round2(counts.tasks_done as f64 / counts.tasks_total as f64 * 100.0)
    } else {
        0.0
    };

    let utilization_pct = if counts.employees > 0 {
        let per_employee = counts.timesheet_hours / counts.employees as f64;
        round2((per_employee / f64::from(horizon_days) * 100.0 / 8.0).min(100.0))
    } else {
        0.0
    };

    let summary = WorkforceSummary {
        workforce_size: counts.employees,
        task_completion_rate,
        open_roles: counts.open_roles,
        tickets_open: counts.tickets_open,
        utilization_pct,
        time_horizon_days: horizon_days,
    };

    let narrative = format!(
        "Team size is {}. Task completion is at {}%. Utilization estimates at {}%. \
         You have {} open roles and {} active tickets. Consider prioritizing hiring \
         where utilization exceeds 85% and triage tickets older than 7 days.",
        summary.workforce_size,
        summary.task_completion_rate,
        summary.utilization_pct,
        summary.open_roles,
        summary.tickets_open,
    );

    WorkforceInsights { summary, narrative }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
