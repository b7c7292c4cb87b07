use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::checks::{email_shape, non_negative, within};
use super::{EntityRecord, ValidationError};

fn default_true() -> bool {
    true
}

/// Root identity. Email uniqueness is a convention, not a constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    pub department: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Executive,
    TeamLead,
    #[default]
    Employee,
}

impl EntityRecord for User {
    fn check(&self) -> Result<(), ValidationError> {
        email_shape("email", &self.email)
    }
}

/// HR record, 1:1 with a [`User`] by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub user_id: String,
    pub employee_id: String,
    pub title: String,
    pub manager_id: Option<String>,
    pub team: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
}

impl EntityRecord for Employee {
    fn check(&self) -> Result<(), ValidationError> {
        if let Some(salary) = self.salary {
            non_negative("salary", salary)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub lead_user_id: Option<String>,
    /// User ids; membership is not validated against the user collection.
    #[serde(default)]
    pub members: Vec<String>,
}

impl EntityRecord for Team {}

/// One record per clock event. Check-in and check-out for the same day are
/// separate documents and are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: AttendanceStatus,
    /// HH:MM
    pub check_in: Option<String>,
    /// HH:MM
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Remote,
    Leave,
}

impl EntityRecord for Attendance {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type", default)]
    pub kind: LeaveType,
    pub reason: Option<String>,
    #[serde(default)]
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Unpaid,
    Maternity,
    Paternity,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EntityRecord for Leave {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Blocked,
    Done,
}

impl EntityRecord for Task {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub user_id: String,
    pub task_id: Option<String>,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
}

impl EntityRecord for Timesheet {
    fn check(&self) -> Result<(), ValidationError> {
        within("hours", "between 0 and 24", self.hours, 0.0, 24.0)
    }
}

/// Pay stub snapshot. No arithmetic relation between gross, tax, deductions,
/// and net is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    pub user_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub gross: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub deductions: f64,
    pub net: f64,
    #[serde(default)]
    pub status: PayrollStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    #[default]
    Pending,
    Paid,
    OnHold,
}

impl EntityRecord for Payroll {
    fn check(&self) -> Result<(), ValidationError> {
        non_negative("gross", self.gross)?;
        non_negative("tax", self.tax)?;
        non_negative("deductions", self.deductions)?;
        non_negative("net", self.net)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    Paused,
    Closed,
}

impl EntityRecord for Job {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_text: Option<String>,
    #[serde(default)]
    pub stage: ApplicationStage,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStage {
    #[default]
    Applied,
    Screen,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl EntityRecord for Application {
    fn check(&self) -> Result<(), ValidationError> {
        email_shape("email", &self.email)?;
        if let Some(score) = self.score {
            within("score", "between 0 and 100", score, 0.0, 100.0)?;
        }
        Ok(())
    }
}

/// Output of the heuristic resume parser, persisted per application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeParseResult {
    pub application_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub years_experience: Option<f64>,
    pub education: Option<String>,
    pub raw_summary: Option<String>,
}

impl EntityRecord for ResumeParseResult {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub user_id: String,
    /// Free text, e.g. "2025-Q1".
    pub period: String,
    #[serde(default)]
    pub goals: Vec<String>,
    pub rating: Option<f64>,
    pub feedback: Option<String>,
}

impl EntityRecord for Performance {
    fn check(&self) -> Result<(), ValidationError> {
        if let Some(rating) = self.rating {
            within("rating", "between 1 and 5", rating, 1.0, 5.0)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub priority: Priority,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    All,
    Executive,
    TeamLead,
    Employee,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl EntityRecord for Announcement {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub user_id: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: TicketStatus,
    pub assignee_id: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl EntityRecord for Ticket {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
}

impl EntityRecord for Notification {}
