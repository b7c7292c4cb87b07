//! Entity schema registry.
//!
//! The fifteen document kinds the platform persists are a closed set. Each kind
//! maps to a typed record in [`records`]; inbound payloads are validated by
//! deserializing into that record (presence, types, and enum sets), running its
//! range checks, and re-serializing so stored documents carry materialized
//! defaults.

pub(crate) mod checks;
pub mod records;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use records::{
    Announcement, Application, ApplicationStage, Attendance, AttendanceStatus, Audience, Employee,
    Job, JobStatus, Leave, LeaveStatus, LeaveType, Notification, Payroll, PayrollStatus,
    Performance, Priority, ResumeParseResult, Task, TaskStatus, Team, Ticket, TicketStatus,
    Timesheet, User, UserRole,
};

/// Structured validation failure: which field, what was expected, what arrived.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {kind} payload: {detail}")]
    Shape { kind: &'static str, detail: String },
    #[error("field '{field}' must be {constraint}, found {found}")]
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
        found: f64,
    },
    #[error("field '{field}' must look like an email address, found '{found}'")]
    Email { field: &'static str, found: String },
}

/// A persistable record: decodable from a payload, encodable as a document,
/// with optional range checks beyond what serde enforces.
pub(crate) trait EntityRecord: DeserializeOwned + Serialize {
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The closed set of entity kinds the dispatcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Employee,
    Team,
    Attendance,
    Leave,
    Task,
    Timesheet,
    Payroll,
    Job,
    Application,
    ResumeParseResult,
    Performance,
    Announcement,
    Ticket,
    Notification,
}

impl EntityKind {
    pub const ALL: [EntityKind; 15] = [
        EntityKind::User,
        EntityKind::Employee,
        EntityKind::Team,
        EntityKind::Attendance,
        EntityKind::Leave,
        EntityKind::Task,
        EntityKind::Timesheet,
        EntityKind::Payroll,
        EntityKind::Job,
        EntityKind::Application,
        EntityKind::ResumeParseResult,
        EntityKind::Performance,
        EntityKind::Announcement,
        EntityKind::Ticket,
        EntityKind::Notification,
    ];

    /// Case-sensitive lookup of a request-supplied kind name. Only the
    /// lowercase collection names are recognized.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "user" => Some(Self::User),
            "employee" => Some(Self::Employee),
            "team" => Some(Self::Team),
            "attendance" => Some(Self::Attendance),
            "leave" => Some(Self::Leave),
            "task" => Some(Self::Task),
            "timesheet" => Some(Self::Timesheet),
            "payroll" => Some(Self::Payroll),
            "job" => Some(Self::Job),
            "application" => Some(Self::Application),
            "resumeparseresult" => Some(Self::ResumeParseResult),
            "performance" => Some(Self::Performance),
            "announcement" => Some(Self::Announcement),
            "ticket" => Some(Self::Ticket),
            "notification" => Some(Self::Notification),
            _ => None,
        }
    }

    /// Store collection backing this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Employee => "employee",
            Self::Team => "team",
            Self::Attendance => "attendance",
            Self::Leave => "leave",
            Self::Task => "task",
            Self::Timesheet => "timesheet",
            Self::Payroll => "payroll",
            Self::Job => "job",
            Self::Application => "application",
            Self::ResumeParseResult => "resumeparseresult",
            Self::Performance => "performance",
            Self::Announcement => "announcement",
            Self::Ticket => "ticket",
            Self::Notification => "notification",
        }
    }

    /// Validate an untyped payload against this kind's schema and return the
    /// normalized document (defaults filled, unknown fields dropped).
    pub fn validate(&self, payload: Value) -> Result<Value, ValidationError> {
        match self {
            Self::User => normalize::<User>(self.collection(), payload),
            Self::Employee => normalize::<Employee>(self.collection(), payload),
            Self::Team => normalize::<Team>(self.collection(), payload),
            Self::Attendance => normalize::<Attendance>(self.collection(), payload),
            Self::Leave => normalize::<Leave>(self.collection(), payload),
            Self::Task => normalize::<Task>(self.collection(), payload),
            Self::Timesheet => normalize::<Timesheet>(self.collection(), payload),
            Self::Payroll => normalize::<Payroll>(self.collection(), payload),
            Self::Job => normalize::<Job>(self.collection(), payload),
            Self::Application => normalize::<Application>(self.collection(), payload),
            Self::ResumeParseResult => normalize::<ResumeParseResult>(self.collection(), payload),
            Self::Performance => normalize::<Performance>(self.collection(), payload),
            Self::Announcement => normalize::<Announcement>(self.collection(), payload),
            Self::Ticket => normalize::<Ticket>(self.collection(), payload),
            Self::Notification => normalize::<Notification>(self.collection(), payload),
        }
    }
}

fn normalize<T: EntityRecord>(kind: &'static str, payload: Value) -> Result<Value, ValidationError> {
    let record: T = serde_json::from_value(payload).map_err(|err| ValidationError::Shape {
        kind,
        detail: err.to_string(),
    })?;
    record.check()?;
    serde_json::to_value(&record).map_err(|err| ValidationError::Shape {
        kind,
        detail: err.to_string(),
    })
}
