//! Workforce operations over the entity registry and document store: generic
//! create/list dispatch, attendance clock events, the demo resume parser,
//! metrics insights, and the demo organization seeder.

pub mod ats;
pub mod attendance;
pub mod insights;
pub mod router;
pub mod seed;
pub mod service;

pub use ats::{parse_resume_text, ResumeInsights};
pub use attendance::ClockDirection;
pub use insights::{InsightRequest, WorkforceInsights, WorkforceSummary, DEFAULT_HORIZON_DAYS};
pub use router::workforce_router;
pub use seed::SeedSummary;
pub use service::{WorkforceError, WorkforceService, DEFAULT_LIST_LIMIT};
