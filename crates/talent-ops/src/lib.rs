//! Talent Ops core: a workforce-management backend over a pluggable document
//! store. A closed entity registry validates document-shaped payloads, a
//! generic dispatcher persists and lists them, and a handful of derived
//! operations (attendance clocking, resume-text parsing, workforce insights,
//! demo seeding) sit alongside.

pub mod config;
pub mod entities;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod workforce;
