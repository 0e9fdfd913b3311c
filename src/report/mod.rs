//! Audit report rendering.
//!
//! [`human`] renders each check's section through a
//! [`UserInterface`](crate::ui::UserInterface) as the audit runs;
//! [`json`] writes the finished [`AuditReport`](crate::audit::AuditReport)
//! for tooling.

pub mod human;
pub mod json;

pub use json::JsonFormatter;
