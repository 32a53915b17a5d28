//! Aggregation, scoring, and reporting.
//!
//! - [`runner`] - drives groups and checks in order
//! - [`health`] - running totals and the finalized [`HealthReport`]
//! - [`status`] - threshold scoring into a [`HealthStatus`]
//! - [`render`] - text for each report line

pub mod health;
pub mod render;
pub mod runner;
pub mod status;

pub use health::{GroupReport, HealthReport, ReportBuilder};
pub use runner::HealthRunner;
pub use status::{success_rate, HealthStatus, FAIR_THRESHOLD, GOOD_THRESHOLD};
