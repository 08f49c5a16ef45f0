//! # ScheduleSync Core
//!
//! Domain types shared by the database layer and the HTTP server: the event,
//! participant and availability models, the error type, calendar date
//! helpers, and the per-request view state behind each page.

pub mod dates;
pub mod errors;
pub mod models;
pub mod views;
