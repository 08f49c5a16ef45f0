//! # Views
//!
//! Per-request view state for the three pages. Nothing here outlives a single
//! request; the server builds a view, renders it and drops it.

pub mod calendar;
pub mod dashboard;
pub mod participation;
pub mod share;
