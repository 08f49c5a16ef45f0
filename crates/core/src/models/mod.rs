pub mod availability;
pub mod dashboard;
pub mod event;
pub mod participant;
