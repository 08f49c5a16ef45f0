pub mod events;
pub mod pages;
