//! Domain types, constants and validators shared by the campaign tracker crates.

pub mod campaign;
pub mod dashboard;
pub mod error;
pub mod types;
