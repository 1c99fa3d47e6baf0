//! Row types and request DTOs.

pub mod campaign;
pub mod dashboard;
