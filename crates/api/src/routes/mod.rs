//! API Routes

pub mod dashboard;
pub mod data;
