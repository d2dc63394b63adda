//! Credential values, checks and reporting

pub mod credentials;
pub mod error;
pub mod report;
pub mod types;
