//! Services - Data Access and Background Work

pub mod catalog;
pub mod service_hub;
