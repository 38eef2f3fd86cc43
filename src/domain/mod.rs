//! Domain - Core Data Types

pub mod config;
pub mod listing;
pub mod promoter;
pub mod subscription;
pub mod venue;
