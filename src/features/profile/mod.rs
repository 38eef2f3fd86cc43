//! Profile Feature - Promoter Profile and Analytics

pub mod controller;
pub mod page;
