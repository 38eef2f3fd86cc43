//! Map Feature - Venue Map

pub mod controller;
pub mod page;
pub mod projection;
