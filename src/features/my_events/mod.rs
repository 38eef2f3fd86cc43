//! My Events Feature - Promoter's Own Listings

pub mod controller;
pub mod page;
