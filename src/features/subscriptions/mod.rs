//! Subscriptions Feature - Subscribed Promoters

pub mod controller;
pub mod page;
