//! Events Feature - Event Feed with Filter Panel

pub mod controller;
pub mod page;
