//! CEP GUI Client Library
//!
//! This crate provides the main application logic for the CEP (Campus Event
//! Platform) GUI client, a desktop prototype for campus event discovery and
//! promoter management.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
