//! Composite Components

pub mod modal;
