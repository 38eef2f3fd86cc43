//! Layout Components

pub mod log_panel;
pub mod tab_bar;
