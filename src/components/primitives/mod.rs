//! Primitive Components

pub mod button;
pub mod chip;
pub mod text_input;
