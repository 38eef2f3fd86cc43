//! Colors - CEP Theme Colors
//!
//! Dark palette matching the mobile prototype.

use gpui::{rgb, Rgba};

/// CEP color palette - All colors are accessed via associated functions
pub struct CepColors;

impl CepColors {
    // Primary colors
    /// Primary accent - Light purple
    pub fn accent() -> Rgba { rgb(0xbb86fc) }
    /// Secondary accent - Teal (rewards, analytics)
    pub fn accent_teal() -> Rgba { rgb(0x03dac6) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0x121212) }
    /// Card / content surface
    pub fn surface() -> Rgba { rgb(0x1e1e1e) }
    /// Log panel background
    pub fn log_panel_bg() -> Rgba { rgb(0x0d0d0d) }

    // My Events grid palette (navy variant)
    /// Grid page background
    pub fn grid_bg() -> Rgba { rgb(0x0b1220) }
    /// Grid card background
    pub fn grid_card() -> Rgba { rgb(0x1e293b) }
    /// Grid button background
    pub fn grid_button() -> Rgba { rgb(0x253046) }
    /// Grid image placeholder surface
    pub fn grid_surface() -> Rgba { rgb(0x2a364a) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0xe0e0e0) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0xb0b0b0) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x888888) }
    /// Text on accent-colored surfaces
    pub fn text_on_accent() -> Rgba { rgb(0x121212) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Soft red
    pub fn danger() -> Rgba { rgb(0xcf6679) }
    /// Delete button - Brick red
    pub fn delete() -> Rgba { rgb(0xb23b3b) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0x333333) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0xbb86fc) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0x2a2a2a) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0x444444) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x777777) }

    // Tab bar colors
    /// Tab bar background
    pub fn tab_bar_bg() -> Rgba { rgb(0x121212) }
    /// Inactive tab tint
    pub fn tab_inactive() -> Rgba { rgb(0x888888) }
}
