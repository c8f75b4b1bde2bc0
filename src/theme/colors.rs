//! Color constants of the two portfolio themes.
//!
//! Mirrors the custom properties in the stylesheet; the light theme only
//! overrides surfaces and text.

#![allow(dead_code)]

// === DARK (default) ===
pub const DARK_BG: &str = "#0f1115";
pub const DARK_SURFACE: &str = "#171a21";
pub const DARK_BORDER: &str = "#262a33";
pub const DARK_TEXT: &str = "#e8eaf0";
pub const DARK_TEXT_MUTED: &str = "rgba(232, 234, 240, 0.6)";

// === LIGHT ===
pub const LIGHT_BG: &str = "#f6f7fb";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_BORDER: &str = "#dde1ea";
pub const LIGHT_TEXT: &str = "#1b1e26";
pub const LIGHT_TEXT_MUTED: &str = "rgba(27, 30, 38, 0.6)";

// === ACCENTS (both themes) ===
pub const ACCENT: &str = "#4f8cff";
pub const ACCENT_GLOW: &str = "rgba(79, 140, 255, 0.3)";
pub const SUCCESS: &str = "#3ecf8e";
pub const WARNING: &str = "#f5a524";
pub const DONATE: &str = "#ffd500";
