//! Localization Portfolio UI Components
//!
//! Small Dioxus building blocks shared by the portfolio page: buttons, the
//! progress bar, badges, the status indicator and loading skeletons.
//!
//! ## Styling
//!
//! Components only emit class names. Colors come from the page stylesheet,
//! which defines both themes through CSS custom properties keyed on the
//! `data-theme` attribute:
//! - **Accent (#4f8cff)**: links, primary buttons, progress fill
//! - **Success (#3ecf8e)**: completed status
//! - **Warning (#f5a524)**: in-progress status, NEW badge

pub mod components;

pub use components::*;
