//! Reusable UI components
//!
//! All components render plain markup with the class names the portfolio
//! stylesheet targets.

mod badge;
mod button;
mod icons;
mod progress_bar;
mod skeleton;
mod status;

pub use badge::*;
pub use button::*;
pub use icons::*;
pub use progress_bar::*;
pub use skeleton::*;
pub use status::*;
