//! UI Components for the portfolio page.

mod donate_section;
mod nav_header;
mod project_card;
mod project_grid;
mod project_modal;
mod site_footer;
mod theme_toggle;

pub use donate_section::DonateSection;
pub use nav_header::NavHeader;
pub use project_card::{ProjectCard, SoonCard};
pub use project_grid::ProjectGrid;
pub use project_modal::ProjectModal;
pub use site_footer::SiteFooter;
pub use theme_toggle::ThemeToggle;
