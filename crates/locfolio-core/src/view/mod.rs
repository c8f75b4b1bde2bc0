//! View models shared by the desktop UI and the HTML renderer.

pub mod card;
pub mod modal;

pub use card::{build_cards, CardLink, CardView, LinkKind, SoonCardView};
pub use modal::{
    format_release_date, DownloadAction, Instructions, ModalView, INSTRUCTIONS_PENDING,
};

/// Shown in the grid when the data file holds no projects
pub const EMPTY_STATE: &str = "Проєктів не знайдено.";

/// Shown in the grid when the data file could not be loaded
pub const LOAD_FAILED: &str = "Не вдалося завантажити проєкти.";
