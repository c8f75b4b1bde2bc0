//! Home page - the whole portfolio on one scrolling page.
//!
//! Header with anchors and the theme toggle, the project grid, the donate
//! section and the footer. The project modal sits on top of everything.

use dioxus::prelude::*;

use crate::components::{DonateSection, NavHeader, ProjectGrid, ProjectModal, SiteFooter};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavHeader {}

        main { class: "page",
            section { id: "hero", class: "hero",
                h1 { class: "hero-title", "Українські локалізації ігор" }
                p { class: "hero-subtitle",
                    "Перекладаємо інді-ігри українською: тексти, інтерфейс, субтитри."
                }
            }

            section { id: "projects", class: "projects-section",
                h2 { class: "section-title", "Проєкти" }
                ProjectGrid {}
            }

            DonateSection {}
        }

        SiteFooter {}
        ProjectModal {}
    }
}
