//! Page footer with the contact address and the current year.

use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn SiteFooter() -> Element {
    let page = use_page();
    let (year, email) = {
        let page = page.read();
        (page.footer_year(), page.config().contact_email.clone())
    };

    rsx! {
        footer { id: "contact", class: "site-footer",
            p { class: "footer-contact",
                "Пишіть: "
                a { href: "mailto:{email}", "{email}" }
            }
            p { class: "footer-copyright",
                "\u{00A9} "
                span { id: "currentYear", "{year}" }
                " Sense5 Studio"
            }
        }
    }
}
