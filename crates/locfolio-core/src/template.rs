//! Static page assembly.
//!
//! A page template must carry every element the page controllers talk to.
//! [`assemble`] fills the grid container and the footer year of such a
//! template with rendered content.

use crate::error::{FolioError, FolioResult};

/// Element ids a page must provide
pub const REQUIRED_IDS: [&str; 7] = [
    "projectsGrid",
    "projectModal",
    "modalContent",
    "modalClose",
    "themeToggle",
    "themeIcon",
    "currentYear",
];

/// Byte offset just past the opening tag carrying `id="<id>"`.
///
/// The attribute must follow whitespace, so `data-id="<id>"` does not count.
fn content_start(html: &str, id: &str) -> Option<usize> {
    let needle = format!(r#"id="{}""#, id);
    let (attr, _) = html.match_indices(&needle).find(|(at, _)| {
        html[..*at]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
    })?;
    let close = html[attr..].find('>')?;
    Some(attr + close + 1)
}

/// Fail with the first required id the template lacks
pub fn check_contract(html: &str) -> FolioResult<()> {
    for id in REQUIRED_IDS {
        if content_start(html, id).is_none() {
            return Err(FolioError::MissingElement(id));
        }
    }
    Ok(())
}

fn insert_after_open_tag(html: &mut String, id: &'static str, content: &str) -> FolioResult<()> {
    let at = content_start(html, id).ok_or(FolioError::MissingElement(id))?;
    html.insert_str(at, content);
    Ok(())
}

/// Fill a template with the rendered grid and the footer year.
///
/// The grid and year elements are expected to be empty in the template.
pub fn assemble(template: &str, grid_html: &str, year: i32) -> FolioResult<String> {
    check_contract(template)?;
    let mut page = template.to_string();
    insert_after_open_tag(&mut page, "currentYear", &year.to_string())?;
    insert_after_open_tag(&mut page, "projectsGrid", grid_html)?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<html><body>
<button id="themeToggle"><span id="themeIcon"></span></button>
<div id="projectsGrid" class="projects-grid" role="list"></div>
<div id="projectModal" class="modal" aria-hidden="true"><button id="modalClose">x</button><div id="modalContent"></div></div>
<footer>&copy; <span id="currentYear"></span></footer>
</body></html>"#;

    #[test]
    fn complete_template_passes() {
        assert!(check_contract(TEMPLATE).is_ok());
    }

    #[test]
    fn missing_element_is_reported() {
        let broken = TEMPLATE.replace(r#"id="modalClose""#, "");
        match check_contract(&broken) {
            Err(FolioError::MissingElement(id)) => assert_eq!(id, "modalClose"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn prefixed_id_attributes_do_not_count() {
        let decoy = TEMPLATE.replace(r#"<div id="projectsGrid""#, r#"<div data-id="projectsGrid""#);
        match check_contract(&decoy) {
            Err(FolioError::MissingElement(id)) => assert_eq!(id, "projectsGrid"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn content_goes_into_the_real_element() {
        let template = TEMPLATE.replace(
            r#"<div id="projectsGrid""#,
            r#"<section data-id="projectsGrid"></section><div id="projectsGrid""#,
        );
        let page = assemble(&template, "<p>cards</p>", 2026).unwrap();
        assert!(page.contains(r#"<section data-id="projectsGrid"></section>"#));
        assert!(page.contains(r#"role="list"><p>cards</p></div>"#));
    }

    #[test]
    fn assemble_fills_grid_and_year() {
        let page = assemble(TEMPLATE, "<p>cards</p>", 2026).unwrap();
        assert!(page.contains(r#"role="list"><p>cards</p></div>"#));
        assert!(page.contains(r#"<span id="currentYear">2026</span>"#));
    }
}
