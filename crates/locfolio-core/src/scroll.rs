//! In-page anchor navigation.

/// An in-page anchor the page scrolls to smoothly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTarget {
    id: String,
}

impl AnchorTarget {
    /// Parse an `href`.
    ///
    /// Only `#id` links are intercepted; a bare `#` and any other link keep
    /// their native behavior.
    pub fn parse(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        Some(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Script that smoothly scrolls the document to this anchor, leaving
    /// room for the fixed header
    pub fn scroll_script(&self, header_offset: f64) -> String {
        let id = serde_json::Value::from(self.id.as_str());
        format!(
            "const t = document.getElementById({id}); \
             if (t) {{ window.scrollTo({{ top: t.getBoundingClientRect().top + window.pageYOffset - {header_offset}, behavior: 'smooth' }}); }}"
        )
    }
}

/// Pending smooth scroll the UI has to perform
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: AnchorTarget,
    pub header_offset: f64,
}

impl ScrollRequest {
    pub fn new(target: AnchorTarget, header_offset: f64) -> Self {
        Self {
            target,
            header_offset,
        }
    }

    pub fn script(&self) -> String {
        self.target.scroll_script(self.header_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_OFFSET;

    #[test]
    fn bare_hash_is_not_intercepted() {
        assert_eq!(AnchorTarget::parse("#"), None);
        assert_eq!(AnchorTarget::parse("https://example.com/#x"), None);
        assert_eq!(AnchorTarget::parse("#projects").unwrap().id(), "projects");
    }

    #[test]
    fn script_quotes_the_id() {
        let target = AnchorTarget::parse("#don't").unwrap();
        let script = ScrollRequest::new(target, HEADER_OFFSET).script();
        assert!(script.contains(r#"document.getElementById("don't")"#));
        assert!(script.contains("- 80"));
        assert!(script.contains("behavior: 'smooth'"));
    }

    #[test]
    fn script_uses_the_configured_offset() {
        let target = AnchorTarget::parse("#donate").unwrap();
        let script = ScrollRequest::new(target, 120.0).script();
        assert!(script.contains("window.pageYOffset - 120"));
    }
}
