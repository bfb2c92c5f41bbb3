//! HTML rendering of the catalog.
//!
//! Pure functions from catalog values to page strings; all filesystem
//! writing lives in [`crate::io`]. The site is multi-page: one overview
//! listing distribution summaries, one detail page per distribution, and
//! a shared stylesheet.

pub mod pages;

pub use pages::{render_distribution_page, render_main_index};

/// Shared stylesheet written once and linked from every page.
pub const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// Public base URL of the repository, shown in setup instructions.
pub const REPO_URL: &str = "https://apt.hatlabs.fi";

/// Keyring path used in the generated sources.list lines.
pub const KEYRING_PATH: &str = "/usr/share/keyrings/hatlabs.gpg";

/// Filename of the downloadable signing key.
pub const KEY_FILE: &str = "hat-labs-apt-key.asc";

/// Escape text for safe embedding in HTML content and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn stylesheet_carries_required_classes() {
        assert!(STYLESHEET.contains(".dist-card"));
        assert!(STYLESHEET.contains(".breadcrumb"));
        assert!(STYLESHEET.contains(".package-item"));
        assert!(STYLESHEET.contains("@media"));
    }
}
