//! Turns catalog views into text.
//!
//! Every string that originates in the index is untrusted. Each renderer
//! escapes it for its own output medium right here, at the boundary.

mod html;
mod text;

use crate::catalog::{CatalogView, DetailView};

pub use html::HtmlRenderer;
pub use text::TextRenderer;

pub trait Render {
    /// The whole list, or the empty/failed state.
    fn catalog(&self, view: &CatalogView) -> String;

    /// The detail panel of a single release.
    fn detail(&self, detail: &DetailView) -> String;
}

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drops control characters so index data cannot drive the terminal.
pub fn strip_control(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain-text 1.2.3"), "plain-text 1.2.3");
    }

    #[test]
    fn test_strip_control() {
        assert_eq!(strip_control("nginx\u{1b}[31m\n"), "nginx[31m");
        assert_eq!(strip_control("tab\there"), "tabhere");
    }
}
