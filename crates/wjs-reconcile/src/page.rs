//! Wiki.js page types.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Content editor of a page.
///
/// `Code` is raw HTML. The `content` field of a page must have valid syntax
/// for its editor; the remote service validates this, not us.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Editor {
    /// Markdown source.
    #[default]
    Markdown,
    /// AsciiDoc source.
    Asciidoc,
    /// Raw HTML.
    Code,
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Markdown => "markdown",
            Self::Asciidoc => "asciidoc",
            Self::Code => "code",
        };
        f.write_str(name)
    }
}

/// A page as stored by the remote Wiki.js service.
///
/// Fetched at most once per invocation, held only for the duration of a
/// single update or delete operation, and never persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Server-assigned page id.
    pub id: i64,
    /// Virtual path of the page.
    pub path: String,
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Page content in the syntax given by `editor`.
    pub content: String,
    /// Content editor.
    pub editor: Editor,
    /// Whether the page is private.
    pub is_private: bool,
    /// Whether the page is published.
    pub is_published: bool,
    /// Page locale.
    pub locale: String,
    /// Date the page starts to be published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_start_date: Option<String>,
    /// Date the page is no longer published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_end_date: Option<String>,
    /// Custom CSS injected into the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_css: Option<String>,
    /// Custom JavaScript injected into the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_js: Option<String>,
    /// Tags applied to the page. Order is irrelevant.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_editor_serializes_lowercase() {
        assert_eq!(serde_json::json!(Editor::Markdown), "markdown");
        assert_eq!(serde_json::json!(Editor::Asciidoc), "asciidoc");
        assert_eq!(serde_json::json!(Editor::Code), "code");
    }

    #[test]
    fn test_page_round_trips_camel_case_keys() {
        let page = Page {
            id: 7,
            path: "topic/page".to_owned(),
            title: "Topic".to_owned(),
            description: String::new(),
            content: "# Topic".to_owned(),
            editor: Editor::Markdown,
            is_private: false,
            is_published: true,
            locale: "en".to_owned(),
            publish_start_date: None,
            publish_end_date: None,
            script_css: None,
            script_js: None,
            tags: BTreeSet::from(["infra".to_owned()]),
        };

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["isPrivate"], false);
        assert_eq!(value["isPublished"], true);
        assert!(value.get("publishStartDate").is_none());

        let back: Page = serde_json::from_value(value).unwrap();
        assert_eq!(back, page);
    }
}
