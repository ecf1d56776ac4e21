//! Canonical desired page state.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::page::Editor;

/// How the target page is addressed.
///
/// An explicit id always wins over a path when both are supplied; the id is
/// taken as authoritative and no lookup is performed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAddress {
    /// Server-assigned page id.
    Id(i64),
    /// Virtual path, resolved together with the desired locale.
    Path(String),
}

/// The page configuration an operator wants to exist.
///
/// Optional fields carry `None` when they were not supplied; an unset field
/// never participates in diffing. A present-but-empty string is a value (it
/// clears the field remotely), never the same thing as absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredPage {
    /// Explicit target id, when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub editor: Editor,
    pub is_private: bool,
    pub is_published: bool,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_js: Option<String>,
    pub tags: BTreeSet<String>,
}

impl Default for DesiredPage {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            content: String::new(),
            path: None,
            editor: Editor::default(),
            is_private: false,
            is_published: true,
            locale: "en".to_owned(),
            publish_start_date: None,
            publish_end_date: None,
            script_css: None,
            script_js: None,
            tags: BTreeSet::new(),
        }
    }
}

impl DesiredPage {
    /// The target address, id taking precedence over path.
    ///
    /// Returns `None` when neither is given; the upstream parameter check
    /// rejects that before reconciliation starts.
    #[must_use]
    pub fn address(&self) -> Option<PageAddress> {
        if let Some(id) = self.id {
            return Some(PageAddress::Id(id));
        }
        self.path.clone().map(PageAddress::Path)
    }

    /// The creation record for this page.
    ///
    /// Server-required string fields default to empty when unset.
    #[must_use]
    pub fn to_new_page(&self) -> NewPage {
        NewPage {
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            content: self.content.clone(),
            path: self.path.clone().unwrap_or_default(),
            editor: self.editor,
            is_private: self.is_private,
            is_published: self.is_published,
            locale: self.locale.clone(),
            publish_start_date: self.publish_start_date.clone(),
            publish_end_date: self.publish_end_date.clone(),
            script_css: self.script_css.clone(),
            script_js: self.script_js.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// A page creation record.
///
/// Deliberately has no id field: creation can never claim a pre-existing id,
/// no matter what the invocation supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub title: String,
    pub description: String,
    pub content: String,
    pub path: String,
    pub editor: Editor,
    pub is_private: bool,
    pub is_published: bool,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_js: Option<String>,
    pub tags: BTreeSet<String>,
}
