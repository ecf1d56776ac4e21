//! Inbound invocation parameters and desired-state normalization.
//!
//! The orchestration host supplies one JSON document per invocation. Key
//! names on the wire match the declared module schema exactly, mixed snake
//! and camel case included. Unknown keys are rejected.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::desired::DesiredPage;
use crate::page::Editor;

/// Whether the page should exist after the invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Create or update the page.
    #[default]
    Present,
    /// Delete the page.
    Absent,
}

/// Raw parameter document for one invocation.
///
/// Transport and control fields (`api_url`, `api_key`, `state`) ride along
/// with the page fields; [`Params::normalize`] drops them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// URL of the Wiki.js GraphQL endpoint. May come from configuration
    /// instead of the document.
    #[serde(default)]
    pub api_url: Option<String>,
    /// API key for the endpoint. May come from configuration instead.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub editor: Editor,
    #[serde(default, rename = "isPrivate")]
    pub is_private: bool,
    #[serde(default = "default_true", rename = "isPublished")]
    pub is_published: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default, rename = "publishStartDate")]
    pub publish_start_date: Option<String>,
    #[serde(default, rename = "publishEndDate")]
    pub publish_end_date: Option<String>,
    #[serde(default, rename = "scriptCss")]
    pub script_css: Option<String>,
    #[serde(default, rename = "scriptJs")]
    pub script_js: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

fn default_true() -> bool {
    true
}

fn default_locale() -> String {
    "en".to_owned()
}

impl Default for Params {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            state: State::default(),
            id: None,
            title: None,
            description: None,
            content: None,
            path: None,
            editor: Editor::default(),
            is_private: false,
            is_published: true,
            locale: default_locale(),
            publish_start_date: None,
            publish_end_date: None,
            script_css: None,
            script_js: None,
            tags: BTreeSet::new(),
        }
    }
}

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    /// The document carried no `content`.
    #[error("content is required")]
    MissingContent,
    /// Neither `id` nor `path` was given.
    #[error("either id or path is required")]
    MissingAddress,
}

impl Params {
    /// Check the cross-field requirements the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error when `content` is missing or when neither `id` nor
    /// `path` is given.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.content.is_none() {
            return Err(ParamsError::MissingContent);
        }
        if self.id.is_none() && self.path.is_none() {
            return Err(ParamsError::MissingAddress);
        }
        Ok(())
    }

    /// Convert to the canonical desired-state record.
    ///
    /// Drops the transport and control fields and carries unset optional
    /// fields as `None` so they stay out of later diffing. Pure
    /// transformation; no lookups, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::MissingContent`] when the document carried no
    /// `content`; [`Params::validate`] catches this first in normal flow.
    pub fn normalize(&self) -> Result<DesiredPage, ParamsError> {
        let content = self.content.clone().ok_or(ParamsError::MissingContent)?;
        Ok(DesiredPage {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            content,
            path: self.path.clone(),
            editor: self.editor,
            is_private: self.is_private,
            is_published: self.is_published,
            locale: self.locale.clone(),
            publish_start_date: self.publish_start_date.clone(),
            publish_end_date: self.publish_end_date.clone(),
            script_css: self.script_css.clone(),
            script_js: self.script_js.clone(),
            tags: self.tags.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_defaults() {
        let params: Params = serde_json::from_str(r#"{"content": "x", "path": "a"}"#).unwrap();
        assert_eq!(params.state, State::Present);
        assert_eq!(params.editor, Editor::Markdown);
        assert!(!params.is_private);
        assert!(params.is_published);
        assert_eq!(params.locale, "en");
        assert!(params.tags.is_empty());
    }

    #[test]
    fn test_wire_key_names_are_mixed_case() {
        let doc = r#"{
            "api_url": "https://wiki.example.com/graphql",
            "api_key": "k",
            "content": "x",
            "path": "a/b",
            "isPrivate": true,
            "isPublished": false,
            "publishStartDate": "2026-01-01",
            "scriptCss": ".a {}",
            "tags": ["a", "b"]
        }"#;
        let params: Params = serde_json::from_str(doc).unwrap();
        assert!(params.is_private);
        assert!(!params.is_published);
        assert_eq!(params.publish_start_date.as_deref(), Some("2026-01-01"));
        assert_eq!(params.script_css.as_deref(), Some(".a {}"));
        assert_eq!(params.tags.len(), 2);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Params, _> =
            serde_json::from_str(r#"{"content": "x", "bogus": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_content() {
        let params: Params = serde_json::from_str(r#"{"path": "a"}"#).unwrap();
        assert_eq!(params.validate(), Err(ParamsError::MissingContent));
    }

    #[test]
    fn test_validate_requires_id_or_path() {
        let params: Params = serde_json::from_str(r#"{"content": "x"}"#).unwrap();
        assert_eq!(params.validate(), Err(ParamsError::MissingAddress));

        let by_id: Params = serde_json::from_str(r#"{"content": "x", "id": 3}"#).unwrap();
        assert_eq!(by_id.validate(), Ok(()));
    }

    #[test]
    fn test_normalize_drops_control_fields_and_keeps_unset_as_none() {
        let doc = r#"{
            "api_url": "https://wiki.example.com/graphql",
            "api_key": "secret",
            "state": "present",
            "content": "x",
            "path": "a/b"
        }"#;
        let params: Params = serde_json::from_str(doc).unwrap();
        let desired = params.normalize().unwrap();

        assert_eq!(desired.content, "x");
        assert_eq!(desired.path.as_deref(), Some("a/b"));
        // Unset optionals stay absent so they never enter a diff.
        assert_eq!(desired.title, None);
        assert_eq!(desired.description, None);
        assert_eq!(desired.publish_start_date, None);

        let value = serde_json::to_value(&desired).unwrap();
        assert!(value.get("api_url").is_none());
        assert!(value.get("api_key").is_none());
        assert!(value.get("state").is_none());
    }

    #[test]
    fn test_normalize_keeps_explicit_empty_string() {
        let params: Params =
            serde_json::from_str(r#"{"content": "x", "path": "a", "title": ""}"#).unwrap();
        let desired = params.normalize().unwrap();
        // Present-but-empty is a value, not absence.
        assert_eq!(desired.title.as_deref(), Some(""));
    }
}
