//! Minimal-change computation between desired and actual page state.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::desired::DesiredPage;
use crate::page::{Editor, Page};

/// The minimal set of field changes converging actual state to desired
/// state.
///
/// `Some(value)` means "set this field to `value`". Tags carry only the
/// additions; tags present on the server but absent from the desired set are
/// left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<Editor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_js: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
}

impl PageDelta {
    /// True when no field needs to change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when the page has to move: path or locale differ.
    #[must_use]
    pub fn requires_move(&self) -> bool {
        self.path.is_some() || self.locale.is_some()
    }
}

/// Compute the minimal delta from `actual` to `desired`.
///
/// Exact-value equality, no normalization: whitespace and case differences
/// count as changes. Fields unset in the desired state never enter the
/// delta. Tags are the set difference `desired − actual`; the update is
/// additive-only for tags, so a tag missing from the desired set is never
/// removed from the server.
#[must_use]
pub fn diff(desired: &DesiredPage, actual: &Page) -> PageDelta {
    let mut delta = PageDelta::default();

    if let Some(title) = &desired.title
        && *title != actual.title
    {
        delta.title = Some(title.clone());
    }
    if let Some(description) = &desired.description
        && *description != actual.description
    {
        delta.description = Some(description.clone());
    }
    if desired.content != actual.content {
        delta.content = Some(desired.content.clone());
    }
    if let Some(path) = &desired.path
        && *path != actual.path
    {
        delta.path = Some(path.clone());
    }
    if desired.editor != actual.editor {
        delta.editor = Some(desired.editor);
    }
    if desired.is_private != actual.is_private {
        delta.is_private = Some(desired.is_private);
    }
    if desired.is_published != actual.is_published {
        delta.is_published = Some(desired.is_published);
    }
    if desired.locale != actual.locale {
        delta.locale = Some(desired.locale.clone());
    }
    if let Some(date) = &desired.publish_start_date
        && actual.publish_start_date.as_ref() != Some(date)
    {
        delta.publish_start_date = Some(date.clone());
    }
    if let Some(date) = &desired.publish_end_date
        && actual.publish_end_date.as_ref() != Some(date)
    {
        delta.publish_end_date = Some(date.clone());
    }
    if let Some(css) = &desired.script_css
        && actual.script_css.as_ref() != Some(css)
    {
        delta.script_css = Some(css.clone());
    }
    if let Some(js) = &desired.script_js
        && actual.script_js.as_ref() != Some(js)
    {
        delta.script_js = Some(js.clone());
    }

    let added: BTreeSet<String> = desired.tags.difference(&actual.tags).cloned().collect();
    if !added.is_empty() {
        delta.tags = Some(added);
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn actual() -> Page {
        Page {
            id: 7,
            path: "topic/page".to_owned(),
            title: "Topic".to_owned(),
            description: "About the topic".to_owned(),
            content: "# Topic".to_owned(),
            editor: Editor::Markdown,
            is_private: false,
            is_published: true,
            locale: "en".to_owned(),
            publish_start_date: None,
            publish_end_date: None,
            script_css: None,
            script_js: None,
            tags: BTreeSet::from(["b".to_owned(), "c".to_owned()]),
        }
    }

    fn matching_desired() -> DesiredPage {
        DesiredPage {
            title: Some("Topic".to_owned()),
            description: Some("About the topic".to_owned()),
            content: "# Topic".to_owned(),
            path: Some("topic/page".to_owned()),
            tags: BTreeSet::from(["b".to_owned()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_state_yields_empty_delta() {
        let delta = diff(&matching_desired(), &actual());
        assert!(delta.is_empty());
        assert!(!delta.requires_move());
    }

    #[test]
    fn test_unset_fields_never_enter_the_delta() {
        let desired = DesiredPage {
            content: "# Topic".to_owned(),
            path: Some("topic/page".to_owned()),
            ..Default::default()
        };
        // title and description differ from the server but are unset here.
        let delta = diff(&desired, &actual());
        assert!(delta.is_empty());
    }

    #[test]
    fn test_exact_equality_no_trimming_or_case_folding() {
        let mut desired = matching_desired();
        desired.title = Some("Topic ".to_owned());
        let delta = diff(&desired, &actual());
        assert_eq!(delta.title.as_deref(), Some("Topic "));

        let mut desired = matching_desired();
        desired.title = Some("topic".to_owned());
        let delta = diff(&desired, &actual());
        assert_eq!(delta.title.as_deref(), Some("topic"));
    }

    #[test]
    fn test_empty_string_is_a_change_not_absence() {
        let mut desired = matching_desired();
        desired.description = Some(String::new());
        let delta = diff(&desired, &actual());
        assert_eq!(delta.description.as_deref(), Some(""));
    }

    #[test]
    fn test_date_set_when_server_has_none() {
        let mut desired = matching_desired();
        desired.publish_start_date = Some("2026-01-01".to_owned());
        let delta = diff(&desired, &actual());
        assert_eq!(delta.publish_start_date.as_deref(), Some("2026-01-01"));
    }

    #[test]
    fn test_tag_delta_is_additive_only() {
        let mut desired = matching_desired();
        desired.tags = BTreeSet::from(["a".to_owned(), "b".to_owned()]);
        let delta = diff(&desired, &actual());
        // Actual has {b, c}: only `a` is new; `b` is already there and the
        // removal of `c` is never requested.
        assert_eq!(delta.tags, Some(BTreeSet::from(["a".to_owned()])));
    }

    #[test]
    fn test_tag_subset_yields_no_tag_entry() {
        let mut desired = matching_desired();
        desired.tags = BTreeSet::from(["b".to_owned(), "c".to_owned()]);
        let delta = diff(&desired, &actual());
        assert_eq!(delta.tags, None);
        assert!(delta.is_empty());
    }

    #[test]
    fn test_path_change_requires_move() {
        let mut desired = matching_desired();
        desired.path = Some("other/place".to_owned());
        let delta = diff(&desired, &actual());
        assert!(delta.requires_move());
        assert_eq!(delta.path.as_deref(), Some("other/place"));
        assert_eq!(delta.locale, None);
    }

    #[test]
    fn test_locale_change_requires_move() {
        let mut desired = matching_desired();
        desired.locale = "de".to_owned();
        let delta = diff(&desired, &actual());
        assert!(delta.requires_move());
        assert_eq!(delta.locale.as_deref(), Some("de"));
        assert_eq!(delta.path, None);
    }

    #[test]
    fn test_flag_changes_are_detected() {
        let mut desired = matching_desired();
        desired.is_private = true;
        desired.is_published = false;
        let delta = diff(&desired, &actual());
        assert_eq!(delta.is_private, Some(true));
        assert_eq!(delta.is_published, Some(false));
    }

    #[test]
    fn test_serialized_delta_omits_unchanged_fields() {
        let mut desired = matching_desired();
        desired.content = "# New".to_owned();
        let delta = diff(&desired, &actual());
        let value = serde_json::to_value(&delta).unwrap();
        assert_eq!(value["content"], "# New");
        assert!(value.get("title").is_none());
        assert!(value.get("tags").is_none());
    }
}
