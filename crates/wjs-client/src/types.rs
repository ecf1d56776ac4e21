//! Wire types for the Wiki.js GraphQL API.

use std::collections::BTreeSet;

use serde::Deserialize;
use wjs_reconcile::{Editor, Page};

/// Envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    #[serde(default)]
    extensions: Option<GraphQlExtensions>,
}

impl GraphQlError {
    /// Wiki.js error code, when present under `extensions.exception.code`.
    pub(crate) fn code(&self) -> Option<i64> {
        self.extensions
            .as_ref()
            .and_then(|e| e.exception.as_ref())
            .and_then(|e| e.code)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlExtensions {
    #[serde(default)]
    exception: Option<GraphQlException>,
}

#[derive(Debug, Deserialize)]
struct GraphQlException {
    #[serde(default)]
    code: Option<i64>,
}

/// `responseResult` envelope carried by every page mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResponseResult {
    pub succeeded: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a page mutation: the result envelope plus the page, when the
/// operation returns one.
#[derive(Debug, Deserialize)]
pub(crate) struct MutationPayload {
    #[serde(rename = "responseResult")]
    pub result: ResponseResult,
    #[serde(default)]
    pub page: Option<PagePayload>,
}

/// A page as returned by the page queries and mutations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PagePayload {
    pub id: i64,
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub editor: Editor,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub publish_start_date: Option<String>,
    #[serde(default)]
    pub publish_end_date: Option<String>,
    #[serde(default)]
    pub script_css: Option<String>,
    #[serde(default)]
    pub script_js: Option<String>,
    #[serde(default)]
    pub tags: Vec<PageTag>,
}

/// Tag object (`tags { tag }`).
#[derive(Debug, Deserialize)]
pub(crate) struct PageTag {
    pub tag: String,
}

fn default_true() -> bool {
    true
}

fn default_locale() -> String {
    "en".to_owned()
}

impl From<PagePayload> for Page {
    fn from(payload: PagePayload) -> Self {
        let tags: BTreeSet<String> = payload.tags.into_iter().map(|t| t.tag).collect();
        Self {
            id: payload.id,
            path: payload.path,
            title: payload.title,
            description: payload.description,
            content: payload.content,
            editor: payload.editor,
            is_private: payload.is_private,
            is_published: payload.is_published,
            locale: payload.locale,
            publish_start_date: payload.publish_start_date,
            publish_end_date: payload.publish_end_date,
            script_css: payload.script_css,
            script_js: payload.script_js,
            tags,
        }
    }
}
