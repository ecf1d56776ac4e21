//! The capability set the reconciler requires from a remote page client.

use std::fmt;

use crate::delta::PageDelta;
use crate::desired::NewPage;
use crate::page::Page;

/// Kind tag attached to a remote failure.
///
/// Reported to the host for human debugging; calling logic never branches on
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The request never completed (network error, timeout).
    Transport,
    /// The server answered with an error status.
    Http,
    /// The service reported an application-level failure.
    Api,
    /// The response body could not be decoded.
    Decode,
}

impl RemoteErrorKind {
    /// Stable tag for host reporting.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Http => "http",
            Self::Api => "api",
            Self::Decode => "decode",
        }
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error surfaced by a [`PageStore`] operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The addressed page does not exist on the remote service.
    ///
    /// Recoverable only on the resolver's path lookup, where it means "no
    /// existing page"; everywhere else it is an ordinary failure.
    #[error("page not found")]
    NotFound,

    /// Any other remote failure. `detail` is free text for human diagnostics
    /// and is never parsed downstream.
    #[error("{kind} error: {detail}")]
    Remote {
        /// Structured kind tag.
        kind: RemoteErrorKind,
        /// Diagnostic detail.
        detail: String,
    },
}

impl StoreError {
    /// Structured kind tag for host reporting.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::Remote { kind, .. } => kind.as_str(),
        }
    }

    /// Diagnostic detail for host reporting.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound => "page not found",
            Self::Remote { detail, .. } => detail,
        }
    }
}

/// Blocking operations against the remote wiki service.
///
/// One invocation performs at most three of these in strict sequence. The
/// implementation owns all transport concerns: authentication, timeouts,
/// serialization.
pub trait PageStore {
    /// Fetch a page by its (path, locale) pair.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no page exists there.
    fn fetch_page_by_path(&self, path: &str, locale: &str) -> Result<Page, StoreError>;

    /// Fetch a page by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no page has that id.
    fn fetch_page(&self, id: i64) -> Result<Page, StoreError>;

    /// Create a page from the full desired record.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote create fails.
    fn create_page(&self, page: &NewPage) -> Result<Page, StoreError>;

    /// Apply a field delta to an existing page.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote update fails.
    fn update_page(&self, id: i64, delta: &PageDelta) -> Result<Page, StoreError>;

    /// Move a page to a new path and/or locale.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote move fails.
    fn move_page(&self, id: i64, path: &str, locale: &str) -> Result<(), StoreError>;

    /// Delete a page.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote delete fails.
    fn delete_page(&self, id: i64) -> Result<(), StoreError>;
}
