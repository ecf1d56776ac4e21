//! Reconciliation outcomes.

use crate::delta::PageDelta;
use crate::desired::DesiredPage;
use crate::page::Page;
use crate::store::StoreError;

/// Terminal result of one reconciliation.
///
/// The sole output of the core; the host adapter shapes it into the result
/// document and ownership ends there.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A page was created.
    Created {
        /// The server-returned page.
        page: Page,
    },

    /// An existing page was changed.
    ///
    /// Carries everything the host needs to report exactly what changed.
    Updated {
        /// The page after the update.
        page: Page,
        /// Snapshot of the page before the update.
        old_page: Page,
        /// The full incoming desired state.
        incoming: DesiredPage,
        /// The delta that was applied.
        delta: PageDelta,
    },

    /// Actual state already matched the desired state; nothing was mutated.
    ///
    /// `page` is absent only when a delete found nothing to remove.
    NoOp {
        /// The current server page, when one exists.
        page: Option<Page>,
        /// The incoming desired state.
        incoming: DesiredPage,
    },

    /// A page was deleted.
    Deleted {
        /// Snapshot of the page that was removed.
        page: Page,
    },

    /// A remote operation failed.
    Failed {
        /// What the reconciler was doing when it failed.
        msg: String,
        /// Structured error-kind tag.
        kind: &'static str,
        /// Free-text diagnostic detail; never parsed downstream.
        detail: String,
    },
}

impl Outcome {
    /// True when the invocation changed remote state.
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Self::Created { .. } | Self::Updated { .. } | Self::Deleted { .. }
        )
    }

    pub(crate) fn failed(msg: impl Into<String>, err: &StoreError) -> Self {
        Self::Failed {
            msg: msg.into(),
            kind: err.kind(),
            detail: err.detail().to_owned(),
        }
    }
}
