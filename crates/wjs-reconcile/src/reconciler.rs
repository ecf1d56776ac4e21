//! The reconciler: converge remote state to desired state with the minimal
//! mutation.
//!
//! One instance drives a single invocation end to end:
//!
//! 1. Resolve the target (an explicit id wins over a path).
//! 2. No existing page: create from the full desired record, id stripped.
//! 3. Existing page: fetch it, compute the delta, then either stop
//!    ([`Outcome::NoOp`]), or move (when path or locale differ) and update.
//!
//! Store failures never escape as errors; every run ends in a terminal
//! [`Outcome`] so the host always receives a structured result.

use tracing::{debug, info};

use crate::delta::diff;
use crate::desired::DesiredPage;
use crate::outcome::Outcome;
use crate::resolver::resolve;
use crate::store::{PageStore, StoreError};

/// Reconciles one page against a [`PageStore`].
pub struct Reconciler<'a, S> {
    store: &'a S,
}

impl<'a, S: PageStore> Reconciler<'a, S> {
    /// Create a reconciler backed by `store`.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Converge the remote page to `desired`.
    pub fn apply(&self, desired: &DesiredPage) -> Outcome {
        let Some(address) = desired.address() else {
            return unaddressed();
        };
        match resolve(self.store, &address, &desired.locale) {
            Ok(Some(id)) => self.update(id, desired),
            Ok(None) => self.create(desired),
            Err(err) => Outcome::failed("failed to look up page", &err),
        }
    }

    /// Remove the remote page if it exists.
    ///
    /// Deleting a page that does not exist is a no-op, not a failure.
    pub fn delete(&self, desired: &DesiredPage) -> Outcome {
        let Some(address) = desired.address() else {
            return unaddressed();
        };
        let id = match resolve(self.store, &address, &desired.locale) {
            Ok(Some(id)) => id,
            Ok(None) => {
                info!("no page at the desired location, nothing to delete");
                return Outcome::NoOp {
                    page: None,
                    incoming: desired.clone(),
                };
            }
            Err(err) => return Outcome::failed("failed to look up page", &err),
        };
        // Fetch first so the result can report what was removed.
        let page = match self.store.fetch_page(id) {
            Ok(page) => page,
            Err(StoreError::NotFound) => {
                return Outcome::NoOp {
                    page: None,
                    incoming: desired.clone(),
                };
            }
            Err(err) => return Outcome::failed(format!("failed to fetch page {id}"), &err),
        };
        info!("deleting page {id} ({})", page.path);
        match self.store.delete_page(id) {
            Ok(()) => Outcome::Deleted { page },
            Err(err) => Outcome::failed(format!("failed to delete page {id}"), &err),
        }
    }

    fn create(&self, desired: &DesiredPage) -> Outcome {
        let page = desired.to_new_page();
        info!("creating page {}", page.path);
        match self.store.create_page(&page) {
            Ok(created) => Outcome::Created { page: created },
            Err(err) => Outcome::failed(format!("failed to create page {}", page.path), &err),
        }
    }

    fn update(&self, id: i64, desired: &DesiredPage) -> Outcome {
        let actual = match self.store.fetch_page(id) {
            Ok(page) => page,
            Err(err) => return Outcome::failed(format!("failed to fetch page {id}"), &err),
        };

        let delta = diff(desired, &actual);
        if delta.is_empty() {
            info!("page {id} already matches the desired state");
            return Outcome::NoOp {
                page: Some(actual),
                incoming: desired.clone(),
            };
        }
        debug!("page {id} delta: {delta:?}");

        let mut moved = false;
        if delta.requires_move() {
            // The unchanged coordinate keeps its current value.
            let path = delta.path.as_deref().unwrap_or(&actual.path);
            let locale = delta.locale.as_deref().unwrap_or(&actual.locale);
            info!("moving page {id} to {path} ({locale})");
            if let Err(err) = self.store.move_page(id, path, locale) {
                return Outcome::failed(format!("failed to move page {id} to {path}"), &err);
            }
            moved = true;
        }

        match self.store.update_page(id, &delta) {
            Ok(page) => {
                info!("updated page {id} ({})", page.path);
                Outcome::Updated {
                    page,
                    old_page: actual,
                    incoming: desired.clone(),
                    delta,
                }
            }
            Err(err) => {
                // An applied move is not rolled back; the message tells the
                // operator the page is already at its new path.
                let msg = if moved {
                    format!("failed to update page {id}; the move to its new path and locale had already been applied")
                } else {
                    format!("failed to update page {id}")
                };
                Outcome::failed(msg, &err)
            }
        }
    }
}

fn unaddressed() -> Outcome {
    Outcome::Failed {
        msg: "no id or path to address the page".to_owned(),
        kind: "invalid-address",
        detail: "the parameter document must carry an id or a path".to_owned(),
    }
}
