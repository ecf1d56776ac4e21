//! Reconciliation core for Wiki.js pages.
//!
//! Given the desired state of a single page and a [`PageStore`]
//! implementation, [`Reconciler`] performs the minimal remote mutation to
//! converge actual state to desired state: create, update (with a move when
//! path or locale differ), delete, or nothing at all.
//!
//! The crate performs no I/O of its own; everything remote goes through the
//! [`PageStore`] trait. Every run ends in a terminal [`Outcome`] — store
//! failures are folded into [`Outcome::Failed`] and never escape as errors.

// Delta computation
mod delta;
pub use delta::{PageDelta, diff};

// Desired state
mod desired;
pub use desired::{DesiredPage, NewPage, PageAddress};

// Outcomes
mod outcome;
pub use outcome::Outcome;

// Page types
mod page;
pub use page::{Editor, Page};

// Inbound parameters and normalization
mod params;
pub use params::{Params, ParamsError, State};

// Reconciler state machine
mod reconciler;
pub use reconciler::Reconciler;

// Target resolution
mod resolver;
pub use resolver::resolve;

// Remote capability set
mod store;
pub use store::{PageStore, RemoteErrorKind, StoreError};
