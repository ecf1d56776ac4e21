//! Host result document shaping.
//!
//! One JSON document per invocation, written to stdout:
//! - success/no-op: `{changed, msg, page?, oldPage?, incomingPage?, changes?}`
//! - failure: `{msg, exception, debug}`
//!
//! `exception` is the structured error-kind tag; `debug` is free text for
//! human diagnostics and is never parsed by the host.

use std::io::Write;

use serde_json::json;
use wjs_reconcile::Outcome;

use crate::error::CliError;

/// Shape `outcome` into the host result document.
#[must_use]
pub(crate) fn document(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Created { page } => json!({
            "changed": true,
            "msg": format!("created page {} with id {}", page.path, page.id),
            "page": page,
        }),
        Outcome::Updated {
            page,
            old_page,
            incoming,
            delta,
        } => json!({
            "changed": true,
            "msg": format!("updated page {} ({})", page.id, page.path),
            "page": page,
            "oldPage": old_page,
            "incomingPage": incoming,
            "changes": delta,
        }),
        Outcome::NoOp {
            page: Some(page),
            incoming,
        } => json!({
            "changed": false,
            "msg": format!("page {} already matches the desired state", page.id),
            "page": page,
            "incomingPage": incoming,
        }),
        Outcome::NoOp {
            page: None,
            incoming,
        } => json!({
            "changed": false,
            "msg": "no page at the desired location, nothing to delete",
            "incomingPage": incoming,
        }),
        Outcome::Deleted { page } => json!({
            "changed": true,
            "msg": format!("deleted page {} ({})", page.id, page.path),
            "page": page,
        }),
        Outcome::Failed { msg, kind, detail } => json!({
            "msg": msg,
            "exception": kind,
            "debug": detail,
        }),
    }
}

/// Write the result document to `writer`.
pub(crate) fn write(mut writer: impl Write, outcome: &Outcome) -> Result<(), CliError> {
    serde_json::to_writer(&mut writer, &document(outcome))?;
    writeln!(writer)?;
    Ok(())
}

/// One-line human summary, taken from the document's `msg`.
pub(crate) fn summary(outcome: &Outcome) -> String {
    match document(outcome).get("msg") {
        Some(serde_json::Value::String(msg)) => msg.clone(),
        _ => String::new(),
    }
}
