//! CLI command implementations.

pub(crate) mod apply;

pub(crate) use apply::ApplyArgs;
