//! Usage: Cross-cutting utilities shared across modules.

pub(crate) mod mutex_ext;
