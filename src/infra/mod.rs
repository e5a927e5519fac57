//! Usage: Process-level adapters (CLI flags, filesystem assets, app data paths).

pub(crate) mod app_paths;
pub(crate) mod assets;
pub(crate) mod cli;
