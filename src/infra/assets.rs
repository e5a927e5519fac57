//! Usage: On-disk page assets (root document + tray/favicon icon).

use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

pub(crate) const INDEX_FILE: &str = "index.html";
pub(crate) const ICON_FILE: &str = "icon.ico";

/// Assets resolved once at startup. The icon is read eagerly because the
/// tray cannot render without it; the root document stays on disk and is
/// read per request.
pub(crate) struct ContentAssets {
    root_dir: PathBuf,
    pub icon: Vec<u8>,
}

impl ContentAssets {
    pub fn load(root_dir: PathBuf) -> Result<Self, String> {
        let icon_path = root_dir.join(ICON_FILE);
        let icon = std::fs::read(&icon_path)
            .map_err(|e| format!("failed to read tray icon {}: {e}", icon_path.display()))?;
        Ok(Self { root_dir, icon })
    }

    pub fn index_path(&self) -> PathBuf {
        self.root_dir.join(INDEX_FILE)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}
