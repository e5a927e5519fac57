//! Usage: Shared Tauri-managed state types (config, server manager, controller handles, tray).

use std::sync::Mutex;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::server::ServerManager;

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppConfig {
    pub port: u16,
    pub debug: bool,
}

impl AppConfig {
    /// URL the viewer window navigates to, matching what the content server
    /// serves on the loopback interface.
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

#[derive(Default)]
pub(crate) struct ServerState(pub(crate) Mutex<ServerManager>);

/// Handles for talking to the window controller task: the single-slot
/// activation queue and the termination token. Closing down is one-way;
/// the token is never reset.
pub(crate) struct ControllerState {
    pub activation_tx: mpsc::Sender<()>,
    pub cancel: CancellationToken,
}

/// Menu item handle kept around so the controller can disable "Show" while
/// a window is live. Only the controller task mutates it after setup.
pub(crate) struct TrayMenuState {
    pub show_item: tauri::menu::MenuItem<tauri::Wry>,
}
