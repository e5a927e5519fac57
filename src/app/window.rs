//! Usage: Viewer window construction and teardown helpers.

use std::sync::Mutex;

use tauri::{AppHandle, WebviewUrl, WebviewWindow, WindowEvent};
use tokio::sync::oneshot;

pub(crate) const VIEWER_WINDOW_LABEL: &str = "viewer";
const VIEWER_TITLE: &str = "WebTray";
const VIEWER_WIDTH: f64 = 800.0;
const VIEWER_HEIGHT: f64 = 600.0;

/// Builds the viewer window pointed at the local server. The returned
/// receiver resolves once the window has been destroyed, whether by the
/// user or by a forced teardown.
pub(crate) fn create_viewer_window(
    app: &AppHandle,
    url: &str,
    debug: bool,
) -> Result<(WebviewWindow, oneshot::Receiver<()>), String> {
    let url = tauri::Url::parse(url).map_err(|e| format!("invalid viewer url {url}: {e}"))?;

    let viewer =
        tauri::WebviewWindowBuilder::new(app, VIEWER_WINDOW_LABEL, WebviewUrl::External(url))
            .title(VIEWER_TITLE)
            .inner_size(VIEWER_WIDTH, VIEWER_HEIGHT)
            .build()
            .map_err(|e| format!("failed to build viewer window: {e}"))?;

    let (closed_tx, closed_rx) = oneshot::channel();
    let closed_tx = Mutex::new(Some(closed_tx));
    viewer.on_window_event(move |event| {
        if matches!(event, WindowEvent::Destroyed) {
            if let Some(tx) = closed_tx.lock().ok().and_then(|mut slot| slot.take()) {
                let _ = tx.send(());
            }
        }
    });

    if debug {
        viewer.open_devtools();
    }

    Ok((viewer, closed_rx))
}
