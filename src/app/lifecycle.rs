//! Usage: Viewer window lifecycle controller (one window, serialized over one control channel).

use tauri::{AppHandle, Manager};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::app_state::{AppConfig, ControllerState, TrayMenuState};
use crate::window;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewerPhase {
    Idle,
    Opening,
    Open,
    Closing,
    Terminated,
}

/// Pure phase model behind `run_viewer_loop`. Activations are only accepted
/// in `Idle`; termination is accepted from every phase and is final.
#[derive(Debug)]
pub(crate) struct ViewerLifecycle {
    phase: ViewerPhase,
}

impl ViewerLifecycle {
    pub fn new() -> Self {
        Self {
            phase: ViewerPhase::Idle,
        }
    }

    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    /// Idle -> Opening. False means the activation must be ignored: a window
    /// is already live or the controller has shut down.
    pub fn accept_activation(&mut self) -> bool {
        if self.phase != ViewerPhase::Idle {
            return false;
        }
        self.phase = ViewerPhase::Opening;
        true
    }

    /// Opening -> Open.
    pub fn window_created(&mut self) {
        if self.phase == ViewerPhase::Opening {
            self.phase = ViewerPhase::Open;
        }
    }

    /// Opening/Open -> Closing. Covers both the user closing the window and
    /// a window that never finished construction.
    pub fn window_gone(&mut self) {
        if matches!(self.phase, ViewerPhase::Opening | ViewerPhase::Open) {
            self.phase = ViewerPhase::Closing;
        }
    }

    /// Closing -> Idle. True exactly when the show item must be re-enabled,
    /// once per completed cycle.
    pub fn cycle_completed(&mut self) -> bool {
        if self.phase != ViewerPhase::Closing {
            return false;
        }
        self.phase = ViewerPhase::Idle;
        true
    }

    /// Any phase -> Terminated.
    pub fn terminate(&mut self) {
        self.phase = ViewerPhase::Terminated;
    }
}

/// Everything the controller task owns, handed over at spawn time.
pub(crate) struct ViewerLoopContext {
    pub app: AppHandle,
    pub activation_rx: mpsc::Receiver<()>,
    pub cancel: CancellationToken,
    pub config: AppConfig,
}

/// The controller task. Only this task creates or destroys the viewer
/// window, and only it toggles the show item, so the window resource needs
/// no further synchronization. The select is biased: termination always
/// wins a race against a pending activation.
pub(crate) async fn run_viewer_loop(mut ctx: ViewerLoopContext) {
    let mut lifecycle = ViewerLifecycle::new();

    while lifecycle.phase() != ViewerPhase::Terminated {
        tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => {
                lifecycle.terminate();
            }
            received = ctx.activation_rx.recv() => {
                match received {
                    Some(()) => {
                        run_viewer_cycle(&ctx.app, &ctx.cancel, ctx.config, &mut lifecycle).await;
                    }
                    None => lifecycle.terminate(),
                }
            }
        }
    }

    tracing::info!("viewer loop terminated");
}

async fn run_viewer_cycle(
    app: &AppHandle,
    cancel: &CancellationToken,
    config: AppConfig,
    lifecycle: &mut ViewerLifecycle,
) {
    if !lifecycle.accept_activation() {
        return;
    }
    set_show_item_enabled(app, false);

    match window::create_viewer_window(app, &config.base_url(), config.debug) {
        Ok((viewer, mut closed_rx)) => {
            lifecycle.window_created();
            tracing::info!("viewer window created");

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    lifecycle.terminate();
                    if let Err(err) = viewer.destroy() {
                        tracing::warn!("failed to destroy viewer window on exit: {err}");
                    }
                    tracing::info!("viewer window terminated");
                    return;
                }
                _ = &mut closed_rx => {
                    lifecycle.window_gone();
                    tracing::info!("viewer window closed");
                }
            }
        }
        Err(err) => {
            tracing::warn!("failed to create viewer window: {err}");
            lifecycle.window_gone();
        }
    }

    if lifecycle.cycle_completed() {
        set_show_item_enabled(app, true);
    }
}

/// Activation entry point shared by the tray menu item, the tray icon click
/// and a second app instance. When a window is already live it is focused
/// instead of queueing a new activation, so the single-window invariant
/// holds on paths that bypass the disabled menu item.
pub(crate) fn request_show(app: &AppHandle) {
    if let Some(viewer) = app.get_webview_window(window::VIEWER_WINDOW_LABEL) {
        let _ = viewer.unminimize();
        let _ = viewer.set_focus();
        return;
    }

    let Some(controller) = app.try_state::<ControllerState>() else {
        return;
    };
    match controller.activation_tx.try_send(()) {
        Ok(()) => {}
        Err(mpsc::error::TrySendError::Full(())) => {
            tracing::debug!("activation already queued, ignoring");
        }
        Err(mpsc::error::TrySendError::Closed(())) => {
            tracing::debug!("controller already terminated, ignoring activation");
        }
    }
}

/// Exit entry point for the tray. Cancelling the token forcibly tears down
/// an open window and stops the controller loop; the exit request then runs
/// the bounded server shutdown.
pub(crate) fn request_exit(app: &AppHandle) {
    if let Some(controller) = app.try_state::<ControllerState>() {
        controller.cancel.cancel();
    }
    tracing::info!("tray exit requested");
    app.exit(0);
}

fn set_show_item_enabled(app: &AppHandle, enabled: bool) {
    let Some(tray) = app.try_state::<TrayMenuState>() else {
        return;
    };
    if let Err(err) = tray.show_item.set_enabled(enabled) {
        tracing::warn!("failed to update show item state: {err}");
    }
}
