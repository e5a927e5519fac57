//! Usage: Best-effort cleanup for app exit (controller cancel + bounded server stop).

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tauri::Manager;

use crate::app_state::{ControllerState, ServerState};
use crate::mutex_ext::MutexExt;

static CLEANUP_STARTED: AtomicBool = AtomicBool::new(false);

const SERVER_STOP_TIMEOUT: Duration = Duration::from_secs(10);
const SERVER_ABORT_GRACE: Duration = Duration::from_secs(1);

pub(crate) async fn cleanup_before_exit(app: &tauri::AppHandle) {
    if CLEANUP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Some(controller) = app.try_state::<ControllerState>() {
        controller.cancel.cancel();
    }

    stop_server_best_effort(app).await;
}

/// Sends the shutdown signal and waits out the stop deadline. Stop is
/// attempted exactly once; the process exits regardless of the outcome.
async fn stop_server_best_effort(app: &tauri::AppHandle) {
    let running = {
        let state = app.state::<ServerState>();
        let mut manager = state.0.lock_or_recover();
        manager.take_running()
    };

    let Some((shutdown, mut task)) = running else {
        return;
    };

    let _ = shutdown.send(());

    if tokio::time::timeout(SERVER_STOP_TIMEOUT, &mut task)
        .await
        .is_err()
    {
        tracing::warn!(
            "content server did not stop within {}s, aborting serve task",
            SERVER_STOP_TIMEOUT.as_secs()
        );
        task.abort();
        let _ = tokio::time::timeout(SERVER_ABORT_GRACE, &mut task).await;
    } else {
        tracing::info!("content server stopped");
    }
}
