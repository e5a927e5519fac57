//! Usage: Local content server lifecycle (bind, serve static assets, bounded shutdown).

mod routes;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::assets::ContentAssets;

#[derive(Default)]
pub(crate) struct ServerManager {
    running: Option<RunningServer>,
}

struct RunningServer {
    port: u16,
    shutdown: oneshot::Sender<()>,
    task: tauri::async_runtime::JoinHandle<()>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct ServerStatus {
    pub running: bool,
    pub port: Option<u16>,
    pub base_url: Option<String>,
}

impl ServerManager {
    /// Binds `127.0.0.1:<port>` and spawns the serve task. A failed bind is
    /// returned to the caller; once serving, errors only log. Port 0 binds
    /// an ephemeral port and the status reports the real one.
    pub fn start(&mut self, assets: Arc<ContentAssets>, port: u16) -> Result<ServerStatus, String> {
        if self.running.is_some() {
            return Ok(self.status());
        }

        let listener = std::net::TcpListener::bind(("127.0.0.1", port))
            .map_err(|e| format!("failed to bind 127.0.0.1:{port}: {e}"))?;
        listener
            .set_nonblocking(true)
            .map_err(|e| format!("failed to configure listener: {e}"))?;
        let bound_port = listener
            .local_addr()
            .map_err(|e| format!("failed to read listener address: {e}"))?
            .port();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let router = routes::router(assets);

        let task = tauri::async_runtime::spawn(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(err) => {
                    tracing::warn!("failed to register listener with the runtime: {err}");
                    return;
                }
            };

            let serve = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(err) = serve.await {
                tracing::warn!("content server exited abnormally: {err}");
            }
        });

        self.running = Some(RunningServer {
            port: bound_port,
            shutdown: shutdown_tx,
            task,
        });
        tracing::info!(port = bound_port, "content server listening");
        Ok(self.status())
    }

    /// Hands the shutdown sender and serve task to the cleanup path. The
    /// manager reports not-running from here on.
    pub fn take_running(
        &mut self,
    ) -> Option<(oneshot::Sender<()>, tauri::async_runtime::JoinHandle<()>)> {
        self.running
            .take()
            .map(|running| (running.shutdown, running.task))
    }

    pub fn status(&self) -> ServerStatus {
        match &self.running {
            Some(running) => ServerStatus {
                running: true,
                port: Some(running.port),
                base_url: Some(format!("http://localhost:{}", running.port)),
            },
            None => ServerStatus {
                running: false,
                port: None,
                base_url: None,
            },
        }
    }
}
