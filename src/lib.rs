mod app;
mod infra;
mod server;
mod shared;

pub(crate) use app::{app_state, cleanup, lifecycle, logging, tray, window};
pub(crate) use infra::{app_paths, assets, cli};
pub(crate) use shared::mutex_ext;

use std::sync::Arc;

use clap::Parser;
use tauri::Manager;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use app_state::{AppConfig, ControllerState, ServerState};
use mutex_ext::MutexExt;

pub fn run() {
    let config = AppConfig::from(cli::Args::parse());

    let builder = tauri::Builder::default().manage(ServerState::default());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        lifecycle::request_show(app);
    }));

    let app = builder
        .setup(move |app| {
            logging::init(app.handle());

            // The icon read is the one fatal startup path: without it the
            // tray cannot render, so setup fails before the tray exists.
            let root_dir = std::env::current_dir()
                .map_err(|e| format!("failed to resolve working directory: {e}"))?;
            let assets = match assets::ContentAssets::load(root_dir) {
                Ok(loaded) => Arc::new(loaded),
                Err(err) => {
                    tracing::error!("startup failed: {err}");
                    return Err(err.into());
                }
            };
            tracing::info!(
                port = config.port,
                debug = config.debug,
                dir = %assets.root_dir().display(),
                "webtray starting"
            );

            let server_app = app.handle().clone();
            let server_assets = assets.clone();
            let port = config.port;
            tauri::async_runtime::spawn(async move {
                let started = {
                    let state = server_app.state::<ServerState>();
                    let mut manager = state.0.lock_or_recover();
                    manager.start(server_assets, port)
                };
                match started {
                    Ok(status) => {
                        tracing::info!(
                            base_url = status.base_url.as_deref().unwrap_or("-"),
                            "content server started"
                        );
                    }
                    Err(err) => {
                        tracing::error!("content server failed to start: {err}");
                        server_app.exit(1);
                    }
                }
            });

            if let Err(err) = tray::setup_tray(app.handle(), &assets.icon) {
                tracing::error!("failed to initialize tray: {err}");
            }

            let (activation_tx, activation_rx) = mpsc::channel(1);
            let cancel = CancellationToken::new();
            app.manage(ControllerState {
                activation_tx,
                cancel: cancel.clone(),
            });
            tauri::async_runtime::spawn(lifecycle::run_viewer_loop(lifecycle::ViewerLoopContext {
                app: app.handle().clone(),
                activation_rx,
                cancel,
                config,
            }));

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { api, code, .. } = &event {
            // A codeless exit request means the last window closed; the
            // shell stays resident in the tray.
            let Some(exit_code) = *code else {
                api.prevent_exit();
                return;
            };

            tracing::info!("exit requested, running shutdown cleanup...");
            api.prevent_exit();

            let app_handle = app_handle.clone();
            tauri::async_runtime::spawn(async move {
                cleanup::cleanup_before_exit(&app_handle).await;
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                std::process::exit(exit_code);
            });
            return;
        }

        #[cfg(target_os = "macos")]
        if let tauri::RunEvent::Reopen {
            has_visible_windows,
            ..
        } = event
        {
            if !has_visible_windows {
                lifecycle::request_show(app_handle);
            }
        }
    });
}
