//! Usage: Tray icon and menu wiring (Show/Exit items, activation + exit entry points).

use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::{AppHandle, Manager};

use crate::app_state::TrayMenuState;
use crate::lifecycle;

const TRAY_ID: &str = "main-tray";
const TRAY_MENU_SHOW_ID: &str = "tray.show";
const TRAY_MENU_QUIT_ID: &str = "tray.quit";
const TRAY_TOOLTIP: &str = "WebTray";

/// Builds the tray icon with its two menu items. Returns immediately; the
/// click handlers only forward to the controller's entry points.
pub(crate) fn setup_tray(app: &AppHandle, icon_bytes: &[u8]) -> Result<(), String> {
    let show_item = MenuItem::with_id(app, TRAY_MENU_SHOW_ID, "Show", true, None::<&str>)
        .map_err(|e| format!("failed to create tray show menu item: {e}"))?;
    let quit_item = MenuItem::with_id(app, TRAY_MENU_QUIT_ID, "Exit", true, None::<&str>)
        .map_err(|e| format!("failed to create tray quit menu item: {e}"))?;
    let separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create tray menu separator: {e}"))?;

    let menu = Menu::with_items(app, &[&show_item, &separator, &quit_item])
        .map_err(|e| format!("failed to create tray menu: {e}"))?;

    let icon = tauri::image::Image::from_bytes(icon_bytes)
        .map_err(|e| format!("failed to decode tray icon: {e}"))?;

    app.manage(TrayMenuState {
        show_item: show_item.clone(),
    });

    let show_id = show_item.id().clone();
    let quit_id = quit_item.id().clone();

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip(TRAY_TOOLTIP)
        .menu(&menu);

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .show_menu_on_left_click(false)
        .on_menu_event(move |app, event| {
            if event.id == quit_id {
                lifecycle::request_exit(app);
                return;
            }
            if event.id == show_id {
                lifecycle::request_show(app);
            }
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button,
                button_state,
                ..
            } = event
            {
                if button == MouseButton::Left && button_state == MouseButtonState::Up {
                    lifecycle::request_show(tray.app_handle());
                }
            }
        })
        .build(app)
        .map_err(|e| format!("failed to build tray icon: {e}"))?;

    Ok(())
}
