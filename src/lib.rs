// Job Application Tracker
// Module declarations

use tauri::Manager;

mod commands;
pub mod form;
pub mod state;

use form::FormController;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let log_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::default().level(log_level).build())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // The window stays hidden unless storage comes up
            let store = state::init_store().map_err(|e| {
                log::error!("Failed to initialize database: {}", e);
                e
            })?;

            let mut form = FormController::new(store);
            if let Err(e) = form.refresh() {
                log::warn!("Initial listing failed: {}", e);
            }
            app.manage(commands::TrackerState::new(form));

            if let Some(window) = app.get_webview_window("main") {
                window.show()?;
            }

            log::info!("Job Application Tracker initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_form,
            commands::select_application,
            commands::add_application,
            commands::edit_or_save_application,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
