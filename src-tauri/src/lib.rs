pub mod filesystem;

use filesystem::commands;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=folio_lib=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            commands::open_folder,
            commands::list_files,
            commands::read_text_file,
            commands::read_binary_file,
            commands::save_file,
            commands::create_file,
            commands::create_directory,
            commands::import_file,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
