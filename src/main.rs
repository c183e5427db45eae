use std::path::PathBuf;

use tenfoot::config::load_cfg;
use tenfoot::library::load_library;
use tenfoot::paths::PATH_LIBRARY;
use tenfoot::shell::{apply_theme, TenfootApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut cfg = load_cfg();

    if let Some(library_index) = args.iter().position(|arg| arg == "--library") {
        if let Some(next_arg) = args.get(library_index + 1) {
            cfg.library_path = Some(PathBuf::from(next_arg));
        } else {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }

    let fullscreen = args.iter().any(|arg| arg == "--fullscreen");

    let library_path = cfg.library_path.clone().unwrap_or_else(|| PATH_LIBRARY.clone());
    let games = if library_path.exists() {
        load_library(&library_path).unwrap_or_else(|e| {
            log::warn!("library: {}", e);
            Vec::new()
        })
    } else {
        log::info!("library: No manifest at {}", library_path.display());
        Vec::new()
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    log::info!("Starting eframe app...");

    eframe::run_native(
        "Tenfoot",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx);
            Ok(Box::new(TenfootApp::new(cfg, games)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: tenfoot [OPTIONS]

Options:
    --library <path>      Load the game library manifest from <path> instead of the data directory
    --fullscreen          Start in fullscreen mode
    --help                Show this text

Logging is controlled with RUST_LOG (e.g. RUST_LOG=tenfoot=debug).
"#;
