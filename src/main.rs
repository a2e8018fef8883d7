use revision_app::*;

use app::RevisionApp;
use eframe::egui;
use std::sync::Arc;
use task::Backend;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup_log();

    let config = config::Config::from_env()?;
    let start = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            log::warn!("Unknown path '{}', starting at the question list", path);
            Route::List
        }),
        None => Route::List,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let client = ApiClient::new(config.api_url)?;
    log::info!("Using backend at {}", client.base_url());
    let backend = Backend::new(Arc::new(client), runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Revision",
        options,
        Box::new(move |cc| {
            let backend = backend.with_repaint(cc.egui_ctx.clone());
            Ok(Box::new(RevisionApp::new(backend, start)))
        }),
    )?;

    Ok(())
}
