//! Wallet form: create, restore and sync a wallet through the native wallet engine

use eframe::egui;
use wallet_form_adapters::FormShellConfig;

mod app;
mod bridge;
mod state;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = FormShellConfig::from_env();
    tracing::info!(
        documents_dir = %config.documents_dir().display(),
        "Starting wallet form"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wallet Form")
            .with_inner_size([560.0, 620.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wallet Form",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
    )
    .map_err(|e| eyre::eyre!("UI event loop exited with an error: {e}"))
}
