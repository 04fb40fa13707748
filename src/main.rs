use roomify::app::RoomifyApp;
use roomify::auth::SignInFlag;
use roomify::config::{DEFAULT_LOG_FILTER, WORKER_URL};
use roomify::upload::UploadDriver;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum StartupError {
    #[error("failed to start upload runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("ui error: {0}")]
    Ui(String),
}

fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if WORKER_URL.is_empty() {
        info!("No render worker configured");
    } else {
        info!(worker = %WORKER_URL.as_str(), "Render worker configured");
    }

    let driver = UploadDriver::new()?;
    let session = SignInFlag::new(false);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Roomify",
        options,
        Box::new(move |cc| Box::new(RoomifyApp::new(cc, driver, session))),
    )
    .map_err(|e| StartupError::Ui(e.to_string()))?;
    Ok(())
}
