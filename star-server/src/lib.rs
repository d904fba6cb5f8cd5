//! HTTP service and command line front ends for star chart detection.

pub mod args;
pub mod error;
pub mod routes;

use anyhow::{Context, Result};
use star_detector::DetectorConfig;
use tracing::info;

pub use args::{DetectorArgs, ServerArgs};
pub use error::AnalyzeError;
pub use routes::{router, AppState};

/// Bind the listener and serve requests until the process is stopped.
pub async fn run_server(args: ServerArgs, config: DetectorConfig) -> Result<()> {
    config
        .validate()
        .context("Refusing to start with invalid detector settings")?;

    let address = args.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Detector settings: {:?}", config);
    info!(
        "Listening on http://{} (max upload {} MiB)",
        listener.local_addr()?,
        args.max_upload_mb
    );

    let app = router(AppState { config }, args.max_upload_bytes());
    axum::serve(listener, app).await.context("HTTP server failed")
}
