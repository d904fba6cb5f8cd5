//! HTTP server that turns uploaded images into star charts.

use clap::Parser;
use star_server::{run_server, DetectorArgs, ServerArgs};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP server for star chart detection")]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    #[command(flatten)]
    detector: DetectorArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("Starting star chart server...");
    run_server(args.server, args.detector.to_config()).await
}
