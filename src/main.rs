use clap::Parser;
use gp_shell::bootstrap::tracing::init_tracing_subscriber;
use gp_shell::{run_app, CliArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Must run before anything logs
    init_tracing_subscriber()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "gallery-picker starting");

    if let Err(err) = run_app(args).await {
        tracing::error!(error = %err, "gallery-picker exited with an error");
        return Err(err);
    }
    Ok(())
}
