use anyhow::Context;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .context("failed to build logger instance")?;

    log::info!("Starting WhiBO {}", env!("CARGO_PKG_VERSION"));

    let channels = whibo_bridge::BridgeChannels::default();
    whibo_backend::run(channels.backend_rx, channels.backend_tx);
    whibo_frontend::run(channels.frontend_rx, channels.frontend_tx)
        .context("failed to run frontend")
}
