// padcalc - a keypad calculator for the terminal
//
// Architecture:
// - Engine: pure calculator state machine driven by keypad symbols
// - TUI (ratatui): keypad grid, display and overlays around the engine
// - CLI (clap): headless `eval` and config management subcommands
// - Logging (tracing): captured into an in-memory buffer for the logs panel

mod cli;
mod config;
mod engine;
mod logging;
mod tui;

use anyhow::Result;
use config::{Config, VERSION};
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Subcommands run and exit without starting the TUI
    if cli::handle_cli()? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // In TUI mode logs go to the buffer (prevents garbling the display)
    // The guard must stay alive for file logs to flush
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, LogSink::Buffer, &log_buffer);

    tracing::info!(
        version = VERSION,
        max_input_len = ?config.max_input_len,
        mouse = config.mouse,
        "Starting padcalc"
    );

    let result = tui::run_tui(log_buffer, config).await;
    if let Err(ref e) = result {
        tracing::error!("TUI error: {:?}", e);
    }

    tracing::info!("Shutdown complete");
    result
}
