// Rozbor - sentence annotation in the terminal
//
// Type a sentence, press Enter, and it is split into terms. Each word can
// then be tagged with a grammatical category (větný člen) from a fixed
// taxonomy; the short label shows above the word.
//
// Architecture:
// - Sentence: Tokenizer and per-term category state
// - Category: Taxonomy tree and id resolution
// - TUI (ratatui): Editor, sentence view, floating category selector
// - Config/logging: TOML config, tracing into an in-memory buffer

mod category;
mod cli;
mod config;
mod logging;
mod sentence;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Rolling JSON file layer, if file logging is enabled and the directory is
/// usable. The guard must live as long as the program so logs flush.
fn file_layer(
    config: &Config,
) -> Option<(BoxedLayer, tracing_appender::non_blocking::WorkerGuard)> {
    if !config.logging.file_enabled {
        return None;
    }

    let logging = &config.logging;
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Writes happen on a background thread
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_ansi(false)
        .boxed();

    Some((layer, guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands print to stdout; logs go to stderr so they stay out of
    // piped output
    let interactive = cli.command.is_none();

    Config::ensure_config_exists();
    let config = Config::from_env();
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("rozbor={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // In the TUI, capture logs to the buffer (stdout would garble the display)
    let output: BoxedLayer = if interactive {
        TuiLogLayer::new(log_buffer.clone()).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let mut layers = vec![output];
    let _file_guard = file_layer(&config).map(|(layer, guard)| {
        layers.push(layer);
        guard
    });

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .init();

    if cli::handle_command(cli.command.as_ref())? {
        return Ok(());
    }

    tracing::info!("rozbor {} started", config::VERSION);
    tui::run_tui(config, log_buffer, cli.sentence).await
}
