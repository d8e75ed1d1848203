// main.rs - room server entry point
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use scrabble_party::logging::setup_logging;
use scrabble_party::{
    InMemorySessionStore, RoomService, RoomServiceConfig, WebSocketConfig, WebSocketServer,
    WordList,
};

#[derive(Parser, Debug)]
#[command(name = "scrabble_party", version, about)]
struct Config {
    /// Interface to bind the WebSocket server on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the WebSocket server
    #[arg(short = 'p', long, default_value_t = 5000)]
    port: u16,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Word list, one word per line. Defaults to the embedded list
    #[arg(long)]
    word_list: Option<PathBuf>,

    /// How long placed tiles stay highlighted, in milliseconds (0 disables)
    #[arg(long, default_value_t = 5000)]
    highlight_ms: u64,
}

impl Config {
    fn highlight_duration(&self) -> Option<Duration> {
        (self.highlight_ms > 0).then(|| Duration::from_millis(self.highlight_ms))
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> scrabble_party::Result<()> {
    let config = Config::parse();

    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;
    log::info!("{} v{}", scrabble_party::NAME, scrabble_party::VERSION);

    let words = match &config.word_list {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded(),
    };

    let rooms = RoomService::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(words),
        RoomServiceConfig {
            highlight_duration: config.highlight_duration(),
        },
    );

    let server = WebSocketServer::new(
        WebSocketConfig {
            host: config.host.clone(),
            port: config.port,
        },
        rooms,
    );
    server.start().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_from(["scrabble_party"]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.highlight_duration(), Some(Duration::from_secs(5)));
        assert!(config.word_list.is_none());
    }

    #[test]
    fn test_highlight_can_be_disabled() {
        let config = Config::parse_from(["scrabble_party", "--highlight-ms", "0", "-p", "9000"]);
        assert_eq!(config.highlight_duration(), None);
        assert_eq!(config.port, 9000);
    }
}
