use layerchess::application::game_service::GameService;
use layerchess::config::AppConfig;
use layerchess::domain::board::Board;
use layerchess::interface::console::ConsoleInterface;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    config.log_summary();

    let game = GameService::new(Board::new());
    let mut console = ConsoleInterface::new(game, config.display.clone());
    if let Err(e) = console.run() {
        tracing::error!("console I/O failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
