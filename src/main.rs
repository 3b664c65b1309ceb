use std::io;

use calgrid::storage::config::Config;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{parse_cli_mode, run_print_mode, CliMode, USAGE};
mod tui;
use tui::run_tui;

fn main() -> Result<(), io::Error> {
    let (config, config_error) = match Config::load_or_create() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    setup_logging(&config);

    if let Some(e) = config_error {
        eprintln!("Config error: {}", e);
        tracing::error!("Falling back to default config: {}", e);
    }

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliMode::Print { month } => run_print_mode(month).map_err(|e| {
            tracing::error!("Print failed: {:#}", e);
            io::Error::other(format!("{:#}", e))
        }),
        CliMode::Interactive { month } => run_tui(&config, month),
    }
}

fn setup_logging(config: &Config) {
    let log_dir = config.log_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calgrid.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calgrid started");
}
