//! Application entry point shared by the binary and tests.

use atelier_core::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::commands;
use crate::config::AtelierConfig;

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` if set, otherwise `debug` with `--verbose` and `warn`
/// without. Library crates log through `log`; the subscriber picks those
/// records up as well.
pub fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load configuration and run the requested command, returning its output.
pub async fn run(args: CliArgs) -> Result<String> {
    let mut config = AtelierConfig::load(args.config.as_deref())?;
    if let Some(dir) = &args.content_dir {
        config.content.path = Some(dir.to_string_lossy().into_owned());
    }
    tracing::debug!(content_root = %config.content_root().display(), "Resolved configuration");

    match args.command {
        Command::News(news) => commands::handle_news(&config, news.command, args.format).await,
        Command::Software(software) => {
            commands::handle_software(&config, software.command, args.format).await
        }
        Command::Config(cmd) => {
            commands::handle_config(args.config.as_deref(), &config, cmd.command)
        }
    }
}
