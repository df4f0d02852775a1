//! CLI module for newsclip
//!
//! Provides command-line functionality:
//! - Argument parsing with clap
//! - Configuration loading with CLI argument overrides
//! - Command execution for serve and migrate operations

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::ConfigLoader;
use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load configuration and apply CLI argument overrides.
///
/// Flags beat configuration files, which beat defaults: a `--port` on
/// the command line wins over whatever the TOML layers resolved to.
pub fn load_config(cli: &Cli) -> anyhow::Result<Settings> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path),
        None => ConfigLoader::new()?,
    };
    let loader = match &cli.env {
        Some(env) => loader.with_environment(env.clone().into()),
        None => loader,
    };

    let mut settings = loader.load()?;
    apply_cli_overrides(cli, &mut settings);
    Ok(settings)
}

/// Folds CLI flags into the loaded settings.
fn apply_cli_overrides(cli: &Cli, settings: &mut Settings) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    }
    if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Some(Commands::Serve {
        host,
        port,
        log_level,
        ..
    }) = &cli.command
    {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
        // Per-serve log level beats the global verbose/quiet flags
        if let Some(level) = log_level {
            settings.logger.level = level.as_str().to_string();
        }
    }
}

/// Initialize the logger from settings.
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn serve_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "newsclip",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "trace",
        ])
        .unwrap();

        let mut settings = Settings::default();
        apply_cli_overrides(&cli, &mut settings);

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.logger.level, "trace");
    }

    #[test]
    fn quiet_drops_log_level_to_error() {
        let cli = Cli::try_parse_from(["newsclip", "-q", "serve"]).unwrap();
        let mut settings = Settings::default();
        apply_cli_overrides(&cli, &mut settings);
        assert_eq!(settings.logger.level, "error");
    }

    #[test]
    fn no_flags_leave_settings_untouched() {
        let cli = Cli::try_parse_from(["newsclip", "serve"]).unwrap();
        let mut settings = Settings::default();
        let before = settings.clone();
        apply_cli_overrides(&cli, &mut settings);
        assert_eq!(settings, before);
    }
}
