//! Command executor for dispatching CLI commands
//!
//! Entry point for executing CLI commands after parsing and
//! configuration loading.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings.
///
/// A plain `serve` (or no subcommand at all) returns Ok without doing
/// anything; the actual server startup is handled in main.rs so the
/// runtime owns the full server lifecycle.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

/// Whether this invocation should start the HTTP server after command
/// execution.
pub fn should_start_server(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => !dry_run,
        None => true,
        Some(Commands::Migrate { .. }) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn serve_starts_server_unless_dry_run() {
        let cli = Cli::try_parse_from(["newsclip", "serve"]).unwrap();
        assert!(should_start_server(&cli));

        let cli = Cli::try_parse_from(["newsclip", "serve", "--dry-run"]).unwrap();
        assert!(!should_start_server(&cli));
    }

    #[test]
    fn bare_invocation_starts_server() {
        let cli = Cli::try_parse_from(["newsclip"]).unwrap();
        assert!(should_start_server(&cli));
    }

    #[test]
    fn migrate_never_starts_server() {
        let cli = Cli::try_parse_from(["newsclip", "migrate"]).unwrap();
        assert!(!should_start_server(&cli));
    }

    #[tokio::test]
    async fn dry_run_serve_validates_config() {
        let cli = Cli::try_parse_from(["newsclip", "serve", "--dry-run"]).unwrap();
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/newsclip".to_string();
        settings.news_api.api_key = "key".to_string();
        assert!(execute_command(&cli, settings).await.is_ok());
    }

    #[tokio::test]
    async fn dry_run_serve_rejects_missing_database_url() {
        let cli = Cli::try_parse_from(["newsclip", "serve", "--dry-run"]).unwrap();
        let settings = Settings::default();
        assert!(execute_command(&cli, settings).await.is_err());
    }
}
