//! Migrate command handler
//!
//! Handles database migration operations including dry-run and rollback.

use crate::config::settings::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command with dry-run and rollback support.
    ///
    /// # Errors
    /// - Database connection errors
    /// - Migration execution errors
    /// - Configuration validation errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;

        if dry_run {
            self.show_pending_migrations().await?;
            return Ok(());
        }

        if let Some(steps) = rollback {
            self.rollback_migrations(steps).await?;
        } else {
            self.run_migrations().await?;
        }

        Ok(())
    }

    /// Show pending migrations without applying them.
    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let database_url = self.config.database.url.clone();
        let pending: Vec<String> = tokio::task::spawn_blocking(move || {
            use diesel_migrations::MigrationHarness;

            let mut conn = establish_sync_connection(&database_url)?;
            let pending = conn
                .pending_migrations(MIGRATIONS)
                .map_err(|e| migration_error("check pending migrations", e))?;

            Ok::<_, AppError>(pending.iter().map(|m| m.name().to_string()).collect())
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })??;

        if pending.is_empty() {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for name in &pending {
                println!("  - {}", name);
            }
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    /// Run pending migrations.
    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let database_url = self.config.database.url.clone();
        let applied: Vec<String> = tokio::task::spawn_blocking(move || {
            use diesel_migrations::MigrationHarness;

            let mut conn = establish_sync_connection(&database_url)?;
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| migration_error("run pending migrations", e))?;

            Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect())
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })??;

        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for migration in &applied {
                println!("  - {}", migration);
            }
            println!("Database migration completed successfully");
        }

        Ok(())
    }

    /// Rollback the specified number of migrations.
    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        println!("Rolling back {} migration(s)...", steps);

        let database_url = self.config.database.url.clone();
        let reverted: Vec<String> = tokio::task::spawn_blocking(move || {
            use diesel_migrations::MigrationHarness;

            let mut conn = establish_sync_connection(&database_url)?;
            let mut reverted = Vec::new();
            for _ in 0..steps {
                let applied = conn
                    .applied_migrations()
                    .map_err(|e| migration_error("list applied migrations", e))?;
                if applied.is_empty() {
                    break;
                }

                let version = conn
                    .revert_last_migration(MIGRATIONS)
                    .map_err(|e| migration_error("revert last migration", e))?;
                reverted.push(version.to_string());
            }

            Ok::<_, AppError>(reverted)
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })??;

        if reverted.is_empty() {
            println!("No applied migrations to rollback");
        } else {
            println!("✓ Reverted {} migration(s):", reverted.len());
            for migration in &reverted {
                println!("  - {}", migration);
            }
        }

        Ok(())
    }
}

/// Migrations use a plain synchronous connection inside spawn_blocking;
/// the async pool is only for request handling.
fn establish_sync_connection(database_url: &str) -> Result<diesel::PgConnection, AppError> {
    use diesel::Connection;

    diesel::PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "establish connection for migrations".to_string(),
        source: anyhow::anyhow!("Connection error: {}", e),
    })
}

fn migration_error(
    operation: &str,
    error: Box<dyn std::error::Error + Send + Sync>,
) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("Migration error: {}", error),
    }
}
