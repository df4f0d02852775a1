use clap::Parser;

use newsclip::cli::executor::should_start_server;
use newsclip::cli::{Cli, execute_command, init_logger_from_settings, load_config};
use newsclip::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_config(&cli)?;
    init_logger_from_settings(&settings)?;

    if let Err(e) = execute_command(&cli, settings.clone()).await {
        tracing::error!(error = %e, "Command failed");
        return Err(e.into());
    }

    if should_start_server(&cli) {
        Server::new(settings).run().await?;
    }

    Ok(())
}
