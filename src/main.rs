use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use voxctl::cli::{Cli, Command};
use voxctl::commands;
use voxctl::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("voxctl=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Speakers => commands::list_speakers(&config).await?,
        Command::Say {
            text,
            speaker,
            format,
            output,
        } => {
            commands::say(
                &config,
                &text,
                speaker.as_deref(),
                format.as_deref(),
                &output,
            )
            .await?
        }
        Command::Wifi { uuid, password } => {
            commands::configure_wifi(&config, &uuid, &password).await?
        }
        Command::Tokens { prompt, model } => {
            commands::count_tokens(&config, &prompt, model.as_deref()).await?
        }
    }

    Ok(())
}
