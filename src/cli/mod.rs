pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::edge::EdgeClient;

#[derive(Parser)]
#[command(name = "opsdash")]
#[command(about = "Operations dashboard CLI - navigation and Edge Function access")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Resolve and render breadcrumb trails")]
    Nav {
        #[command(subcommand)]
        cmd: commands::nav::NavCommands,
    },

    #[command(about = "Invoke an Edge Function action directly")]
    Call(commands::call::CallArgs),

    #[command(about = "Full-text search across the dashboard")]
    Search(commands::search::SearchArgs),

    #[command(about = "Cronjob management")]
    Cronjobs {
        #[command(subcommand)]
        cmd: commands::cronjobs::CronjobCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Nav { cmd } => commands::nav::handle(cmd, output_format),
        Commands::Call(args) => commands::call::handle(args, output_format).await,
        Commands::Search(args) => commands::search::handle(args, output_format).await,
        Commands::Cronjobs { cmd } => commands::cronjobs::handle(cmd, output_format).await,
    }
}

/// Client built from the process configuration.
pub fn edge_client() -> anyhow::Result<EdgeClient> {
    Ok(EdgeClient::new(&crate::config::config().edge)?)
}
