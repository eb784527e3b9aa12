use clap::Parser;
use tracing_subscriber::EnvFilter;

use opsdash::cli::{self, utils::output_error, Cli, OutputFormat};
use opsdash::EdgeError;

#[tokio::main]
async fn main() {
    // Load .env if present so OPSDASH_EDGE_URL, SUPABASE_ANON_KEY, etc. are picked up
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = opsdash::config::config();
    tracing::debug!("Starting opsdash in {:?} mode", config.environment);

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(err) = cli::run(cli).await {
        let code = err.downcast_ref::<EdgeError>().map(EdgeError::error_code);
        let message = match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => format!("{err:?}"),
            _ => err.to_string(),
        };
        let _ = output_error(&output_format, &message, code);
        std::process::exit(1);
    }
}
