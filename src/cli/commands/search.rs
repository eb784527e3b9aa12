use clap::Args;

use crate::cli::utils::*;
use crate::cli::{edge_client, OutputFormat};
use crate::services::{SearchQuery, SearchService};

#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Search text")]
    pub query: String,

    #[arg(long = "type", help = "Only return hits of this kind (repeatable)")]
    pub types: Vec<String>,

    #[arg(long, help = "Maximum number of hits")]
    pub limit: Option<u32>,

    #[arg(long, help = "Number of hits to skip")]
    pub offset: Option<u32>,
}

pub async fn handle(args: SearchArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let service = SearchService::new(edge_client()?);

    let query = SearchQuery {
        query: args.query,
        types: args.types,
        limit: args.limit,
        offset: args.offset,
    };
    let results = service.search(&query).await?;

    if results.results.is_empty() {
        return output_empty_collection(&output_format, "results", "No results");
    }

    match output_format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => {
            println!("{:<12} {:<40} {}", "TYPE", "TITLE", "URL");
            println!("{}", "-".repeat(80));
            for hit in &results.results {
                println!(
                    "{:<12} {:<40} {}",
                    hit.kind,
                    truncate(&hit.title, 40),
                    hit.url.as_deref().unwrap_or("-")
                );
            }
            println!("\n{} of {} results", results.results.len(), results.total);
        }
    }
    Ok(())
}
