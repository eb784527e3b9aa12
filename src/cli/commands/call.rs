use clap::Args;
use serde_json::Value;

use crate::cli::utils::*;
use crate::cli::{edge_client, OutputFormat};

#[derive(Args)]
pub struct CallArgs {
    #[arg(help = "Edge Function name, e.g. cronjobs")]
    pub function: String,

    #[arg(help = "Action to invoke, e.g. list")]
    pub action: String,

    #[arg(long, help = "Params as a JSON object")]
    pub params: Option<String>,
}

pub async fn handle(args: CallArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let params: Value = match args.params.as_deref() {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("--params is not valid JSON: {}", e))?,
        None => Value::Null,
    };

    let client = edge_client()?;
    let data: Value = client.invoke(&args.function, &args.action, &params).await?;

    match output_format {
        OutputFormat::Json => print_json(&data)?,
        OutputFormat::Text => match &data {
            Value::Null => output_success(&output_format, &format!("{}:{} completed", args.function, args.action), None)?,
            Value::String(s) => println!("{}", s),
            other => print_json(other)?,
        },
    }
    Ok(())
}
