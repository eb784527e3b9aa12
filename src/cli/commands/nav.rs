use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::config::route_labels;
use crate::navigation::Breadcrumbs;

#[derive(Subcommand)]
pub enum NavCommands {
    #[command(about = "Show the breadcrumb trail for a path")]
    Resolve {
        #[arg(help = "Route path, e.g. /dashboard/cronjobs-dashboard")]
        path: String,
    },

    #[command(about = "Render the breadcrumb trail as HTML")]
    Render {
        #[arg(help = "Route path")]
        path: String,
        #[arg(long, help = "Render as plain text instead of HTML")]
        text: bool,
    },

    #[command(about = "List the route label table")]
    Labels,
}

pub fn handle(cmd: NavCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let labels = route_labels();

    match cmd {
        NavCommands::Resolve { path } => {
            let trail = Breadcrumbs::for_path(&path, labels);

            if trail.is_empty() {
                return output_empty_collection(&output_format, "breadcrumbs", "No breadcrumbs for this path");
            }

            match output_format {
                OutputFormat::Json => print_json(&json!({ "breadcrumbs": trail.items() }))?,
                OutputFormat::Text => {
                    println!("{:<30} {}", "LABEL", "HREF");
                    println!("{}", "-".repeat(60));
                    for item in trail.items() {
                        println!("{:<30} {}", truncate(&item.label, 30), item.href);
                    }
                }
            }
            Ok(())
        }
        NavCommands::Render { path, text } => {
            let trail = Breadcrumbs::for_path(&path, labels);
            let rendered = if text { trail.to_text() } else { trail.to_html() };

            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "path": path,
                    "crumbs": trail.crumbs(),
                    "rendered": rendered,
                }))?,
                OutputFormat::Text => println!("{}", rendered),
            }
            Ok(())
        }
        NavCommands::Labels => {
            let entries = labels.entries();

            match output_format {
                OutputFormat::Json => {
                    let labels: Vec<_> = entries
                        .iter()
                        .map(|(segment, label)| json!({ "segment": segment, "label": label }))
                        .collect();
                    print_json(&json!({ "labels": labels }))?;
                }
                OutputFormat::Text => {
                    println!("{:<25} {}", "SEGMENT", "LABEL");
                    println!("{}", "-".repeat(50));
                    for (segment, label) in entries {
                        println!("{:<25} {}", segment, label);
                    }
                }
            }
            Ok(())
        }
    }
}
