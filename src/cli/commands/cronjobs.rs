use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{edge_client, OutputFormat};
use crate::services::{Cronjob, CronjobService, RunStatus};

#[derive(Subcommand)]
pub enum CronjobCommands {
    #[command(about = "List all cronjobs")]
    List,

    #[command(about = "Show cronjob details")]
    Show {
        #[arg(help = "Cronjob ID")]
        id: String,
    },

    #[command(about = "Enable a cronjob")]
    Enable {
        #[arg(help = "Cronjob ID")]
        id: String,
    },

    #[command(about = "Disable a cronjob")]
    Disable {
        #[arg(help = "Cronjob ID")]
        id: String,
    },

    #[command(about = "Delete a cronjob")]
    Delete {
        #[arg(help = "Cronjob ID")]
        id: String,
    },
}

pub async fn handle(cmd: CronjobCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let service = CronjobService::new(edge_client()?);

    match cmd {
        CronjobCommands::List => {
            let jobs = service.list().await?;

            if jobs.is_empty() {
                return output_empty_collection(&output_format, "cronjobs", "No cronjobs configured");
            }

            match output_format {
                OutputFormat::Json => print_json(&json!({ "cronjobs": jobs }))?,
                OutputFormat::Text => {
                    println!("{:<38} {:<25} {:<15} {:<8} {}", "ID", "NAME", "SCHEDULE", "ENABLED", "LAST RUN");
                    println!("{}", "-".repeat(100));
                    for job in &jobs {
                        println!(
                            "{:<38} {:<25} {:<15} {:<8} {}",
                            job.id,
                            truncate(&job.name, 25),
                            job.schedule,
                            if job.enabled { "yes" } else { "no" },
                            last_run(job)
                        );
                    }
                }
            }
            Ok(())
        }
        CronjobCommands::Show { id } => {
            let job = service.get(&id).await?;

            match output_format {
                OutputFormat::Json => print_json(&job)?,
                OutputFormat::Text => {
                    println!("Cronjob: {}", job.name);
                    println!("ID: {}", job.id);
                    println!("Schedule: {}", job.schedule);
                    println!("Command: {}", job.command);
                    println!("Enabled: {}", if job.enabled { "yes" } else { "no" });
                    println!("Last Run: {}", last_run(&job));
                    if let Some(created) = job.created_at {
                        println!("Created: {}", created.format("%Y-%m-%d %H:%M:%S UTC"));
                    }
                }
            }
            Ok(())
        }
        CronjobCommands::Enable { id } => set_enabled(&service, &id, true, &output_format).await,
        CronjobCommands::Disable { id } => set_enabled(&service, &id, false, &output_format).await,
        CronjobCommands::Delete { id } => {
            service.delete(&id).await?;
            output_success(
                &output_format,
                &format!("Cronjob '{}' deleted successfully", id),
                Some(json!({ "id": id })),
            )
        }
    }
}

async fn set_enabled(
    service: &CronjobService,
    id: &str,
    enabled: bool,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let job = service.set_enabled(id, enabled).await?;
    let verb = if job.enabled { "enabled" } else { "disabled" };
    output_success(
        output_format,
        &format!("Cronjob '{}' {}", job.name, verb),
        Some(json!({ "id": job.id, "enabled": job.enabled })),
    )
}

fn last_run(job: &Cronjob) -> String {
    match (job.last_run_at, job.last_status) {
        (Some(at), status) => {
            let status = match status {
                Some(RunStatus::Success) => "ok",
                Some(RunStatus::Failed) => "failed",
                Some(RunStatus::Running) => "running",
                None => "unknown",
            };
            format!("{} ({})", at.format("%Y-%m-%d %H:%M"), status)
        }
        (None, _) => "never".to_string(),
    }
}
