use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directory_client::{
    load_settings, DirectoryService, HttpDirectoryClient, SelectionCascade, SelectionEvent,
    Settings,
};
use serde::Serialize;
use tracing::info;

mod logging;
mod render;
mod shell;

#[derive(Parser, Debug)]
#[command(about = "Browse clinics, locations, procedures and providers")]
struct Cli {
    /// Settings file; `directory.toml` in the working directory is used if present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured service base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Print raw JSON instead of text.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Clinics,
    Locations {
        clinic_id: String,
    },
    Procedures {
        clinic_id: String,
        location_id: String,
        /// One line per procedure instead of full cards.
        #[arg(long)]
        brief: bool,
    },
    /// Comma-separated provider ids.
    Providers {
        ids: String,
    },
    /// Walk the selection cascade once and print every level.
    Browse {
        #[arg(long)]
        clinic: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        procedure: Option<String>,
    },
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_filter = logging::init();
    let mut settings = load_settings(cli.config.as_deref())?;
    log_filter.apply_settings(&settings);
    if let Some(base_url) = &cli.base_url {
        settings.api.base_url = base_url.clone();
    }

    let client = HttpDirectoryClient::from_settings(&settings.api)
        .with_context(|| format!("invalid base URL {}", settings.api.base_url))?;
    info!(
        app = %settings.app.name,
        base_url = %client.base_url(),
        "browser: starting"
    );

    match cli.command {
        Command::Clinics => {
            let clinics = client.list_clinics().await?;
            print_listing(cli.json, &clinics, render::clinic_line)?;
        }
        Command::Locations { clinic_id } => {
            let locations = client.list_locations(&clinic_id).await?;
            print_listing(cli.json, &locations, render::location_line)?;
        }
        Command::Procedures {
            clinic_id,
            location_id,
            brief,
        } => {
            let procedures = client
                .list_procedure_offerings(&clinic_id, &location_id)
                .await?;
            if cli.json || brief {
                print_listing(cli.json, &procedures, render::procedure_line)?;
            } else {
                for procedure in &procedures {
                    println!("{}", render::procedure_card(procedure, None).join("\n"));
                }
            }
        }
        Command::Providers { ids } => {
            let providers = client.list_providers(&ids).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&providers)?);
            } else {
                for provider in &providers {
                    println!("{}", render::provider_card(provider).join("\n"));
                }
            }
        }
        Command::Browse {
            clinic,
            location,
            procedure,
        } => {
            let mut cascade = SelectionCascade::new(Arc::new(client));
            let events = std::iter::once(SelectionEvent::Initialize)
                .chain(clinic.map(SelectionEvent::SelectClinic))
                .chain(location.map(SelectionEvent::SelectLocation))
                .chain(procedure.map(SelectionEvent::SelectProcedure));
            for event in events {
                cascade.dispatch(event).await;
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(cascade.state())?);
            } else {
                print_header(&settings);
                println!("{}", render::render_state(cascade.state(), &settings.map));
            }
        }
        Command::Shell => {
            print_header(&settings);
            let cascade = SelectionCascade::new(Arc::new(client));
            shell::run_shell(cascade, &settings.map).await?;
        }
    }

    Ok(())
}

fn print_header(settings: &Settings) {
    println!("{} {}", settings.app.name, settings.app.version);
}

fn print_listing<T: Serialize>(json: bool, items: &[T], line: fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", line(item));
        }
    }
    Ok(())
}
