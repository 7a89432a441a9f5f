//! Incubator CLI
//!
//! Thin command-line consumer of the client SDK: lists collections,
//! drives the create-startup-with-team workflow, reviews resource
//! requests, and exports applications to CSV.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use incubator_client::config::{ClientConfig, ConfigArgs};
use incubator_client::domain::startup::{StartupStatus, TeamPlan};
use incubator_client::{ApiClient, SessionStore, export};

#[derive(Parser, Debug)]
#[command(name = "incubator", author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all startups
    Startups,
    /// Create a startup and staff its team by member names
    CreateStartup {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        industry: String,
        #[arg(long, default_value = "")]
        stage: String,
        /// Initial status: pending (awaits admin approval) or approved
        #[arg(long, default_value = "pending", value_parser = parse_status)]
        status: StartupStatus,
        /// Team leader's full name
        #[arg(long)]
        leader: String,
        /// Team member full name (repeatable)
        #[arg(long = "member")]
        members: Vec<String>,
    },
    /// List all resources
    Resources,
    /// List all resource requests
    Requests,
    /// Approve a pending resource request
    ApproveRequest { id: i64 },
    /// Reject a pending resource request
    RejectRequest { id: i64 },
    /// List all events
    Events,
    /// List applications, optionally exporting them to CSV
    Applications {
        /// Write the rows to this CSV file instead of printing
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print the analytics dashboard snapshot
    Dashboard,
}

fn parse_status(value: &str) -> Result<StartupStatus, String> {
    match value {
        "pending" => Ok(StartupStatus::Pending),
        "approved" => Ok(StartupStatus::Approved),
        "rejected" => Ok(StartupStatus::Rejected),
        other => Err(format!("unknown status: {other}")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::load_with(&cli.config).context("failed to load configuration")?;
    info!(
        name: "config.loaded",
        base_url = %config.api.base_url,
        "configuration loaded"
    );

    let client = ApiClient::from_config(&config)?;

    let session = SessionStore::load(&config.session.file)
        .context("failed to load session snapshot")?;
    if let Some(token) = session.access_token() {
        client.set_token(token);
    }

    match cli.command {
        Command::Startups => {
            let startups = client.startups().list().await?;
            println!("{}", serde_json::to_string_pretty(&startups)?);
        }
        Command::CreateStartup {
            name,
            description,
            industry,
            stage,
            status,
            leader,
            members,
        } => {
            let plan = TeamPlan {
                name,
                description,
                industry,
                stage,
                initial_status: status,
                team_leader: leader,
                team_members: members,
            };
            let startup = client.startups().create_with_team(&plan).await?;
            println!("{}", serde_json::to_string_pretty(&startup)?);
        }
        Command::Resources => {
            let resources = client.resources().list().await?;
            println!("{}", serde_json::to_string_pretty(&resources)?);
        }
        Command::Requests => {
            let requests = client.resources().requests().await?;
            println!("{}", serde_json::to_string_pretty(&requests)?);
        }
        Command::ApproveRequest { id } => {
            let request = client.resources().approve_request(id).await?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::RejectRequest { id } => {
            let request = client.resources().reject_request(id).await?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Events => {
            let events = client.events().list().await?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        Command::Applications { export: out } => {
            let applications = client.applications().list().await?;
            match out {
                Some(path) => {
                    export::write_applications_csv(&path, &applications)?;
                    println!("exported {} applications to {}", applications.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&applications)?),
            }
        }
        Command::Dashboard => {
            // The dashboard degrades to zeroed counters when the backend is
            // unreachable; the other panels stay interactive regardless.
            let stats = match client.analytics().dashboard().await {
                Ok(stats) => stats,
                Err(err) => {
                    warn!(name: "analytics.dashboard_failed", error = %err, "falling back to zeroed stats");
                    incubator_client::domain::DashboardStats::default()
                }
            };
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
