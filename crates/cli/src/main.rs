//! `lead-reader` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve` — start the API server.
//! - `list`  — print every lead once as a JSON envelope.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lead-reader",
    about = "Read lead records from a relational store",
    version
)]
struct Cli {
    /// Connection URL of the backing store (`postgres://…` or `sqlite:…`).
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5, global = true)]
    max_connections: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Fetch all leads and print the response envelope to stdout.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .context("DATABASE_URL is not set (pass --database-url or export it)")?;
    let pool = db::pool::create_pool(&database_url, cli.max_connections)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Command::Serve { bind } => {
            info!("Starting API server on {bind}");
            api::serve(&bind, pool).await.context("API server failed")?;
        }
        Command::List => {
            let fetched = db::repository::leads::fetch_all(&pool)
                .await
                .context("failed to read leads")?;
            info!("Read {} lead(s)", fetched.len());

            let envelope = api::LeadsResponse::from(fetched);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            pool.close().await;
        }
    }

    Ok(())
}
