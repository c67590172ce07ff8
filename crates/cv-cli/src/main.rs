//! Convai command line client
//!
//! Builds user and execution queries from flags and submits them to the
//! platform, printing the result as JSON.

use anyhow::Context as _;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cv_api::{ConvaiApi, ConvaiClient};
use cv_core::config::ClientConfig;

mod args;

use args::{Cli, Command, ExecutionsArgs, UsersArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match &cli.command {
        Command::Users(args) => run_users(&cli, args).await,
        Command::Executions(args) => run_executions(&cli, args).await,
    }
}

/// Logs go to stderr so stdout stays machine readable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cv_api=debug,cv_cli=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

fn client(cli: &Cli) -> anyhow::Result<ConvaiClient> {
    let mut config = ClientConfig::from_env().context("failed to load client configuration")?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }

    info!(base_url = %config.base_url, "Connecting to Convai");
    Ok(ConvaiClient::new(config)?)
}

async fn run_users(cli: &Cli, args: &UsersArgs) -> anyhow::Result<()> {
    let query = args.to_query()?;
    if args.dry_run {
        return print_json(&query);
    }

    let client = client(cli)?;
    if args.reachable {
        let reachable = client.query_users_reachable(&query).await?;
        return print_json(&reachable);
    }

    let result = client.query_users(&query).await?;
    info!(count = result.count, returned = result.users.len(), "Fetched users");
    print_json(&result)
}

async fn run_executions(cli: &Cli, args: &ExecutionsArgs) -> anyhow::Result<()> {
    let query = args.to_query()?;
    if args.dry_run {
        return print_json(&query);
    }

    let result = client(cli)?.query_executions(&query).await?;
    let failed = result.executions.iter().filter(|e| e.has_errors()).count();
    info!(
        total = result.total,
        returned = result.executions.len(),
        failed,
        "Fetched executions"
    );
    print_json(&result)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
