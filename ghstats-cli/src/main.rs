//! ghstats CLI
//!
//! Runs the stats API server, or looks up a single user from the terminal.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ghstats_api::{ApiConfig, ApiServer};
use ghstats_cache::{StatsCache, StatsFetcher};
use ghstats_core::types::UserStats;
use ghstats_github::GitHubClient;

/// ghstats - cached GitHub commit and repository statistics
#[derive(Parser)]
#[command(name = "ghstats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Fetch stats for one user and print them
    Stats {
        /// GitHub login
        username: String,
        /// GitHub token (defaults to GITHUB_TOKEN)
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "ghstats=debug,info"
    } else {
        "ghstats=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Stats { username, token, json } => cmd_stats(&username, token, json).await,
    }
}

/// Run the API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    let config = ApiConfig::from_env();
    if config.github_token.is_none() {
        warn!("GITHUB_TOKEN is not set; stats requests will return 500");
    }

    let server = ApiServer::new(config).context("Failed to initialise API server")?;
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .context("Invalid bind address")?;

    println!("{}", "🚀 Starting ghstats API server...".cyan().bold());
    println!("   {} http://{}/api/commits/<username>", "Stats:".green(), addr);
    println!("   {} http://{}/health", "Health check:".dimmed(), addr);
    println!("\n   Press Ctrl+C to stop.\n");

    server.run(addr).await?;

    Ok(())
}

/// Fetch stats for a single user
async fn cmd_stats(username: &str, token: Option<String>, json: bool) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if token.is_some() {
        config.github_token = token;
    }

    let github = config
        .github_config()
        .context("No GitHub token: pass --token or set GITHUB_TOKEN")?;
    let client = GitHubClient::with_config(github)?;
    let fetcher = StatsFetcher::new(Arc::new(StatsCache::new()), Arc::new(client));

    info!(username, "Fetching stats from GitHub");

    let stats = fetcher
        .fetch_stats(username)
        .await
        .with_context(|| format!("Failed to fetch stats for '{}'", username))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(username, &stats);
    }

    Ok(())
}

fn print_summary(username: &str, stats: &UserStats) {
    println!("{} {}", "📊 Stats for".cyan().bold(), username.bold());
    println!("   {} {}", "Commits:".dimmed(), stats.commits.to_string().green());
    println!("   {} {}", "Repositories:".dimmed(), stats.total_repos);
    println!("     {} {}", "owned:".dimmed(), stats.repos_count.owned);
    println!("     {} {}", "original:".dimmed(), stats.repos_count.original);
    println!("     {} {}", "private:".dimmed(), stats.repos_count.private);
}
