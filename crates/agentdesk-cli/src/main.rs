//! AgentDesk CLI - Catalog listing and dashboard summary
//!
//! Terminal client for the AgentDesk API.

mod api;
mod config;
mod dashboard;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use tracing_subscriber::EnvFilter;

use api::AgentDeskClient;
use config::Config;

#[derive(Parser)]
#[command(name = "agentdesk")]
#[command(about = "AgentDesk CLI - Agent catalog and dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long, env = "AGENTDESK_URL", global = true)]
    url: Option<String>,

    /// API key (overrides the config file)
    #[arg(long, env = "AGENTDESK_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Log HTTP activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store API key and server URL
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Agent catalog operations
    Agents {
        #[command(subcommand)]
        action: AgentsAction,
    },

    /// Show summary counters
    Dashboard {
        /// Print the counters as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum AgentsAction {
    /// List all Agents
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?.with_overrides(cli.url, cli.api_key);

    match cli.command {
        Commands::Login { key } => cmd_login(config, key).await,
        Commands::Agents { action } => cmd_agents(&config, action).await,
        Commands::Dashboard { json } => cmd_dashboard(&config, json).await,
        Commands::Config => cmd_config(&config),
    }
}

// ============================================
// Command Implementations
// ============================================

fn client(config: &Config) -> AgentDeskClient {
    AgentDeskClient::new(&config.base_url, config.api_key.as_deref())
}

async fn cmd_login(mut config: Config, key: Option<String>) -> Result<()> {
    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = AgentDeskClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach AgentDesk API at {}", config.base_url);
        }
    }

    config.api_key = Some(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_agents(config: &Config, action: AgentsAction) -> Result<()> {
    let client = client(config);

    match action {
        AgentsAction::List => {
            let agents = client.list_agents().await?;

            if agents.is_empty() {
                println!("No agents found.");
                return Ok(());
            }

            println!("{}", "Agents:".bold());
            for agent in agents {
                let icon = if agent.icon.is_empty() { "-" } else { agent.icon.as_str() };
                println!(
                    "  {} {} [{}] {}",
                    agent.id.to_string().dimmed(),
                    agent.title.cyan().bold(),
                    icon,
                    truncate_string(&agent.description, 60).dimmed()
                );
            }
        }
    }

    Ok(())
}

async fn cmd_dashboard(config: &Config, json: bool) -> Result<()> {
    let data = dashboard::load(&client(config)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", dashboard::render(&data));
    }

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_string("Jurídico", 4), "Jurí...");
        assert_eq!(truncate_string("Saúde", 10), "Saúde");
    }

    #[test]
    fn test_cli_parses_dashboard_json() {
        let cli = Cli::try_parse_from(["agentdesk", "dashboard", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard { json: true }));
    }
}
