//! Finexus CLI
//!
//! Thin wrapper around finexus-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show categories, their endpoints and form fields
//! finexus categories
//!
//! # Check that the API answers
//! finexus check
//!
//! # List a category with its total
//! finexus list assets
//!
//! # Add a record (same fields as the dashboard form)
//! finexus add assets name="MacBook Pro" category=digital value=1800
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use finexus_core::{
    format_currency, ApiConfig, Category, HttpApi, RecordApi, ResourceSection,
};

/// Finexus - Personal finance records
#[derive(Parser)]
#[command(name = "finexus")]
#[command(version = "0.1.0")]
#[command(about = "Finexus - assets, investments, crypto, wills and tax from the terminal")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Base URL of the finance API
    #[arg(
        long,
        global = true,
        env = "FINEXUS_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    /// Seconds to wait for each API request
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the categories with their endpoints and fields
    Categories,

    /// Probe the API root
    Check,

    /// List the records of a category and their total
    List {
        /// assets, investments, crypto, wills or tax
        category: String,
    },

    /// Add a record to a category
    Add {
        /// assets, investments, crypto, wills or tax
        category: String,
        /// Field values as key=value
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

/// Split `key=value`; the value may itself contain `=`.
fn parse_assignment(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| anyhow::anyhow!("Expected key=value, got '{}'", arg))
}

fn parse_category(s: &str) -> Result<Category> {
    s.parse::<Category>().map_err(|e| {
        anyhow::anyhow!(
            "{} (expected one of: {})",
            e,
            Category::ALL.map(|c| c.slug()).join(", ")
        )
    })
}

fn build_api(cli: &Cli) -> Result<HttpApi> {
    let config = ApiConfig::new(&cli.api_url)?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    Ok(HttpApi::new(config)?)
}

fn print_section<A: RecordApi>(section: &ResourceSection<A>) {
    let config = section.config();
    println!("{} ({} records)", config.title, section.records().len());
    println!();
    for (idx, card) in section.cards().iter().enumerate() {
        println!("#{}", idx + 1);
        for line in card.lines() {
            println!("  {}", line);
        }
    }
    if section.records().is_empty() {
        println!("  (none)");
    }
    println!();
    println!("Total: {}", format_currency(section.total()));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    finexus_core::logging::init(cli.verbose);

    match &cli.command {
        Commands::Categories => {
            for category in Category::ALL {
                let section = category.section();
                println!("{} ({})", category.slug(), section.title);
                println!("  Endpoint: {}", section.add.list_path);
                println!("  Fields:");
                for field in &section.add.fields {
                    println!(
                        "    {} ({}) - {}",
                        field.name,
                        field.kind.input_type(),
                        field.label
                    );
                }
                println!();
            }
        }

        Commands::Check => {
            let api = build_api(&cli)?;
            let status = api
                .status()
                .await
                .with_context(|| format!("Backend at {} is unreachable", api.config().base_url()))?;

            println!("API: {}", status.url);
            println!("Status: {}", status.status);
            if let Some(body) = &status.body {
                println!("{}", serde_json::to_string_pretty(body)?);
            }
            if !status.is_healthy() {
                anyhow::bail!("Backend answered with HTTP {}", status.status);
            }
        }

        Commands::List { category } => {
            let category = parse_category(category)?;
            let mut section = ResourceSection::new(build_api(&cli)?, category.section());
            section
                .load()
                .await
                .with_context(|| format!("Failed to load {}", category))?;
            print_section(&section);
        }

        Commands::Add { category, fields } => {
            let category = parse_category(category)?;
            let config = category.section();

            // Build and validate the draft before touching the network
            let mut form = config.form();
            for arg in fields {
                let (key, value) = parse_assignment(arg)?;
                form.set(key, value)?;
            }
            let payload = form.submit()?;

            let mut section = ResourceSection::new(build_api(&cli)?, config);
            section
                .add(payload)
                .await
                .with_context(|| format!("Failed to add to {}", category))?;

            println!("Added to {}.", category);
            println!();
            print_section(&section);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments() {
        assert_eq!(parse_assignment("name=AAPL").unwrap(), ("name", "AAPL"));
        assert_eq!(parse_assignment("file_url=a=b").unwrap(), ("file_url", "a=b"));
        assert_eq!(parse_assignment("notes=").unwrap(), ("notes", ""));
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn categories_parse() {
        assert_eq!(parse_category("wills").unwrap(), Category::Wills);
        let err = parse_category("bonds").unwrap_err().to_string();
        assert!(err.contains("assets, investments, crypto, wills, tax"));
    }
}
