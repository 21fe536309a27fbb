use clap::{Parser, Subcommand};
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use std::path::Path;

use crate::config::Config;
use crate::startup;

#[derive(Parser)]
#[command(name = "inventory-dashboard")]
#[command(about = "Inventory Dashboard - stock and finance backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Database management commands
    #[command(subcommand)]
    Db(DbCommands),

    /// Validate configuration, static pages and database connectivity
    Config,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum DbCommands {
    /// Run database migrations
    Migrate,
}

pub async fn handle_db_migrate(pool: &PgPool) -> anyhow::Result<()> {
    let migrator = Migrator::new(Path::new("./migrations")).await?;
    migrator.run(pool).await?;
    tracing::info!("Database migrations completed");
    println!("Database migrations completed");
    Ok(())
}

pub async fn handle_config_validate(config: &Config, pool: &PgPool) -> anyhow::Result<()> {
    let report = startup::validate_environment(config, pool).await;
    report.print();

    if !report.is_valid() {
        anyhow::bail!("Configuration validation failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["inventory-dashboard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_db_migrate_parses() {
        let cli = Cli::try_parse_from(["inventory-dashboard", "db", "migrate"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Db(DbCommands::Migrate)));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["inventory-dashboard", "tx"]).is_err());
    }
}
