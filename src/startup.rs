use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::Config;

/// Tables every endpoint reads from.
pub const REQUIRED_TABLES: [&str; 4] = [
    "users",
    "stock",
    "suppliertransactions",
    "customertransactions",
];

pub const REQUIRED_PAGES: [&str; 2] = ["login.html", "dashboard.html"];

pub struct ValidationReport {
    pub environment: bool,
    pub database: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.environment && self.database
    }

    pub fn print(&self) {
        println!("\n=== Startup Validation Report ===");
        println!("Environment & Static Files: {}", status(self.environment));
        println!("Database Connectivity:      {}", status(self.database));

        if !self.errors.is_empty() {
            println!("\nErrors:");
            for error in &self.errors {
                println!("  - {}", error);
            }
        }

        println!("\nOverall Status: {}", if self.is_valid() { "PASS" } else { "FAIL" });
        println!("=================================\n");
    }
}

fn status(ok: bool) -> &'static str {
    if ok { "OK" } else { "FAIL" }
}

pub async fn validate_environment(config: &Config, pool: &PgPool) -> ValidationReport {
    let mut report = ValidationReport {
        environment: true,
        database: true,
        errors: Vec::new(),
    };

    if let Err(e) = validate_env_vars(config) {
        report.environment = false;
        report.errors.push(format!("Environment: {:#}", e));
    }

    if let Err(e) = validate_database(pool).await {
        report.database = false;
        report.errors.push(format!("Database: {:#}", e));
    }

    report
}

fn validate_env_vars(config: &Config) -> Result<()> {
    if config.server_port == 0 {
        anyhow::bail!("SERVER_PORT must be greater than 0");
    }
    if !config.public_dir.is_dir() {
        anyhow::bail!("PUBLIC_DIR {} is not a directory", config.public_dir.display());
    }
    for page in REQUIRED_PAGES {
        let path = config.public_dir.join(page);
        if !path.is_file() {
            anyhow::bail!("missing static page {}", path.display());
        }
    }

    Ok(())
}

async fn validate_database(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("Failed to connect to database")?;

    for table in REQUIRED_TABLES {
        let found: Option<String> = sqlx::query_scalar("SELECT to_regclass($1)::text")
            .bind(table)
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to look up table {table}"))?;

        if found.is_none() {
            anyhow::bail!("table {table} does not exist (run `db migrate`)");
        }
    }

    Ok(())
}
