pub mod cli;
pub mod core;
pub mod export;
pub mod pipeline;
pub mod providers;

pub use crate::core::{BudgetNormalizer, BudgetProvider, fetch_budgets, parse_budget_to_usd};

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Export { output_dir: Option<String> },
    Parse { budget: String },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Film budgets starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Export { output_dir } => cli::export::run(&config, output_dir.as_deref()).await,
        AppCommand::Parse { budget } => {
            cli::parse::run(&config, &budget);
            Ok(())
        }
    }
}
