use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use filmbudget::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for filmbudget::AppCommand {
    fn from(cmd: Commands) -> filmbudget::AppCommand {
        match cmd {
            Commands::Export { output_dir } => filmbudget::AppCommand::Export { output_dir },
            Commands::Parse { budget } => filmbudget::AppCommand::Parse { budget },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch films and budgets and write them to a CSV file
    Export {
        /// Directory for the CSV file, overriding the configured one
        #[arg(short, long)]
        output_dir: Option<String>,
    },
    /// Show the USD value of a single budget string
    Parse {
        /// Budget text, e.g. "US$ 1.5–2 million [3]"
        budget: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => filmbudget::cli::setup::setup(),
        Some(cmd) => filmbudget::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
