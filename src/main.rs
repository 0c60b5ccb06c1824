use std::process::ExitCode;

use clap::Parser;
use ginrummy::{config::ConfigError, game::Difficulty, GameError, Table, TableConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "ginrummy=debug";

#[derive(Parser, Debug)]
#[command(name = "ginrummy")]
#[command(about = "Deal a Gin Rummy table and print it")]
struct Cli {
    /// Opponent difficulty: easy|low, medium|med, hard|high [default: GINRUMMY_DIFFICULTY or easy]
    #[arg(value_parser = clap::value_parser!(Difficulty))]
    difficulty: Option<Difficulty>,

    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Failed to encode table: {0}")]
    Json(#[from] serde_json::Error),
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = TableConfig::from_env()?;

    let mut table = Table::new(&config)?;
    if let Some(difficulty) = cli.difficulty {
        table.select_difficulty(difficulty)?;
    }

    let snapshot = table.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{snapshot}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the table itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Gin Rummy table");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Gin Rummy table failed");
            ExitCode::FAILURE
        }
    }
}
