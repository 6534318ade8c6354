//! Tool-call front door for the pulse survey workflow
//!
//! Reads newline-delimited JSON tool calls and writes one JSON result per line
//! to stdout. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pulse_core::config::Config;
use pulse_core::domains::surveys::{survey_tools, SurveyOrchestrator};
use pulse_core::kernel::tools::serve_lines;
use pulse_core::kernel::{ServerDeps, ToolRegistry};
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Employee pulse survey workflow")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run tool calls, one JSON object per line
    Serve {
        /// Read calls from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// Print all tool definitions as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pulse_core=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = ServerDeps::simulated(config);
    let orchestrator = Arc::new(SurveyOrchestrator::from_deps(&deps));
    let registry = survey_tools(orchestrator);

    match cli.command {
        Commands::Tools => {
            let definitions = serde_json::to_string_pretty(&registry.definitions())
                .context("Failed to serialize tool definitions")?;
            println!("{definitions}");
        }
        Commands::Serve { input: Some(path) } => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            serve(&registry, BufReader::new(file)).await?;
        }
        Commands::Serve { input: None } => {
            serve(&registry, BufReader::new(tokio::io::stdin())).await?;
        }
    }

    Ok(())
}

async fn serve<R>(registry: &ToolRegistry, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    tracing::info!(tools = ?registry.names(), "Serving tool calls");
    let answered = serve_lines(registry, reader, tokio::io::stdout()).await?;
    tracing::info!(answered, "Input exhausted");
    Ok(())
}
