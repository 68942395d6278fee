//! Descent Runner CLI
//!
//! Prompts for a starting point and an accuracy, then minimises
//! `2*x1^3 + x1*x2^2 - 216*x1` with gradient descent, coordinate descent and
//! Newton's method side by side.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use service_cli::config::{build_config, CliArgs};
use service_cli::persistence::TraceWriter;
use service_cli::{runner, CliError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Minimise a fixed bivariate function with three descent methods
#[derive(Parser, Debug)]
#[command(name = "descent")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Iteration bound shared by all methods
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Base step of gradient descent
    #[arg(long)]
    initial_step: Option<f64>,

    /// Directory receiving trace files
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        CliArgs {
            config_file: args.config,
            max_iterations: args.max_iterations,
            initial_step: args.initial_step,
            output_dir: args.output_dir,
            log_level: args.log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: CliArgs = args.into();
    let config = build_config(&cli_args).map_err(CliError::from)?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = service_cli::VERSION,
        max_iterations = config.max_iterations,
        initial_step = config.initial_step,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let sink = TraceWriter::new(&config.output_dir);
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    match runner::run_session(&mut reader, &mut stdout, &config, &sink).await {
        Ok(completed) => {
            tracing::debug!(delivered = completed.len(), "Session finished");
        }
        Err(err @ (CliError::InvalidInput { .. } | CliError::Solver(_))) => {
            println!("{}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
