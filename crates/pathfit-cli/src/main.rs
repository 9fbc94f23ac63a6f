//! pathfit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pathfit", version, about = "Career-fit assessment engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive assessment
    Run {
        /// Path to a bank .toml file (defaults to the built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output directory for reports
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, html, all
        #[arg(long)]
        format: Option<String>,

        /// Also save the raw responses as JSON
        #[arg(long)]
        save_responses: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a saved responses JSON file without interaction
    Score {
        /// Responses JSON file (array of {question_id, value, recorded_at})
        #[arg(long)]
        responses: PathBuf,

        /// Path to a bank .toml file (defaults to the built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output directory for reports
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, html, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Compare two saved assessment reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Points a dimension must move to count as changed
        #[arg(long, default_value = "5")]
        threshold: u8,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config and write the built-in bank to disk
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathfit=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            bank,
            output,
            format,
            save_responses,
            config,
        } => commands::run::execute(bank, output, format, save_responses, config),
        Commands::Score {
            responses,
            bank,
            output,
            format,
            config,
        } => commands::score::execute(responses, bank, output, format, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Compare {
            baseline,
            current,
            threshold,
            format,
        } => commands::compare::execute(baseline, current, threshold, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
