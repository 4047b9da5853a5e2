//! wegweiser CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "wegweiser",
    version,
    about = "Relocation eligibility assessment and learning simulation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an answers file into a full eligibility assessment
    Assess {
        /// Path to a .toml or .json answers file
        #[arg(long)]
        answers: PathBuf,

        /// Output directory for saved reports
        #[arg(long, default_value = "./wegweiser-results")]
        output: PathBuf,

        /// Output format: text, json, markdown, html, all
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run the 30-day learner simulation
    Simulate {
        /// Archetypes to simulate (dedicated, casual, inconsistent,
        /// perfectionist); default: all
        #[arg(long)]
        archetype: Vec<String>,

        /// Days to simulate (overrides config)
        #[arg(long)]
        days: Option<u32>,

        /// RNG seed for a reproducible run (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON phrase file; a placeholder set is generated when omitted
        #[arg(long)]
        phrases: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json, markdown, all
        #[arg(long, default_value = "text")]
        format: String,

        /// Output directory for saved reports
        #[arg(long, default_value = "./wegweiser-results")]
        output: PathBuf,
    },

    /// Validate answers files without evaluating them
    Validate {
        /// Path to an answers file or directory
        #[arg(long)]
        answers: PathBuf,
    },

    /// Create a starter config and sample answers file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wegweiser=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            answers,
            output,
            format,
        } => commands::assess::execute(answers, output, format),
        Commands::Simulate {
            archetype,
            days,
            seed,
            phrases,
            config,
            format,
            output,
        } => commands::simulate::execute(archetype, days, seed, phrases, config, format, output),
        Commands::Validate { answers } => commands::validate::execute(answers),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
