mod generate;
mod schema;
mod verify;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "media-fixtures")]
#[command(version)]
#[command(about = "Generate positive, negative and edge-case title/credit fixtures as CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate titles.csv and credits.csv
    Generate {
        /// Output directory for the CSV files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Random seed for reproducibility (random if not specified)
        #[arg(long)]
        seed: Option<u64>,

        /// YAML config file (record count, case blocks, file names, seed)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Repeat the negative-case rules across the whole negative block
        #[arg(long)]
        cycle_negative: bool,

        /// Date treated as today, YYYY-MM-DD (default: local date)
        #[arg(long)]
        reference_date: Option<String>,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Generate without writing files
        #[arg(long)]
        dry_run: bool,

        /// Output results as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Check the structure of previously generated files
    Verify {
        /// Directory containing the CSV files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// YAML config file (for custom file names)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output results as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Print JSON Schemas for --json outputs
    Schema {
        /// Only print the schema for this command
        #[arg(long)]
        command: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            output,
            seed,
            config,
            cycle_negative,
            reference_date,
            progress,
            dry_run,
            json,
        } => generate::run(
            output,
            seed,
            config,
            cycle_negative,
            reference_date,
            progress,
            dry_run,
            json,
        ),
        Commands::Verify { dir, config, json } => verify::run(dir, config, json),
        Commands::Schema { command } => schema::run(command),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "media-fixtures",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
