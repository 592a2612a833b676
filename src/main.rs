use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{OutputFormat, inspect_command, validate_command};

#[derive(Parser)]
#[command(
    name = "atlas-validate",
    about = "Validates Atlas cluster, project and database user manifests",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate manifest files or directories of manifests
    Validate {
        /// Manifest files or directories to validate
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "human",
            env = "ATLAS_VALIDATE_FORMAT"
        )]
        format: OutputFormat,
    },

    /// Show how a manifest was decoded
    Inspect {
        /// Manifest file to inspect
        path: PathBuf,

        /// Print the decoded resource as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate { paths, format } => validate_command(&paths, format)?,
        Commands::Inspect { path, json } => inspect_command(&path, json)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("atlas_validate=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("atlas_validate=info"), // -v: info messages
        _ => EnvFilter::new("atlas_validate=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
