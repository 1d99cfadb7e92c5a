//! CLI Adapter.

mod list;
mod seed;
mod show;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "blob-templates")]
#[command(version)]
#[command(
    about = "Seed, list, and show demo templates stored in Azure Blob Storage",
    long_about = None
)]
struct Cli {
    /// Log storage requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload demo templates to the 'demo' container
    Seed,
    /// List available templates
    #[clap(visible_alias = "ls")]
    List,
    /// Show a template by id or choose one interactively
    Show {
        /// Template id to show without prompting
        #[arg(long)]
        id: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    };

    let result: Result<(), AppError> = match command {
        Commands::Seed => seed::run_seed(),
        Commands::List => list::run_list(),
        Commands::Show { id } => show::run_show(id.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // `--verbose` wins over RUST_LOG; otherwise RUST_LOG applies, defaulting to warnings only.
    let filter = if verbose {
        EnvFilter::new("blob_templates=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
