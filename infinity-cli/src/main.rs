//! Infinity CLI - Command-line inspection of the Infinity Loop catalog

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "infinity")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about the book
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents
    Toc {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single chapter
    Chapter {
        /// Chapter id (e.g. ch1, preface, app-a)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the catalog structure
    Validate,

    /// Export the whole book as JSON
    Export {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Convert Windows-1252 manuscript files to UTF-8 in place
    Convert {
        /// Manuscript files (.htm)
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Print the trial and licensing constants
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "infinity_cli=debug,infinity_core=debug"
    } else {
        "infinity_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Info { json } => commands::info(json),
        Commands::Toc { json } => commands::toc(json),
        Commands::Chapter { id, json } => commands::chapter(&id, json),
        Commands::Validate => commands::validate(),
        Commands::Export { output } => commands::export(output.as_deref()),
        Commands::Convert { files } => commands::convert(&files),
        Commands::Config { json } => commands::config(json),
    }
}
