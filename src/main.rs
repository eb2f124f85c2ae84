mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::reveal::{DEFAULT_STAGGER_MS, DEFAULT_THRESHOLD};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio", version, about = "Portfolio gallery renderer and project authoring assistant")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the project gallery to a static HTML page
    Render {
        /// Project data file or URL
        #[arg(short, long, default_value = "database.json")]
        data: String,
        /// Output HTML file
        #[arg(short, long, default_value = "index.html")]
        out: String,
        /// Fraction of a card that must be visible before it reveals
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
        /// Extra reveal delay per card, in milliseconds
        #[arg(long, default_value_t = DEFAULT_STAGGER_MS)]
        stagger_ms: u64,
    },
    /// Fill the project form, preview it, and print the JSON record
    Add(commands::add::AddArgs),
    /// Extract tech-stack tags from a README file or a GitHub repository
    Tags {
        /// Path to a README file, or a GitHub repository URL
        target: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render { data, out, threshold, stagger_ms } => {
            commands::render::run(&data, &out, threshold, stagger_ms)
        }
        Command::Add(args) => commands::add::run(&args),
        Command::Tags { target } => commands::tags::run(&target),
    }
}
