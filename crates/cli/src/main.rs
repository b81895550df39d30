mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomlog")]
#[command(about = "Room observation log and fixture inventory for hotel staff", long_about = None)]
struct Cli {
    /// Directory holding the observation blob (overrides ROOMLOG_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Rust,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a tab-separated inventory table into a room fixture table
    Extract {
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Attach a note to a room
    Add {
        room_id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a note from a room
    Remove {
        room_id: String,
        observation_id: String,
    },
    /// Show the notes of one room, or of every room
    List {
        room_id: Option<String>,
    },
    /// Suggest known issues matching a query
    Suggest {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
        /// Newline-delimited issue dictionary (overrides ROOMLOG_ISSUES_FILE)
        #[arg(long)]
        issues: Option<PathBuf>,
    },
    /// Delete every stored note
    Clear,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(roomlog_core::data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Extract { input, format, output } => {
            commands::extract::run(&input, format, output.as_deref())
        },
        Commands::Add { room_id, text } => {
            commands::observations::run_add(&data_dir, &room_id, &text.join(" "))
        },
        Commands::Remove { room_id, observation_id } => {
            commands::observations::run_remove(&data_dir, &room_id, &observation_id)
        },
        Commands::List { room_id } => {
            commands::observations::run_list(&data_dir, room_id.as_deref())
        },
        Commands::Suggest { query, limit, issues } => {
            commands::suggest::run(&query, limit, issues.as_deref())
        },
        Commands::Clear => commands::observations::run_clear(&data_dir),
    }
}
