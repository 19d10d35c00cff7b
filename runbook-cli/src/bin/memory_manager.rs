//! Record and search solutions in the persistent memory log

use anyhow::Result;
use clap::{Parser, Subcommand};
use runbook_cli::{load_config, output, GlobalArgs};
use runbook_core::logging::init_logging;
use runbook_core::memory::MemoryStore;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "memory-manager")]
#[command(about = "Manage the persistent solution memory")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a solution under today's date
    Add {
        /// What went wrong
        #[arg(allow_hyphen_values = true)]
        problem: Option<String>,
        /// How it was fixed
        #[arg(allow_hyphen_values = true)]
        solution: Option<String>,
        /// Tags, e.g. '#api #performance'
        #[arg(allow_hyphen_values = true)]
        tags: Option<String>,
        /// Ignored
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Search saved solutions (case-insensitive)
    Search {
        #[arg(allow_hyphen_values = true)]
        term: Option<String>,
        /// Ignored
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Print the whole solutions log
    List {
        /// One line per entry instead of the raw file
        #[arg(long)]
        summary: bool,
        /// Ignored
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Print the recurring patterns file
    Patterns {
        /// Ignored
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.global)?;
    let _guard = init_logging(&config.logging);

    let store = MemoryStore::from_config(&config);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        None => output::memory_usage(&mut stdout)?,
        Some(Commands::Add {
            problem: Some(problem),
            solution: Some(solution),
            tags: Some(tags),
            ..
        }) => {
            info!(path = %store.solutions_path().display(), "adding solution");
            let entry = store.append_solution(&problem, &solution, &tags)?;
            output::solution_added(&mut stdout, &entry)?;
        }
        Some(Commands::Add { .. }) => {
            debug!("add called without problem, solution and tags");
            output::add_usage(&mut stdout)?;
        }
        Some(Commands::Search { term: Some(term), .. }) => {
            let hits = store.search(&term)?;
            output::search_results(&mut stdout, &term, hits.as_deref())?;
        }
        Some(Commands::Search { term: None, .. }) => output::search_usage(&mut stdout)?,
        Some(Commands::List { summary: false, .. }) => {
            let content = store.load()?;
            output::store_content(&mut stdout, content.as_deref())?;
        }
        Some(Commands::List { summary: true, .. }) => {
            let entries = store.entries()?;
            output::entry_summary(&mut stdout, &entries)?;
        }
        Some(Commands::Patterns { .. }) => {
            let content = store.load_patterns()?;
            output::patterns(&mut stdout, content.as_deref(), store.patterns_path())?;
        }
        Some(Commands::Unknown(args)) => {
            let command = args.first().map(String::as_str).unwrap_or_default();
            output::unknown_command(&mut stdout, command)?;
        }
    }

    Ok(())
}
