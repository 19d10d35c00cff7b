//! Print operator directives kept as Markdown files

use anyhow::Result;
use clap::{Parser, Subcommand};
use runbook_cli::{load_config, output, GlobalArgs};
use runbook_core::directives::DirectiveLibrary;
use runbook_core::logging::init_logging;
use tracing::info;

#[derive(Parser)]
#[command(name = "directive-runner")]
#[command(about = "List and print runbook directives")]
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
    /// List available directives
    List {
        /// Ignored
        #[arg(hide = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
    /// Show the directive with this name
    #[command(external_subcommand)]
    Show(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.global)?;
    let _guard = init_logging(&config.logging);

    let library = DirectiveLibrary::from_config(&config);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        None => output::directive_usage(&mut stdout)?,
        Some(Commands::List { .. }) => {
            info!(dir = %library.dir().display(), "listing directives");
            let names = library.list()?;
            output::directive_list(&mut stdout, names.as_deref(), library.dir())?;
        }
        Some(Commands::Show(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            info!(name, "showing directive");
            let directive = library.read(name)?;
            output::directive_show(&mut stdout, name, directive.as_ref())?;
        }
    }

    Ok(())
}
