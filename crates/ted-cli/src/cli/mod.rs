//! CLI entry and dispatch.

use std::io;

use anyhow::Result;
use clap::Parser;
use ted_core::config::Config;
use ted_core::repl::{self, ReaderSource};
use ted_core::store::DirStore;

mod commands;

#[derive(Parser)]
#[command(name = "ted")]
#[command(version = "0.2")]
#[command(about = "TED interactive multi-file text editor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to open (missing files are created as new empty documents)
    #[arg(value_name = "FILES")]
    files: Vec<String>,

    /// Root directory for file operations (default: current directory)
    #[arg(long, default_value = ".")]
    root: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the path to the config file
    Path,
    /// Create a config file with the default template
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        None => edit(&cli),
    }
}

/// Default mode: open the given files and run the interactive loop over
/// stdin/stdout.
fn edit(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let stdin = io::stdin();
    let mut input = ReaderSource::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    repl::run(
        DirStore::new(cli.root.as_str()),
        &cli.files,
        &config,
        &mut input,
        &mut out,
    )
}
