use std::{path::PathBuf, process::ExitCode};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use anghami2spotify::{
    cli, config,
    report::{ConsoleReporter, Reporter},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Path to the settings file
    #[clap(long, short, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Import the exported playlist into Spotify (default)
    Import,

    /// Show the tracks found in the export
    List,

    /// Write the tracks to the configured text file
    Export,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = config::load_env() {
        ConsoleReporter::new().warning(&format!("Cannot load environment. Err: {}", e));
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Import) {
        Command::Import => cli::import(&cli.config).await,
        Command::List => cli::list(&cli.config).await,
        Command::Export => cli::export(&cli.config).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
