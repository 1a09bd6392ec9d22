//! `metashop` CLI - shop editing console.
//!
//! # Usage
//!
//! ```bash
//! # List shops from ./shops.yml
//! metashop list
//!
//! # Print the slots of one shop without color codes
//! metashop --plain show weapons
//!
//! # Edit shops interactively as a player
//! metashop console --player 5f0c3a52-8d1e-4a43-9c1b-2b1f0e6f4a11
//!
//! # Run a file of console lines
//! metashop run setup.txt
//! ```
//!
//! # Commands
//!
//! - `list` - List every shop
//! - `show` - Print one shop's slots
//! - `console` - Interactive `/metashop` console
//! - `run` - Run console lines from a file

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use metashop_core::command::Player;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod commands;
mod config;
mod render;

use commands::console::Console;
use config::CliConfig;
use render::ColorMode;

#[derive(Parser)]
#[command(name = "metashop")]
#[command(author, version, about = "MetaShop shop editing console")]
struct Cli {
    /// Shop definitions file (overrides `METASHOP_SHOPS_FILE`)
    #[arg(long, global = true)]
    shops: Option<PathBuf>,

    /// Message overrides file (overrides `METASHOP_LANGUAGE_FILE`)
    #[arg(long, global = true)]
    language: Option<PathBuf>,

    /// Strip chat color codes from output
    #[arg(long, global = true)]
    plain: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every shop
    List,
    /// Print one shop's slots
    Show {
        /// Shop id (case-insensitive)
        shop: String,
    },
    /// Interactive `/metashop` console
    Console {
        #[command(flatten)]
        player: PlayerArgs,
    },
    /// Run console lines from a file
    Run {
        /// Script with one console line per line
        script: PathBuf,

        #[command(flatten)]
        player: PlayerArgs,
    },
}

#[derive(clap::Args)]
struct PlayerArgs {
    /// Player id to act as (random when omitted)
    #[arg(long)]
    player: Option<Uuid>,

    /// Player name to act as
    #[arg(long, default_value = "Steve")]
    name: String,
}

impl PlayerArgs {
    fn into_player(self) -> Player {
        Player::new(self.player.unwrap_or_else(Uuid::new_v4), self.name)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::resolve(cli.shops, cli.language);
    let mode = if cli.plain {
        ColorMode::Plain
    } else {
        ColorMode::Raw
    };

    let shops = config::load_shops(&config.shops_file).await?;
    let messages = config::load_messages(config.language_file.as_deref()).await?;

    match cli.command {
        Commands::List => {
            print_lines(&commands::shops::list(&shops, &messages, mode)).await?;
        }
        Commands::Show { shop } => {
            let lines = commands::shops::show(&shops, &messages, &shop, mode)?;
            print_lines(&lines).await?;
        }
        Commands::Console { player } => {
            let console = Console::new(shops, messages, player.into_player(), mode);
            commands::console::interactive(console).await?;
        }
        Commands::Run { script, player } => {
            let console = Console::new(shops, messages, player.into_player(), mode);
            commands::console::script(console, &script).await?;
        }
    }
    Ok(())
}

async fn print_lines(lines: &[String]) -> Result<(), std::io::Error> {
    commands::console::write_lines(&mut tokio::io::stdout(), lines).await
}
