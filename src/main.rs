mod config;
mod error;
mod game;
mod setup;
mod store;
mod tui;

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    error::{Result, StoreError},
    game::themes,
    store::CardStore,
};

#[derive(Parser)]
#[command(name = "spectral-mind")]
#[command(about = "Pass-and-play party game: read your team's mind on a spectrum")]
struct Cli {
    /// Directory for settings, custom cards and the log file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the game in the terminal
    Play,
    /// List the built-in themes, or the cards of one theme
    Themes {
        /// Theme to show (case-insensitive)
        name: Option<String>,
    },
    /// Manage your own spectrum cards
    Cards {
        #[command(subcommand)]
        action: CardsCommand,
    },
}

#[derive(Subcommand)]
enum CardsCommand {
    /// Print the custom cards with their indices
    List,
    /// Add a card with two opposing labels
    Add { left: String, right: String },
    /// Remove the card at INDEX
    Remove { index: usize },
    /// Delete every custom card
    Clear {
        /// Required: clearing cannot be undone
        #[arg(long)]
        yes: bool,
    },
}

fn init_tracing(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(config::LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spectral_mind=info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn print_themes(name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        for theme in themes::built_in() {
            println!("{:<28}{} cards", theme.name, theme.len());
        }
        return Ok(());
    };
    let theme = themes::find(name).ok_or_else(|| StoreError::NoSuchTheme(name.to_string()))?;
    for card in &theme.cards {
        println!("{} <-> {}", card.left, card.right);
    }
    Ok(())
}

fn run_cards(store: &CardStore, action: CardsCommand) -> Result<()> {
    match action {
        CardsCommand::List => {
            let cards = store.load();
            if cards.is_empty() {
                println!("No custom cards in {}", store.path().display());
            }
            for (index, card) in cards.iter().enumerate() {
                println!("{index}: {} <-> {}", card.left, card.right);
            }
        }
        CardsCommand::Add { left, right } => {
            let cards = store.add(&left, &right)?;
            println!("Added card {} ({} total)", cards.len() - 1, cards.len());
        }
        CardsCommand::Remove { index } => {
            let cards = store.remove(index)?;
            println!("Removed card {index} ({} left)", cards.len());
        }
        CardsCommand::Clear { yes: false } => {
            return Err(StoreError::ClearNotConfirmed.into());
        }
        CardsCommand::Clear { yes: true } => {
            store.clear()?;
            println!("Cleared all custom cards");
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    init_tracing(&data_dir)?;

    match cli.command {
        Commands::Play => tui::run(&data_dir).await,
        Commands::Themes { name } => print_themes(name.as_deref()),
        Commands::Cards { action } => run_cards(&CardStore::new(&data_dir), action),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
