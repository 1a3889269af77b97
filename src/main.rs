use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gambit::profile::UserProfile;
use gambit::storage::Storage;
use gambit::store::GameStore;

mod cli;

#[derive(Parser)]
#[command(name = "gambit")]
#[command(about = "Gamified chess education - lessons, card packs, bot matches, and daily quests")]
#[command(version)]
struct Cli {
    /// Data directory (defaults to ~/.gambit)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the local profile (required before anything else)
    Register {
        /// Display name
        name: String,
        /// Age in years
        age: u32,
    },

    /// Show player stats: coins, level, streak, totals
    Profile,

    /// List lessons or take a quiz
    Lesson {
        #[command(subcommand)]
        command: cli::lesson::LessonCommand,
    },

    /// Show today's quests
    Quests,

    /// Show the achievement board
    Achievements,

    /// Browse packs or buy one
    Shop {
        #[command(subcommand)]
        command: cli::shop::ShopCommand,
    },

    /// Manage the card collection
    Cards {
        #[command(subcommand)]
        command: cli::cards::CardsCommand,
    },

    /// Play a chess match against a bot
    Play {
        /// Bot id (see the list printed without this flag)
        #[arg(long)]
        bot: Option<u32>,
    },

    /// Chat with the virtual coach
    Chat,

    /// Delete all progression state (profile stays registered)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(Storage::default_dir);
    let storage = Storage::open(&data_dir)?;

    if let Commands::Register { name, age } = &cli.command {
        return cli::register::register_command(&storage, name, *age);
    }

    // Every other command is gated behind registration
    let Some(profile) = UserProfile::load(&storage)? else {
        bail!("no profile registered yet - run `gambit register <name> <age>` first");
    };

    let mut store = GameStore::load(storage);

    match cli.command {
        Commands::Register { .. } => unreachable!("handled above"),
        Commands::Profile => cli::profile::profile_command(&profile, &store),
        Commands::Lesson { command } => cli::lesson::lesson_command(&mut store, command),
        Commands::Quests => cli::quests::quests_command(&mut store),
        Commands::Achievements => cli::achievements::achievements_command(&store),
        Commands::Shop { command } => cli::shop::shop_command(&mut store, command),
        Commands::Cards { command } => cli::cards::cards_command(&mut store, command),
        Commands::Play { bot } => cli::play::play_command(&mut store, bot),
        Commands::Chat => cli::chat::chat_command(&profile, &data_dir),
        Commands::Reset { force } => cli::reset::reset_command(&mut store, force),
    }
}
