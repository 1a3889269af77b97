//! CLI command implementations

pub mod achievements;
pub mod cards;
pub mod chat;
pub mod lesson;
pub mod play;
pub mod profile;
pub mod quests;
pub mod register;
pub mod reset;
pub mod shop;

use std::io::Write;

use anyhow::{Context, Result};
use gambit::store::GameEvent;

/// Print a prompt and read one trimmed line from stdin.
pub(crate) fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Announce the events a store mutation produced.
pub(crate) fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::AchievementUnlocked { achievement, .. } => {
                println!(
                    "{} Achievement unlocked: {} - {}",
                    achievement.icon, achievement.title, achievement.description
                );
            }
            GameEvent::LevelUp {
                new_level,
                bonus_coins,
            } => {
                println!("⭐ Level up! You are now level {new_level} (+{bonus_coins} coins)");
            }
            GameEvent::StreakExtended { days } => {
                println!("🔥 Streak: {days} day(s) in a row");
            }
            GameEvent::QuestCompleted { title, reward, .. } => {
                println!("✅ Quest complete: {title} (+{reward} coins)");
            }
        }
    }
}
