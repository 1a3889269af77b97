//! Achievements command implementation

use anyhow::Result;
use chrono::{Local, TimeZone};

use gambit::store::GameStore;
use gambit::store::achievements::ACHIEVEMENTS;

/// Show the full achievement board with live progress.
pub fn achievements_command(store: &GameStore) -> Result<()> {
    println!("Achievements:\n");

    for def in ACHIEVEMENTS {
        match store.achievement_unlocked_at(def.id) {
            Some(at) => {
                let when = Local
                    .timestamp_millis_opt(at)
                    .single()
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                println!("  {} {} - unlocked {}", def.icon, def.title, when);
            }
            None => {
                let progress = store.achievement_progress(def.id);
                println!(
                    "  {} {} - {}/{} ({})",
                    def.icon, def.title, progress, def.target, def.description
                );
            }
        }
    }
    Ok(())
}
