//! The progression/reward state machine
//!
//! `GameStore` owns the persisted [`GameState`] and exposes every mutation
//! the app performs: coin economy, experience/leveling, streak tracking,
//! achievement unlocks, daily quests, lesson completion, and the card
//! collection. Mutations return the [`GameEvent`]s they caused so the CLI
//! can announce level-ups and unlocks.
//!
//! There is no global store: construct one in `main` and pass it by
//! reference. Every mutation write-through persists the whole state under
//! the `game-storage` key; a failed write is logged and otherwise ignored.

pub mod achievements;
pub mod collection;
pub mod economy;
pub mod lessons;
pub mod progression;
pub mod quests;
pub mod state;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::{STATE_KEY, Storage};
use achievements::AchievementDef;

pub use state::{GameState, LessonProgress};

/// Events emitted by store mutations.
#[derive(Debug, Clone)]
pub enum GameEvent {
    AchievementUnlocked {
        achievement: &'static AchievementDef,
        unlocked_at: i64,
    },
    LevelUp {
        new_level: u32,
        bonus_coins: u32,
    },
    StreakExtended {
        days: u32,
    },
    QuestCompleted {
        quest_id: String,
        title: &'static str,
        reward: u32,
    },
}

/// Owner of all mutable progression state.
pub struct GameStore {
    state: GameState,
    storage: Storage,
}

impl GameStore {
    /// Load the stored state, or start fresh when none exists or the blob
    /// is unreadable. Malformed stored data is not a fatal error here; the
    /// worst case is starting over, which matches the app's stakes.
    pub fn load(storage: Storage) -> Self {
        let state = match storage.load::<GameState>(STATE_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => GameState::default(),
            Err(e) => {
                tracing::warn!("Failed to load game state, starting fresh: {e}");
                GameState::default()
            }
        };
        Self { state, storage }
    }

    /// Read access to the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Wipe all progression back to a fresh state and persist the wipe.
    pub fn reset(&mut self) {
        self.state = GameState::default();
        self.persist();
    }

    /// Write-through persistence. Fire-and-forget: failures are logged.
    pub(crate) fn persist(&self) {
        if let Err(e) = self.storage.save(STATE_KEY, &self.state) {
            tracing::warn!("Failed to persist game state: {e}");
        }
    }

    /// Current timestamp in milliseconds.
    pub(crate) fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// Fresh store over a scratch data dir. The TempDir must stay alive for
    /// the duration of the test.
    pub fn fresh_store() -> (GameStore, TempDir) {
        let dir = TempDir::new().expect("tempdir");
        let storage = Storage::open(dir.path()).expect("storage");
        (GameStore::load(storage), dir)
    }
}
