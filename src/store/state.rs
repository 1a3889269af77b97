//! Persisted game state
//!
//! The whole struct is serialized as one blob under the `game-storage` key
//! and rewritten on every mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::collection::PlayerCard;
use crate::store::quests::DailyQuest;

/// Starting coin balance for a fresh profile.
pub const STARTING_COINS: u32 = 1000;

/// Record of the latest attempt at a lesson. Repeats overwrite; no history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonProgress {
    pub lesson_id: u32,
    pub completed: bool,
    pub score: u32,
    pub total_questions: u32,
    /// Unix timestamp in milliseconds.
    pub completed_at: i64,
}

/// All mutable progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub coins: u32,
    pub level: u32,
    /// Always kept below `level * 100`.
    pub experience: u32,
    pub streak: u32,
    /// Day of the last counted study session, `YYYY-MM-DD`. `None` means
    /// the user has never completed a lesson.
    pub last_study_date: Option<String>,
    pub lesson_progress: BTreeMap<u32, LessonProgress>,
    /// Unlocked achievement ids mapped to their unlock timestamp (ms).
    pub achievements: BTreeMap<String, i64>,
    pub daily_quests: Vec<DailyQuest>,
    pub cards: Vec<PlayerCard>,
    pub total_lessons_completed: u32,
    pub total_questions_answered: u32,
    pub total_correct_answers: u32,
    pub perfect_scores: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            level: 1,
            experience: 0,
            streak: 0,
            last_study_date: None,
            lesson_progress: BTreeMap::new(),
            achievements: BTreeMap::new(),
            daily_quests: Vec::new(),
            cards: Vec::new(),
            total_lessons_completed: 0,
            total_questions_answered: 0,
            total_correct_answers: 0,
            perfect_scores: 0,
        }
    }
}

impl GameState {
    /// Experience required to advance past the current level.
    pub fn experience_for_next_level(&self) -> u32 {
        self.level * 100
    }
}
