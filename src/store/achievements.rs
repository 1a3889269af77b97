//! Achievement catalog and unlock logic
//!
//! All ten achievements are defined here with their unlock thresholds.
//! Unlocking is a one-way, idempotent transition; every threshold is
//! checked with `>=` so a counter that jumps past its target still counts.

use super::{GameEvent, GameStore};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstLesson,
    Lessons10,
    Lessons50,
    Perfect5,
    Streak7,
    Streak30,
    Questions100,
    Questions500,
    Rich,
    Level10,
}

impl AchievementId {
    /// Get the string ID used in the persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLesson => "first_lesson",
            Self::Lessons10 => "lessons_10",
            Self::Lessons50 => "lessons_50",
            Self::Perfect5 => "perfect_5",
            Self::Streak7 => "streak_7",
            Self::Streak30 => "streak_30",
            Self::Questions100 => "questions_100",
            Self::Questions500 => "questions_500",
            Self::Rich => "rich",
            Self::Level10 => "level_10",
        }
    }

    /// Parse from a stored string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_lesson" => Some(Self::FirstLesson),
            "lessons_10" => Some(Self::Lessons10),
            "lessons_50" => Some(Self::Lessons50),
            "perfect_5" => Some(Self::Perfect5),
            "streak_7" => Some(Self::Streak7),
            "streak_30" => Some(Self::Streak30),
            "questions_100" => Some(Self::Questions100),
            "questions_500" => Some(Self::Questions500),
            "rich" => Some(Self::Rich),
            "level_10" => Some(Self::Level10),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstLesson,
            Self::Lessons10,
            Self::Lessons50,
            Self::Perfect5,
            Self::Streak7,
            Self::Streak30,
            Self::Questions100,
            Self::Questions500,
            Self::Rich,
            Self::Level10,
        ]
    }
}

/// Achievement definition with all metadata
#[derive(Debug)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub target: u32,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstLesson,
        title: "First Steps",
        description: "Complete your first lesson",
        icon: "🎓",
        target: 1,
    },
    AchievementDef {
        id: AchievementId::Lessons10,
        title: "Scholar",
        description: "Complete 10 lessons",
        icon: "📚",
        target: 10,
    },
    AchievementDef {
        id: AchievementId::Lessons50,
        title: "Erudite",
        description: "Complete 50 lessons",
        icon: "🧠",
        target: 50,
    },
    AchievementDef {
        id: AchievementId::Perfect5,
        title: "Perfectionist",
        description: "Score 5 perfect results",
        icon: "💯",
        target: 5,
    },
    AchievementDef {
        id: AchievementId::Streak7,
        title: "Week of Knowledge",
        description: "Study 7 days in a row",
        icon: "🔥",
        target: 7,
    },
    AchievementDef {
        id: AchievementId::Streak30,
        title: "Month of Power",
        description: "Study 30 days in a row",
        icon: "⚡",
        target: 30,
    },
    AchievementDef {
        id: AchievementId::Questions100,
        title: "Hundred Questions",
        description: "Answer 100 questions",
        icon: "❓",
        target: 100,
    },
    AchievementDef {
        id: AchievementId::Questions500,
        title: "Guru",
        description: "Answer 500 questions",
        icon: "🎯",
        target: 500,
    },
    AchievementDef {
        id: AchievementId::Rich,
        title: "Rich",
        description: "Hold 10000 coins",
        icon: "💰",
        target: 10_000,
    },
    AchievementDef {
        id: AchievementId::Level10,
        title: "Level 10",
        description: "Reach level 10",
        icon: "⭐",
        target: 10,
    },
];

impl AchievementDef {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static AchievementDef {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }
}

impl GameStore {
    /// Unlock an achievement, recording the unlock time. Idempotent: an
    /// already-unlocked achievement produces no event.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> Option<GameEvent> {
        let key = id.as_str();
        if self.state().achievements.contains_key(key) {
            return None;
        }
        let now = Self::now_ms();
        self.state_mut().achievements.insert(key.to_string(), now);
        self.persist();
        Some(GameEvent::AchievementUnlocked {
            achievement: AchievementDef::get(id),
            unlocked_at: now,
        })
    }

    /// Sweep the counter-based achievements against the current totals.
    /// Called from the lesson completion path after counters are updated.
    pub(crate) fn check_counter_achievements(&mut self) -> Vec<GameEvent> {
        let lessons = self.state().total_lessons_completed;
        let questions = self.state().total_questions_answered;
        let perfect = self.state().perfect_scores;

        let mut events = Vec::new();

        let lesson_milestones = [
            (1, AchievementId::FirstLesson),
            (10, AchievementId::Lessons10),
            (50, AchievementId::Lessons50),
        ];
        for (threshold, id) in lesson_milestones {
            if lessons >= threshold {
                events.extend(self.unlock_achievement(id));
            }
        }

        if perfect >= 5 {
            events.extend(self.unlock_achievement(AchievementId::Perfect5));
        }

        let question_milestones = [
            (100, AchievementId::Questions100),
            (500, AchievementId::Questions500),
        ];
        for (threshold, id) in question_milestones {
            if questions >= threshold {
                events.extend(self.unlock_achievement(id));
            }
        }

        events
    }

    /// Live progress of an achievement, clamped to its target.
    pub fn achievement_progress(&self, id: AchievementId) -> u32 {
        let state = self.state();
        let value = match id {
            AchievementId::FirstLesson | AchievementId::Lessons10 | AchievementId::Lessons50 => {
                state.total_lessons_completed
            }
            AchievementId::Perfect5 => state.perfect_scores,
            AchievementId::Streak7 | AchievementId::Streak30 => state.streak,
            AchievementId::Questions100 | AchievementId::Questions500 => {
                state.total_questions_answered
            }
            AchievementId::Rich => state.coins,
            AchievementId::Level10 => state.level,
        };
        value.min(AchievementDef::get(id).target)
    }

    /// Unlock timestamp for an achievement, when it has been unlocked.
    pub fn achievement_unlocked_at(&self, id: AchievementId) -> Option<i64> {
        self.state().achievements.get(id.as_str()).copied()
    }
}
