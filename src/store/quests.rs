//! Daily quests
//!
//! Three quests are generated per calendar day, tagged with the day in
//! their ids. The set is regenerated wholesale whenever the stored list is
//! empty or its date tag no longer matches today — unclaimed progress from
//! a previous day is deliberately discarded. Progress is clamped at the
//! target and the coin reward is paid exactly once, at the moment of
//! crossing.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::progression::day_string;
use super::{GameEvent, GameStore};

/// What kind of activity advances a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Lessons,
    Questions,
    Streak,
    Perfect,
}

impl QuestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lessons => "lessons",
            Self::Questions => "questions",
            Self::Streak => "streak",
            Self::Perfect => "perfect",
        }
    }
}

/// A single date-scoped quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuest {
    /// `{YYYY-MM-DD}-{type}`, unique within a day.
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Never exceeds `target`.
    pub progress: u32,
    pub target: u32,
    /// Coin payout on completion.
    pub reward: u32,
    pub completed: bool,
    pub quest_type: QuestType,
}

/// Blueprint for one of the day's quests.
struct QuestTemplate {
    quest_type: QuestType,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    target: u32,
    reward: u32,
}

/// The fixed daily set.
static DAILY_QUESTS: &[QuestTemplate] = &[
    QuestTemplate {
        quest_type: QuestType::Lessons,
        title: "Finish 3 lessons",
        description: "Complete 3 lessons today",
        icon: "📖",
        target: 3,
        reward: 100,
    },
    QuestTemplate {
        quest_type: QuestType::Questions,
        title: "Answer 10 questions",
        description: "Answer 10 quiz questions today",
        icon: "❓",
        target: 10,
        reward: 150,
    },
    QuestTemplate {
        quest_type: QuestType::Perfect,
        title: "Perfect result",
        description: "Score 100% in any lesson",
        icon: "💯",
        target: 1,
        reward: 200,
    },
];

impl GameStore {
    /// Regenerate the daily quest set for today if needed.
    pub fn generate_daily_quests(&mut self) {
        self.generate_daily_quests_on(Local::now().date_naive());
    }

    /// Regenerate the daily quest set as of `today`.
    ///
    /// Idempotent within a day: when the current set already carries
    /// today's date tag, nothing changes (so no progress is lost). On a new
    /// day the entire set is replaced with fresh zero-progress quests.
    pub fn generate_daily_quests_on(&mut self, today: NaiveDate) {
        let tag = day_string(today);

        let current_is_todays = self
            .state()
            .daily_quests
            .first()
            .is_some_and(|q| q.id.starts_with(&tag));
        if current_is_todays {
            return;
        }

        let quests = DAILY_QUESTS
            .iter()
            .map(|t| DailyQuest {
                id: format!("{}-{}", tag, t.quest_type.as_str()),
                title: t.title.to_string(),
                description: t.description.to_string(),
                icon: t.icon.to_string(),
                progress: 0,
                target: t.target,
                reward: t.reward,
                completed: false,
                quest_type: t.quest_type,
            })
            .collect();

        self.state_mut().daily_quests = quests;
        self.persist();
    }

    /// Advance every not-yet-completed quest of the given type by `amount`.
    ///
    /// Crossing the target clamps progress, marks the quest completed, and
    /// credits its reward through the economy (which may in turn unlock the
    /// balance achievement) — exactly once.
    pub fn update_quest_progress(&mut self, quest_type: QuestType, amount: u32) -> Vec<GameEvent> {
        let mut completed: Vec<(String, u32)> = Vec::new();

        for quest in &mut self.state_mut().daily_quests {
            if quest.quest_type != quest_type || quest.completed {
                continue;
            }
            let new_progress = quest.progress + amount;
            if new_progress >= quest.target {
                quest.progress = quest.target;
                quest.completed = true;
                completed.push((quest.id.clone(), quest.reward));
            } else {
                quest.progress = new_progress;
            }
        }

        let title = DAILY_QUESTS
            .iter()
            .find(|t| t.quest_type == quest_type)
            .map(|t| t.title)
            .unwrap_or("");

        let mut events = Vec::new();
        for (quest_id, reward) in completed {
            events.extend(self.add_coins(reward));
            events.push(GameEvent::QuestCompleted {
                quest_id,
                title,
                reward,
            });
        }

        self.persist();
        events
    }

    /// Manual claim affordance from the quest panel. Marks the quest
    /// completed without paying coins; the reward is only ever paid by the
    /// progress-based completion path.
    pub fn complete_daily_quest(&mut self, quest_id: &str) {
        if let Some(quest) = self
            .state_mut()
            .daily_quests
            .iter_mut()
            .find(|q| q.id == quest_id)
        {
            quest.completed = true;
        }
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::fresh_store;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_generation_is_idempotent_within_a_day() {
        let (mut store, _dir) = fresh_store();
        let today = day("2026-08-27");

        store.generate_daily_quests_on(today);
        assert_eq!(store.state().daily_quests.len(), 3);
        assert_eq!(store.state().daily_quests[0].id, "2026-08-27-lessons");

        store.update_quest_progress(QuestType::Lessons, 1);
        store.generate_daily_quests_on(today);
        // Progress survives the second call
        assert_eq!(store.state().daily_quests[0].progress, 1);
    }

    #[test]
    fn test_new_day_replaces_the_whole_set() {
        let (mut store, _dir) = fresh_store();

        store.generate_daily_quests_on(day("2026-08-27"));
        store.update_quest_progress(QuestType::Questions, 7);

        store.generate_daily_quests_on(day("2026-08-28"));
        assert_eq!(store.state().daily_quests.len(), 3);
        for quest in &store.state().daily_quests {
            assert!(quest.id.starts_with("2026-08-28"));
            assert_eq!(quest.progress, 0);
            assert!(!quest.completed);
        }
    }

    #[test]
    fn test_reward_paid_exactly_once_on_crossing() {
        let (mut store, _dir) = fresh_store();
        store.generate_daily_quests_on(day("2026-08-27"));
        let coins_before = store.state().coins;

        store.update_quest_progress(QuestType::Lessons, 2);
        assert_eq!(store.state().coins, coins_before);

        let events = store.update_quest_progress(QuestType::Lessons, 1);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::QuestCompleted { reward: 100, .. }))
        );
        assert_eq!(store.state().coins, coins_before + 100);

        // Completed quest is inert
        let events = store.update_quest_progress(QuestType::Lessons, 1);
        assert!(events.is_empty());
        assert_eq!(store.state().coins, coins_before + 100);
        assert_eq!(store.state().daily_quests[0].progress, 3);
    }

    #[test]
    fn test_progress_clamped_at_target() {
        let (mut store, _dir) = fresh_store();
        store.generate_daily_quests_on(day("2026-08-27"));

        store.update_quest_progress(QuestType::Questions, 25);
        let quest = store
            .state()
            .daily_quests
            .iter()
            .find(|q| q.quest_type == QuestType::Questions)
            .unwrap();
        assert_eq!(quest.progress, quest.target);
        assert!(quest.completed);
    }

    #[test]
    fn test_manual_claim_pays_nothing() {
        let (mut store, _dir) = fresh_store();
        store.generate_daily_quests_on(day("2026-08-27"));
        let coins_before = store.state().coins;

        let id = store.state().daily_quests[0].id.clone();
        store.complete_daily_quest(&id);

        assert!(store.state().daily_quests[0].completed);
        assert_eq!(store.state().coins, coins_before);
    }
}
