//! Experience, leveling, and daily streak tracking
//!
//! Leveling curve: level N requires `N * 100` experience to advance.
//! Experience is renormalized below the threshold on every grant, so the
//! stored value never reaches it. Streaks are day-granular: one advance per
//! calendar day, reset to 1 after a gap of two or more days.

use chrono::{Days, Local, NaiveDate};

use super::achievements::AchievementId;
use super::quests::QuestType;
use super::{GameEvent, GameStore};

/// Coin bonus granted on reaching a level: `new_level * 50`.
pub const LEVEL_UP_COIN_BONUS: u32 = 50;

/// Format a date the way it is stored in `last_study_date` and quest ids.
pub fn day_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl GameStore {
    /// Grant experience. Processes at most one level-up per call: a grant
    /// large enough to cross two thresholds leaves the remainder above the
    /// next threshold until a later call renormalizes it.
    pub fn add_experience(&mut self, amount: u32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let new_exp = self.state().experience + amount;
        let threshold = self.state().experience_for_next_level();

        if new_exp >= threshold {
            let new_level = self.state().level + 1;
            let bonus = new_level * LEVEL_UP_COIN_BONUS;

            let state = self.state_mut();
            state.level = new_level;
            state.experience = new_exp - threshold;

            events.push(GameEvent::LevelUp {
                new_level,
                bonus_coins: bonus,
            });
            events.extend(self.add_coins(bonus));

            if new_level >= 10 {
                events.extend(self.unlock_achievement(AchievementId::Level10));
            }
        } else {
            self.state_mut().experience = new_exp;
        }

        self.persist();
        events
    }

    /// Advance the daily streak for today. See [`Self::update_streak_on`].
    pub fn update_streak(&mut self) -> Vec<GameEvent> {
        self.update_streak_on(Local::now().date_naive())
    }

    /// Advance the daily streak as of `today`.
    ///
    /// No-op when today was already counted. Consecutive to the last study
    /// day (or first-ever use) extends the streak by one and bumps the
    /// streak quest; a gap of two or more days resets the streak to 1.
    pub fn update_streak_on(&mut self, today: NaiveDate) -> Vec<GameEvent> {
        let today_str = day_string(today);
        if self.state().last_study_date.as_deref() == Some(today_str.as_str()) {
            return Vec::new();
        }

        let yesterday = today
            .checked_sub_days(Days::new(1))
            .map(day_string);

        let mut events = Vec::new();
        let continues = match &self.state().last_study_date {
            None => true,
            Some(last) => Some(last.clone()) == yesterday,
        };

        if continues {
            let new_streak = self.state().streak + 1;
            let state = self.state_mut();
            state.streak = new_streak;
            state.last_study_date = Some(today_str);

            events.push(GameEvent::StreakExtended { days: new_streak });
            events.extend(self.update_quest_progress(QuestType::Streak, 1));

            if new_streak >= 7 {
                events.extend(self.unlock_achievement(AchievementId::Streak7));
            }
            if new_streak >= 30 {
                events.extend(self.unlock_achievement(AchievementId::Streak30));
            }
        } else {
            let state = self.state_mut();
            state.streak = 1;
            state.last_study_date = Some(today_str);
        }

        self.persist();
        events
    }
}
