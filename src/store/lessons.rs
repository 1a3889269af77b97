//! Lesson completion orchestrator
//!
//! The single entry point invoked when a quiz session ends. Fans out to
//! progression, quests, and achievements within one logical update.

use chrono::{Local, NaiveDate};

use super::quests::QuestType;
use super::state::LessonProgress;
use super::{GameEvent, GameStore};

/// Experience granted per correct answer.
pub const EXPERIENCE_PER_POINT: u32 = 10;

impl GameStore {
    /// Record a finished quiz session for `lesson_id`.
    ///
    /// Aggregate totals are asymmetric on purpose: repeating a lesson
    /// re-counts its questions and correct answers but not the lesson
    /// itself (or a perfect score). The latest attempt overwrites the
    /// stored progress record; no history is kept.
    pub fn complete_lesson(
        &mut self,
        lesson_id: u32,
        score: u32,
        total_questions: u32,
    ) -> Vec<GameEvent> {
        self.complete_lesson_on(lesson_id, score, total_questions, Local::now().date_naive())
    }

    /// Same as [`Self::complete_lesson`] with an explicit date for the
    /// streak/quest day bucket.
    pub fn complete_lesson_on(
        &mut self,
        lesson_id: u32,
        score: u32,
        total_questions: u32,
        today: NaiveDate,
    ) -> Vec<GameEvent> {
        let first_time = !self
            .state()
            .lesson_progress
            .get(&lesson_id)
            .is_some_and(|p| p.completed);
        let perfect = score == total_questions;
        let now = Self::now_ms();

        let state = self.state_mut();
        state.lesson_progress.insert(
            lesson_id,
            LessonProgress {
                lesson_id,
                completed: true,
                score,
                total_questions,
                completed_at: now,
            },
        );
        if first_time {
            state.total_lessons_completed += 1;
        }
        state.total_questions_answered += total_questions;
        state.total_correct_answers += score;
        if perfect && first_time {
            state.perfect_scores += 1;
        }

        let mut events = Vec::new();
        events.extend(self.add_experience(score * EXPERIENCE_PER_POINT));
        events.extend(self.update_streak_on(today));
        events.extend(self.update_quest_progress(QuestType::Lessons, 1));
        events.extend(self.update_quest_progress(QuestType::Questions, total_questions));
        if perfect {
            events.extend(self.update_quest_progress(QuestType::Perfect, 1));
        }
        events.extend(self.check_counter_achievements());

        self.persist();
        events
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
    fn test_first_perfect_lesson_scenario() {
        let (mut store, _dir) = fresh_store();

        let events = store.complete_lesson_on(1, 5, 5, day("2026-08-27"));

        assert_eq!(store.state().total_lessons_completed, 1);
        assert_eq!(store.state().perfect_scores, 1);
        assert_eq!(store.state().experience, 50);
        assert_eq!(store.state().level, 1);
        // 50 < 100: no level change; no quest set exists yet, so no payout
        assert_eq!(store.state().coins, 1000);
        assert!(store.state().achievements.contains_key("first_lesson"));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::StreakExtended { days: 1 }))
        );
    }

    #[test]
    fn test_repeat_double_counts_questions_but_not_lessons() {
        let (mut store, _dir) = fresh_store();
        let today = day("2026-08-27");

        store.complete_lesson_on(1, 5, 5, today);
        store.complete_lesson_on(1, 4, 5, today);

        assert_eq!(store.state().total_lessons_completed, 1);
        assert_eq!(store.state().total_questions_answered, 10);
        assert_eq!(store.state().total_correct_answers, 9);
        // Perfect score only counts first-time
        assert_eq!(store.state().perfect_scores, 1);

        // Latest attempt overwrote the record
        let record = store.state().lesson_progress.get(&1).unwrap();
        assert_eq!(record.score, 4);
    }

    #[test]
    fn test_repeat_perfect_does_not_increment_perfect_scores() {
        let (mut store, _dir) = fresh_store();
        let today = day("2026-08-27");

        store.complete_lesson_on(2, 3, 3, today);
        store.complete_lesson_on(2, 3, 3, today);
        assert_eq!(store.state().perfect_scores, 1);
    }

    #[test]
    fn test_lesson_advances_todays_quests() {
        let (mut store, _dir) = fresh_store();

        store.generate_daily_quests_on(day("2026-08-27"));
        store.complete_lesson_on(1, 2, 5, day("2026-08-27"));
        let quests = &store.state().daily_quests;
        assert_eq!(quests.len(), 3);
        assert_eq!(
            quests
                .iter()
                .find(|q| q.quest_type == QuestType::Lessons)
                .unwrap()
                .progress,
            1
        );
        assert_eq!(
            quests
                .iter()
                .find(|q| q.quest_type == QuestType::Questions)
                .unwrap()
                .progress,
            5
        );
    }

    #[test]
    fn test_lesson_milestones_unlock_with_at_least_checks() {
        let (mut store, _dir) = fresh_store();
        let today = day("2026-08-27");

        for lesson_id in 1..=10 {
            store.complete_lesson_on(lesson_id, 1, 5, today);
        }
        assert!(store.state().achievements.contains_key("first_lesson"));
        assert!(store.state().achievements.contains_key("lessons_10"));
        assert!(!store.state().achievements.contains_key("lessons_50"));
    }
}
