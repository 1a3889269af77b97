//! End-to-end progression tests over the public API: a real data directory,
//! state persisted and reloaded between store instances.

use chrono::NaiveDate;
use tempfile::TempDir;

use gambit::profile::UserProfile;
use gambit::shop::{self, Pack};
use gambit::storage::Storage;
use gambit::store::GameStore;
use gambit::store::quests::QuestType;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn open_storage(dir: &TempDir) -> Storage {
    Storage::open(dir.path()).unwrap()
}

#[test]
fn test_state_survives_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = GameStore::load(open_storage(&dir));
        store.generate_daily_quests_on(day("2026-08-27"));
        store.complete_lesson_on(1, 5, 5, day("2026-08-27"));
    }

    let store = GameStore::load(open_storage(&dir));
    assert_eq!(store.state().total_lessons_completed, 1);
    assert_eq!(store.state().experience, 50);
    assert_eq!(store.state().streak, 1);
    assert!(store.state().achievements.contains_key("first_lesson"));
    // The perfect quest completed and paid out before the reload
    assert_eq!(store.state().coins, 1000 + 200);
    let perfect = store
        .state()
        .daily_quests
        .iter()
        .find(|q| q.quest_type == QuestType::Perfect)
        .unwrap();
    assert!(perfect.completed);
}

#[test]
fn test_a_full_study_day() {
    let dir = TempDir::new().unwrap();
    let mut store = GameStore::load(open_storage(&dir));
    let today = day("2026-08-27");

    store.generate_daily_quests_on(today);
    store.complete_lesson_on(1, 4, 5, today);
    store.complete_lesson_on(2, 5, 5, today);
    store.complete_lesson_on(3, 3, 5, today);

    // 40 + 50 + 30 experience: one level-up at the second lesson
    assert_eq!(store.state().level, 2);
    assert_eq!(store.state().experience, 20);

    // Quests: 3 lessons (100), 10+ questions (150), one perfect (200),
    // plus the level 2 bonus of 100 coins
    assert_eq!(store.state().coins, 1000 + 100 + 150 + 200 + 100);
    assert!(store.state().daily_quests.iter().all(|q| q.completed));
    assert_eq!(store.state().streak, 1);
    assert_eq!(store.state().total_questions_answered, 15);
    assert_eq!(store.state().total_correct_answers, 12);
}

#[test]
fn test_pack_purchase_grows_the_collection() {
    let dir = TempDir::new().unwrap();
    let mut store = GameStore::load(open_storage(&dir));
    let mut rng = rand::thread_rng();

    let starter = Pack::get(1).unwrap(); // 100 coins, 3 cards
    let cards = shop::open_pack(&mut store, starter, &mut rng).unwrap();

    assert_eq!(cards.len(), 3);
    assert_eq!(store.state().coins, 900);
    assert_eq!(store.state().cards.len(), 3);

    let premium = Pack::get(4).unwrap(); // 800 coins, 6 cards
    shop::open_pack(&mut store, premium, &mut rng).unwrap();
    assert_eq!(store.state().coins, 100);
    assert_eq!(store.state().cards.len(), 9);

    // A second premium pack is not affordable; the collection is untouched
    assert!(shop::open_pack(&mut store, premium, &mut rng).is_err());
    assert_eq!(store.state().cards.len(), 9);
}

#[test]
fn test_card_removal_by_id() {
    let dir = TempDir::new().unwrap();
    let mut store = GameStore::load(open_storage(&dir));
    let mut rng = rand::thread_rng();

    let pack = Pack::get(1).unwrap();
    shop::open_pack(&mut store, pack, &mut rng).unwrap();
    let id = store.state().cards[0].id;

    store.remove_card(id);
    assert_eq!(store.state().cards.len(), 2);
    assert!(store.state().cards.iter().all(|c| c.id != id));
}

#[test]
fn test_profile_gate_and_registration() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);

    assert!(UserProfile::load(&storage).unwrap().is_none());

    let profile = UserProfile::register("Alice", 9).unwrap();
    profile.save(&storage).unwrap();

    let loaded = UserProfile::load(&storage).unwrap().unwrap();
    assert_eq!(loaded.name, "Alice");
    assert_eq!(loaded.age, 9);
    assert!(loaded.registered);

    // Invalid registrations are rejected outright
    assert!(UserProfile::register("", 9).is_err());
    assert!(UserProfile::register("Bob", 3).is_err());
    assert!(UserProfile::register("Carol", 150).is_err());
}

#[test]
fn test_reset_wipes_progress_but_not_profile() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    UserProfile::register("Dana", 12).unwrap().save(&storage).unwrap();

    let mut store = GameStore::load(open_storage(&dir));
    store.complete_lesson_on(1, 5, 5, day("2026-08-27"));
    store.add_coins(5000);
    store.reset();

    // The wipe is persisted
    let store = GameStore::load(open_storage(&dir));
    assert_eq!(store.state().coins, 1000);
    assert_eq!(store.state().level, 1);
    assert!(store.state().achievements.is_empty());
    assert!(store.state().cards.is_empty());

    let profile = UserProfile::load(&open_storage(&dir)).unwrap();
    assert!(profile.is_some());
}
