//! Profile command implementation

use anyhow::Result;

use gambit::profile::UserProfile;
use gambit::store::GameStore;

/// Show the player's progression overview.
pub fn profile_command(profile: &UserProfile, store: &GameStore) -> Result<()> {
    let state = store.state();

    println!("{} (age {})", profile.name, profile.age);
    println!();
    println!(
        "  Level {}  -  {}/{} XP",
        state.level,
        state.experience,
        state.experience_for_next_level()
    );
    println!("  Coins: {}", state.coins);
    match state.streak {
        0 => println!("  Streak: none yet"),
        days => println!("  Streak: {days} day(s)"),
    }
    println!();
    println!("  Lessons completed:  {}", state.total_lessons_completed);
    println!("  Questions answered: {}", state.total_questions_answered);
    println!("  Correct answers:    {}", state.total_correct_answers);
    println!("  Perfect scores:     {}", state.perfect_scores);
    println!("  Cards owned:        {}", state.cards.len());
    println!(
        "  Achievements:       {}/{}",
        state.achievements.len(),
        gambit::store::achievements::ACHIEVEMENTS.len()
    );
    if !state.daily_quests.is_empty() {
        let done = state.daily_quests.iter().filter(|q| q.completed).count();
        println!(
            "  Today's quests:     {done}/{} done",
            state.daily_quests.len()
        );
    }

    Ok(())
}
