//! Quests command implementation

use anyhow::Result;

use gambit::store::GameStore;

/// Show today's quest set, regenerating it when the day has rolled over.
pub fn quests_command(store: &mut GameStore) -> Result<()> {
    store.generate_daily_quests();

    println!("Today's quests:\n");
    for quest in &store.state().daily_quests {
        let status = if quest.completed {
            "done".to_string()
        } else {
            format!("{}/{}", quest.progress, quest.target)
        };
        println!(
            "  {} {} [{}] - {} coins",
            quest.icon, quest.title, status, quest.reward
        );
        println!("     {}", quest.description);
    }
    Ok(())
}
