//! Reset command: wipe all progression

use anyhow::Result;

use gambit::store::GameStore;

use super::read_line;

pub fn reset_command(store: &mut GameStore, force: bool) -> Result<()> {
    if !force {
        let answer = read_line("This deletes all progress (coins, cards, achievements). Type `yes` to confirm: ")?;
        if answer != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.reset();
    println!("Progress wiped. The profile stays registered.");
    Ok(())
}
