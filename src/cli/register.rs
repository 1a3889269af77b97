//! Register command implementation

use anyhow::Result;

use gambit::profile::UserProfile;
use gambit::storage::Storage;

/// Create and persist the local profile.
pub fn register_command(storage: &Storage, name: &str, age: u32) -> Result<()> {
    if UserProfile::load(storage)?.is_some() {
        println!("A profile is already registered. Delete the data directory to start over.");
        return Ok(());
    }

    let profile = UserProfile::register(name, age)?;
    profile.save(storage)?;

    println!("Welcome, {}! Your profile is ready.", profile.name);
    println!("Start with `gambit lesson list` or check `gambit quests`.");
    Ok(())
}
