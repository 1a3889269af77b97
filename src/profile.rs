//! User profile registration
//!
//! A single local profile gates access to the rest of the app. It is read
//! once at startup and written exactly once at registration.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::storage::{PROFILE_KEY, Storage};

/// Minimum accepted age at registration.
pub const MIN_AGE: u32 = 5;

/// Maximum accepted age at registration.
pub const MAX_AGE: u32 = 120;

/// Registered user profile, stored under the `user-profile` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub registered: bool,
}

impl UserProfile {
    /// Validate registration input and build a profile.
    pub fn register(name: &str, age: u32) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            bail!("name must not be empty");
        }
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            bail!("age must be between {MIN_AGE} and {MAX_AGE}");
        }
        Ok(Self {
            name: name.to_string(),
            age,
            registered: true,
        })
    }

    /// Load the registered profile, if any. A stored profile with
    /// `registered: false` does not pass the gate.
    pub fn load(storage: &Storage) -> Result<Option<Self>> {
        let profile: Option<Self> = storage.load(PROFILE_KEY)?;
        Ok(profile.filter(|p| p.registered))
    }

    /// Persist the profile under the fixed profile key.
    pub fn save(&self, storage: &Storage) -> Result<()> {
        storage.save(PROFILE_KEY, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_register_validates_input() {
        assert!(UserProfile::register("", 20).is_err());
        assert!(UserProfile::register("   ", 20).is_err());
        assert!(UserProfile::register("Anna", 4).is_err());
        assert!(UserProfile::register("Anna", 121).is_err());

        let profile = UserProfile::register("  Anna ", 12).unwrap();
        assert_eq!(profile.name, "Anna");
        assert!(profile.registered);
    }

    #[test]
    fn test_profile_gates_until_registered() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path()).unwrap();

        assert!(UserProfile::load(&storage).unwrap().is_none());

        let profile = UserProfile::register("Boris", 30).unwrap();
        profile.save(&storage).unwrap();

        let loaded = UserProfile::load(&storage).unwrap().unwrap();
        assert_eq!(loaded.name, "Boris");
        assert_eq!(loaded.age, 30);
    }
}
