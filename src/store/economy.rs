//! Coin economy
//!
//! Everything that earns coins funnels through `add_coins` so the balance
//! achievement is checked in one place. `spend_coins` is the only guarded
//! mutation in the store.

use super::achievements::AchievementId;
use super::{GameEvent, GameStore};

/// Balance at which the `rich` achievement unlocks.
pub const RICH_THRESHOLD: u32 = 10_000;

impl GameStore {
    /// Credit coins unconditionally. Callers are responsible for amounts.
    pub fn add_coins(&mut self, amount: u32) -> Vec<GameEvent> {
        self.state_mut().coins += amount;

        let mut events = Vec::new();
        if self.state().coins >= RICH_THRESHOLD {
            events.extend(self.unlock_achievement(AchievementId::Rich));
        }

        self.persist();
        events
    }

    /// Debit coins. Returns `false` and leaves the balance untouched when
    /// funds are insufficient.
    pub fn spend_coins(&mut self, amount: u32) -> bool {
        if self.state().coins < amount {
            return false;
        }
        self.state_mut().coins -= amount;
        self.persist();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::fresh_store;

    #[test]
    fn test_spend_coins_guards_balance() {
        let (mut store, _dir) = fresh_store();
        assert_eq!(store.state().coins, 1000);

        assert!(!store.spend_coins(1001));
        assert_eq!(store.state().coins, 1000);

        assert!(store.spend_coins(300));
        assert_eq!(store.state().coins, 700);
    }

    #[test]
    fn test_add_coins_unlocks_rich_once() {
        let (mut store, _dir) = fresh_store();

        let events = store.add_coins(8_000);
        assert!(events.is_empty());

        let events = store.add_coins(1_000);
        assert_eq!(events.len(), 1);
        assert!(store.state().achievements.contains_key("rich"));

        // Already unlocked, no repeat event
        let events = store.add_coins(1_000);
        assert!(events.is_empty());
    }
}
