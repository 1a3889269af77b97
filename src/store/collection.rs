//! Player card collection
//!
//! Cards are created by pack openings (see [`crate::shop`]) and appended
//! here. Each card gets a fresh UUID at acquisition time, so two cards
//! added in the same instant can never collide.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GameStore;

/// Visual/value tier of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Gold,
    Orange,
    Blue,
    Turquoise,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Turquoise => "turquoise",
        }
    }
}

/// The six card stat values, each 0-99.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CardStats {
    pub pace: u32,
    pub shooting: u32,
    pub passing: u32,
    pub dribbling: u32,
    pub defending: u32,
    pub physical: u32,
}

/// A collectible chess player card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCard {
    pub id: Uuid,
    pub name: String,
    pub rating: u32,
    pub position: String,
    pub rarity: Rarity,
    pub price: u32,
    pub image: String,
    pub stats: CardStats,
    /// Skill rating, 0-5.
    pub skill: u32,
    /// Weak foot rating, 0-5.
    pub weak_foot: u32,
}

impl GameStore {
    /// Append a card to the collection under a freshly generated id.
    /// Returns the id the card was stored under.
    pub fn add_card(&mut self, mut card: PlayerCard) -> Uuid {
        let id = Uuid::new_v4();
        card.id = id;
        self.state_mut().cards.push(card);
        self.persist();
        id
    }

    /// Remove a card by id. No-op when the id is absent.
    pub fn remove_card(&mut self, id: Uuid) {
        self.state_mut().cards.retain(|c| c.id != id);
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::fresh_store;

    fn sample_card() -> PlayerCard {
        PlayerCard {
            id: Uuid::nil(),
            name: "Magnus Carlsen".to_string(),
            rating: 90,
            position: "ST".to_string(),
            rarity: Rarity::Gold,
            price: 450_000,
            image: String::new(),
            stats: CardStats {
                pace: 80,
                shooting: 82,
                passing: 85,
                dribbling: 88,
                defending: 79,
                physical: 81,
            },
            skill: 4,
            weak_foot: 3,
        }
    }

    #[test]
    fn test_add_card_assigns_fresh_ids() {
        let (mut store, _dir) = fresh_store();

        let a = store.add_card(sample_card());
        let b = store.add_card(sample_card());
        assert_ne!(a, b);
        assert_eq!(store.state().cards.len(), 2);
        assert_eq!(store.state().cards[0].id, a);
    }

    #[test]
    fn test_remove_card_is_noop_for_unknown_id() {
        let (mut store, _dir) = fresh_store();

        let id = store.add_card(sample_card());
        store.remove_card(Uuid::new_v4());
        assert_eq!(store.state().cards.len(), 1);

        store.remove_card(id);
        assert!(store.state().cards.is_empty());
    }
}
