//! Pack shop and card generation
//!
//! Four purchasable packs, each yielding a fixed number of randomly rolled
//! cards. Rarity is a cumulative weighted roll, rating is uniform in the
//! pack's range, and the six stats derive from the rating with a small
//! random spread.

use anyhow::{Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::store::GameStore;
use crate::store::collection::{CardStats, PlayerCard, Rarity};

/// Rarity weights for a pack, in percent. Must sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct RarityChances {
    pub gold: u32,
    pub orange: u32,
    pub blue: u32,
    pub turquoise: u32,
}

/// A purchasable pack.
#[derive(Debug)]
pub struct Pack {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    /// Cards yielded per opening.
    pub count: u32,
    pub min_rating: u32,
    pub max_rating: u32,
    pub chances: RarityChances,
}

/// All purchasable packs
pub static PACKS: &[Pack] = &[
    Pack {
        id: 1,
        name: "Starter Pack",
        description: "3 basic cards",
        price: 100,
        count: 3,
        min_rating: 75,
        max_rating: 88,
        chances: RarityChances {
            gold: 0,
            orange: 0,
            blue: 20,
            turquoise: 80,
        },
    },
    Pack {
        id: 2,
        name: "Silver Pack",
        description: "4 cards with a chance at a rare",
        price: 300,
        count: 4,
        min_rating: 85,
        max_rating: 96,
        chances: RarityChances {
            gold: 0,
            orange: 5,
            blue: 45,
            turquoise: 50,
        },
    },
    Pack {
        id: 3,
        name: "Gold Pack",
        description: "5 cards, rare guaranteed odds",
        price: 500,
        count: 5,
        min_rating: 88,
        max_rating: 102,
        chances: RarityChances {
            gold: 5,
            orange: 25,
            blue: 50,
            turquoise: 20,
        },
    },
    Pack {
        id: 4,
        name: "Premium Pack",
        description: "6 elite cards",
        price: 800,
        count: 6,
        min_rating: 96,
        max_rating: 112,
        chances: RarityChances {
            gold: 15,
            orange: 40,
            blue: 35,
            turquoise: 10,
        },
    },
];

/// Name/position/image templates the generator draws from.
struct PlayerTemplate {
    name: &'static str,
    position: &'static str,
    image: &'static str,
}

static PLAYER_TEMPLATES: &[PlayerTemplate] = &[
    PlayerTemplate {
        name: "Magnus Carlsen",
        position: "ST",
        image: "https://cdn.poehali.dev/files/6b501f62-297a-4e53-b859-cddd90807910.jpg",
    },
    PlayerTemplate {
        name: "Garry Kasparov",
        position: "CM",
        image: "https://cdn.poehali.dev/files/fa2a2502-6820-4097-9db1-c1dab8addcd4.jpg",
    },
    PlayerTemplate {
        name: "Hikaru Nakamura",
        position: "CAM",
        image: "https://cdn.poehali.dev/files/770c39ca-4e5e-4358-b255-0f826aa2ee48.jpg",
    },
    PlayerTemplate {
        name: "Bobby Fischer",
        position: "CF",
        image: "https://cdn.poehali.dev/files/eb65bb6d-48c5-4110-89a6-c0a5d3276da3.jpg",
    },
];

impl Pack {
    /// Look up a pack by id.
    pub fn get(id: u32) -> Option<&'static Pack> {
        PACKS.iter().find(|p| p.id == id)
    }
}

/// Cumulative weighted rarity roll.
fn roll_rarity(chances: &RarityChances, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen_range(0..100);
    let tiers = [
        (Rarity::Gold, chances.gold),
        (Rarity::Orange, chances.orange),
        (Rarity::Blue, chances.blue),
        (Rarity::Turquoise, chances.turquoise),
    ];
    let mut cumulative = 0;
    for (rarity, chance) in tiers {
        cumulative += chance;
        if roll < cumulative {
            return rarity;
        }
    }
    Rarity::Turquoise
}

/// Roll one card from a pack. The id is a placeholder; the collection
/// assigns the real one on insert.
pub fn generate_card(pack: &Pack, rng: &mut impl Rng) -> PlayerCard {
    let rarity = roll_rarity(&pack.chances, rng);
    let template = PLAYER_TEMPLATES
        .choose(rng)
        .expect("template catalog is non-empty");
    let rating = rng.gen_range(pack.min_rating..=pack.max_rating);

    let base = rating * 85 / 100;
    let mut stat = || (base + rng.gen_range(0..10)).min(99);

    let stats = CardStats {
        pace: stat(),
        shooting: stat(),
        passing: stat(),
        dribbling: stat(),
        defending: stat(),
        physical: stat(),
    };

    PlayerCard {
        id: Uuid::nil(),
        name: template.name.to_string(),
        rating,
        position: template.position.to_string(),
        rarity,
        price: rating * 5000,
        image: template.image.to_string(),
        stats,
        skill: (rating / 20).min(5),
        weak_foot: (rating / 25).min(5),
    }
}

/// Buy and open a pack: the price gates the purchase through the economy,
/// then `count` cards are rolled and added to the collection.
pub fn open_pack(store: &mut GameStore, pack: &Pack, rng: &mut impl Rng) -> Result<Vec<PlayerCard>> {
    if !store.spend_coins(pack.price) {
        bail!(
            "not enough coins: {} needed, {} available",
            pack.price,
            store.state().coins
        );
    }

    let mut cards = Vec::with_capacity(pack.count as usize);
    for _ in 0..pack.count {
        let card = generate_card(pack, rng);
        let id = store.add_card(card.clone());
        cards.push(PlayerCard { id, ..card });
    }
    Ok(cards)
}
