//! Card collection commands

use anyhow::{Context, Result};
use clap::Subcommand;
use uuid::Uuid;

use gambit::store::GameStore;

#[derive(Subcommand)]
pub enum CardsCommand {
    /// List owned cards
    List,
    /// Remove a card from the collection
    Remove {
        /// Card id from `gambit cards list`
        id: String,
    },
}

pub fn cards_command(store: &mut GameStore, command: CardsCommand) -> Result<()> {
    match command {
        CardsCommand::List => list_cards(store),
        CardsCommand::Remove { id } => remove_card(store, &id),
    }
}

fn list_cards(store: &GameStore) -> Result<()> {
    let cards = &store.state().cards;
    if cards.is_empty() {
        println!("No cards yet - open a pack with `gambit shop buy <id>`.");
        return Ok(());
    }

    println!("Your collection ({} cards):\n", cards.len());
    for card in cards {
        println!(
            "  [{}] {} {} - rating {}, value {} coins",
            card.rarity.as_str(),
            card.name,
            card.position,
            card.rating,
            card.price
        );
        let s = &card.stats;
        println!(
            "     PAC {} SHO {} PAS {} DRI {} DEF {} PHY {} | skill {} weak foot {}",
            s.pace, s.shooting, s.passing, s.dribbling, s.defending, s.physical,
            card.skill, card.weak_foot
        );
        println!("     id: {}", card.id);
    }
    Ok(())
}

fn remove_card(store: &mut GameStore, id: &str) -> Result<()> {
    let id: Uuid = id.parse().context("invalid card id")?;
    let before = store.state().cards.len();
    store.remove_card(id);

    if store.state().cards.len() < before {
        println!("Card removed.");
    } else {
        println!("No card with that id.");
    }
    Ok(())
}
