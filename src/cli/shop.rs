//! Shop commands: browse packs, buy and open one

use anyhow::{Result, bail};
use clap::Subcommand;

use gambit::shop::{self, PACKS, Pack};
use gambit::store::GameStore;

#[derive(Subcommand)]
pub enum ShopCommand {
    /// List purchasable packs
    List,
    /// Buy a pack and reveal its cards
    Buy {
        /// Pack id from `gambit shop list`
        id: u32,
    },
}

pub fn shop_command(store: &mut GameStore, command: ShopCommand) -> Result<()> {
    match command {
        ShopCommand::List => list_packs(store),
        ShopCommand::Buy { id } => buy_pack(store, id),
    }
}

fn list_packs(store: &GameStore) -> Result<()> {
    println!("Packs (you have {} coins):\n", store.state().coins);
    for pack in PACKS {
        println!(
            "  {}. {} - {} coins ({})",
            pack.id, pack.name, pack.price, pack.description
        );
    }
    Ok(())
}

fn buy_pack(store: &mut GameStore, id: u32) -> Result<()> {
    let Some(pack) = Pack::get(id) else {
        bail!("no pack with id {id} - see `gambit shop list`");
    };

    let mut rng = rand::thread_rng();
    let cards = shop::open_pack(store, pack, &mut rng)?;

    println!("🎉 {} opened!\n", pack.name);
    for card in &cards {
        println!(
            "  [{}] {} {} - rating {} ({})",
            card.rarity.as_str(),
            card.name,
            card.position,
            card.rating,
            card.id
        );
    }
    println!("\nCoins left: {}", store.state().coins);
    Ok(())
}
