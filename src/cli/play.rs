//! Play command: an interactive match against a bot

use anyhow::{Result, bail};
use rand::Rng;
use shakmaty::Color;

use gambit::chess::bot::random_phrase;
use gambit::chess::{BOTS, ChessBot, ChessMatch, MatchOutcome, pick_move};
use gambit::store::GameStore;

use super::{print_events, read_line};

pub fn play_command(store: &mut GameStore, bot_id: Option<u32>) -> Result<()> {
    let Some(bot_id) = bot_id else {
        return list_bots();
    };
    let Some(bot) = ChessBot::get(bot_id) else {
        bail!("no bot with id {bot_id} - run `gambit play` to list opponents");
    };

    run_match(store, bot)
}

fn list_bots() -> Result<()> {
    println!("Opponents:\n");
    for bot in BOTS {
        println!(
            "  {}. {} {} - rating {} ({})",
            bot.id,
            bot.avatar,
            bot.name,
            bot.rating,
            bot.difficulty.label()
        );
        println!("     {}", bot.personality);
    }
    println!("\nStart a game with `gambit play --bot <id>`.");
    Ok(())
}

fn run_match(store: &mut GameStore, bot: &ChessBot) -> Result<()> {
    let mut game = ChessMatch::new();
    let mut rng = rand::thread_rng();

    println!("{} {}: {}", bot.avatar, bot.name, random_phrase(bot.phrases.greeting, &mut rng));
    println!("You play White. Enter moves in SAN (e.g. e4, Nf3, O-O).");
    println!("Type `moves` to list legal moves, `resign` to give up.\n");

    loop {
        if let Some(outcome) = game.outcome() {
            return finish_match(store, bot, outcome, &mut rng);
        }

        if game.turn() == Color::White {
            if game.is_check() {
                println!("Check!");
            }
            let input = read_line("your move> ")?;
            match input.as_str() {
                "moves" => {
                    println!("{}", game.legal_moves_san().join(" "));
                    continue;
                }
                "resign" => {
                    return finish_match(store, bot, MatchOutcome::BotWin, &mut rng);
                }
                _ => {}
            }
            if !game.play_san(&input) {
                println!("Illegal move.");
                continue;
            }
            if input.contains('x') && rng.gen_bool(0.4) {
                println!("{}: {}", bot.name, random_phrase(bot.phrases.bad_move, &mut rng));
            }
        } else {
            let legal = game.legal_moves_san();
            let Some(reply) = pick_move(bot.difficulty, &legal, &mut rng) else {
                // No legal moves: the outcome check at the top of the loop
                // will report mate or stalemate
                continue;
            };
            game.play_san(&reply);
            println!("{} plays {reply}", bot.name);
            if rng.gen_bool(0.3) {
                println!("{}: {}", bot.name, random_phrase(bot.phrases.good_move, &mut rng));
            }
        }
    }
}

fn finish_match(
    store: &mut GameStore,
    bot: &ChessBot,
    outcome: MatchOutcome,
    rng: &mut impl Rng,
) -> Result<()> {
    println!();
    match outcome {
        MatchOutcome::PlayerWin => {
            let reward = bot.win_reward();
            println!("🏆 You win! +{reward} coins");
            println!("{}: {}", bot.name, random_phrase(bot.phrases.losing, rng));
            let events = store.add_coins(reward);
            print_events(&events);
        }
        MatchOutcome::BotWin => {
            println!("💀 You lose.");
            println!("{}: {}", bot.name, random_phrase(bot.phrases.winning, rng));
        }
        MatchOutcome::Draw => {
            let reward = bot.draw_reward();
            println!("🤝 Draw. +{reward} coins");
            let events = store.add_coins(reward);
            print_events(&events);
        }
    }
    Ok(())
}
