//! Chess bots and the match wrapper
//!
//! Move legality, SAN, and terminal-state detection come from `shakmaty`;
//! the "AI" here is a randomized move picker with string-pattern
//! heuristics keyed to a difficulty tier.

pub mod bot;
pub mod game;

pub use bot::{BOTS, BotDifficulty, ChessBot, pick_move};
pub use game::{ChessMatch, MatchOutcome};
