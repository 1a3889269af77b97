//! Gambit - gamified chess education
//!
//! A local, single-user app: register a profile, answer quiz lessons,
//! collect chess player cards from gacha-style packs, play a simplified
//! chess bot, and track progression (coins, levels, streaks, achievements,
//! daily quests).
//!
//! The core is the progression/reward state machine in [`store`]; the rest
//! of the crate is collaborators around it: a key-value [`storage`] layer,
//! the [`profile`] registration gate, the [`shop`] pack generator, the
//! [`chess`] bots, and the [`chat`] client for the virtual coach.

pub mod chat;
pub mod chess;
pub mod config;
pub mod lessons;
pub mod profile;
pub mod shop;
pub mod storage;
pub mod store;
