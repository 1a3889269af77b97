//! Bot catalog and move selection heuristics
//!
//! Bots never look at the board beyond the legal SAN move list: capture
//! notation ('x') and check notation ('+'/'#') drive the tiers.

use rand::Rng;
use rand::seq::SliceRandom;

/// Difficulty tier of a bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl BotDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }
}

/// Canned table talk for a bot.
#[derive(Debug)]
pub struct BotPhrases {
    pub greeting: &'static [&'static str],
    pub good_move: &'static [&'static str],
    pub bad_move: &'static [&'static str],
    pub winning: &'static [&'static str],
    pub losing: &'static [&'static str],
}

/// An opponent definition
#[derive(Debug)]
pub struct ChessBot {
    pub id: u32,
    pub name: &'static str,
    pub avatar: &'static str,
    pub personality: &'static str,
    pub rating: u32,
    pub difficulty: BotDifficulty,
    pub phrases: BotPhrases,
}

impl ChessBot {
    /// Look up a bot by id.
    pub fn get(id: u32) -> Option<&'static ChessBot> {
        BOTS.iter().find(|b| b.id == id)
    }

    /// Coins paid when the player checkmates this bot.
    pub fn win_reward(&self) -> u32 {
        self.rating / 2
    }

    /// Coins paid on any draw against this bot.
    pub fn draw_reward(&self) -> u32 {
        self.rating / 4
    }
}

/// All opponents, one per difficulty tier
pub static BOTS: &[ChessBot] = &[
    ChessBot {
        id: 1,
        name: "Pawn Pasha",
        avatar: "♟️",
        personality: "Just learned how the pieces move",
        rating: 800,
        difficulty: BotDifficulty::Beginner,
        phrases: BotPhrases {
            greeting: &["Hi! I only started last week.", "Let's have some fun!"],
            good_move: &["Ooh, nice one!", "I didn't see that coming."],
            bad_move: &["Hey, my piece!", "Oops, I liked that one."],
            winning: &["Wait, am I actually winning?", "Beginner's luck!"],
            losing: &["Well played! I'll get you next time.", "You're too good for me."],
        },
    },
    ChessBot {
        id: 2,
        name: "Knight Nikita",
        avatar: "♞",
        personality: "Loves forks and tricky jumps",
        rating: 1400,
        difficulty: BotDifficulty::Intermediate,
        phrases: BotPhrases {
            greeting: &["A knight on the rim is dim. Let's go!", "Ready when you are."],
            good_move: &["Solid move.", "Hmm, you know your stuff."],
            bad_move: &["Thanks for the piece!", "That one will cost you."],
            winning: &["My knights are dancing today.", "Feeling the momentum!"],
            losing: &["A worthy opponent.", "I got outplayed, fair and square."],
        },
    },
    ChessBot {
        id: 3,
        name: "Bishop Boris",
        avatar: "♝",
        personality: "Patient positional player",
        rating: 1800,
        difficulty: BotDifficulty::Advanced,
        phrases: BotPhrases {
            greeting: &["Control the diagonals, control the game.", "Shall we begin?"],
            good_move: &["Accurate.", "A principled choice."],
            bad_move: &["That weakens your structure.", "I will take that, thank you."],
            winning: &["The position plays itself.", "Everything is under control."],
            losing: &["Impressive technique.", "You earned this one."],
        },
    },
    ChessBot {
        id: 4,
        name: "Queen Vera",
        avatar: "♛",
        personality: "Aggressive attacker, always hunting the king",
        rating: 2200,
        difficulty: BotDifficulty::Expert,
        phrases: BotPhrases {
            greeting: &["I hope you castled early.", "Your king is my target."],
            good_move: &["You defend well.", "Not bad at all."],
            bad_move: &["Your king is getting lonely.", "The attack writes itself."],
            winning: &["Checkmate is in the air.", "Can you feel the pressure?"],
            losing: &["A brilliant defense.", "You survived my storm. Respect."],
        },
    },
    ChessBot {
        id: 5,
        name: "Grandmaster Gambit",
        avatar: "♚",
        personality: "Calm, precise, and merciless",
        rating: 2700,
        difficulty: BotDifficulty::Master,
        phrases: BotPhrases {
            greeting: &["Every move matters now.", "Show me your preparation."],
            good_move: &["Theory, I presume.", "Precisely played."],
            bad_move: &["That was the losing move.", "The evaluation just shifted."],
            winning: &["The rest is technique.", "Resignation is an option."],
            losing: &["Extraordinary. Well deserved.", "I must analyze this game later."],
        },
    },
];

/// Pick a random phrase from a set.
pub fn random_phrase(phrases: &'static [&'static str], rng: &mut impl Rng) -> &'static str {
    phrases.choose(rng).copied().unwrap_or("")
}

/// Select a move from the legal SAN list according to the difficulty tier.
/// Returns `None` only when the list is empty.
pub fn pick_move(
    difficulty: BotDifficulty,
    legal_san: &[String],
    rng: &mut impl Rng,
) -> Option<String> {
    if legal_san.is_empty() {
        return None;
    }

    let captures: Vec<&String> = legal_san.iter().filter(|m| m.contains('x')).collect();
    let checks: Vec<&String> = legal_san
        .iter()
        .filter(|m| m.contains('+') || m.contains('#'))
        .collect();

    let chosen = match difficulty {
        BotDifficulty::Beginner => legal_san.choose(rng),
        BotDifficulty::Intermediate => {
            if !captures.is_empty() && rng.gen_bool(0.7) {
                captures.choose(rng).copied()
            } else {
                legal_san.choose(rng)
            }
        }
        BotDifficulty::Advanced | BotDifficulty::Expert | BotDifficulty::Master => {
            if !checks.is_empty() && rng.gen_bool(0.6) {
                checks.choose(rng).copied()
            } else if !captures.is_empty() && rng.gen_bool(0.8) {
                captures.choose(rng).copied()
            } else {
                legal_san.choose(rng)
            }
        }
    };

    chosen.cloned()
}
