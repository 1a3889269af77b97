//! Match wrapper over the chess rules library
//!
//! Tracks one game between the player (White) and a bot (Black). All
//! legality and terminal detection is delegated to `shakmaty`; the wrapper
//! adds SAN round-tripping and threefold-repetition tracking, which the
//! position type does not retain on its own.

use std::collections::HashMap;

use shakmaty::fen::Epd;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Color, EnPassantMode, Position};

/// How a finished match ended, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    PlayerWin,
    BotWin,
    Draw,
}

/// One game in progress.
pub struct ChessMatch {
    pos: Chess,
    /// Occurrence count per position key, for threefold detection.
    repetitions: HashMap<String, u32>,
    moves_played: u32,
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessMatch {
    /// Start a fresh game from the initial position.
    pub fn new() -> Self {
        let pos = Chess::default();
        let mut repetitions = HashMap::new();
        repetitions.insert(position_key(&pos), 1);
        Self {
            pos,
            repetitions,
            moves_played: 0,
        }
    }

    /// Side to move. The player is always White.
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// All legal moves in SAN, with check/checkmate suffixes.
    pub fn legal_moves_san(&self) -> Vec<String> {
        self.pos
            .legal_moves()
            .iter()
            .map(|m| SanPlus::from_move(self.pos.clone(), m).to_string())
            .collect()
    }

    /// Apply a move given in SAN. Returns `false` for unparseable or
    /// illegal input, leaving the board unchanged.
    pub fn play_san(&mut self, input: &str) -> bool {
        let Ok(san) = input.trim().parse::<SanPlus>() else {
            return false;
        };
        let Ok(m) = san.san.to_move(&self.pos) else {
            return false;
        };
        let Ok(next) = self.pos.clone().play(&m) else {
            return false;
        };

        self.pos = next;
        self.moves_played += 1;
        *self
            .repetitions
            .entry(position_key(&self.pos))
            .or_insert(0) += 1;
        true
    }

    /// Terminal state, if the game is over: checkmate, stalemate or other
    /// rule-based draw from the rules library, or threefold repetition.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if let Some(outcome) = self.pos.outcome() {
            return Some(match outcome {
                shakmaty::Outcome::Decisive { winner } => {
                    if winner == Color::White {
                        MatchOutcome::PlayerWin
                    } else {
                        MatchOutcome::BotWin
                    }
                }
                shakmaty::Outcome::Draw => MatchOutcome::Draw,
            });
        }
        if self.repetitions.values().any(|&count| count >= 3) {
            return Some(MatchOutcome::Draw);
        }
        None
    }
}

/// Repetition key: piece placement, side to move, castling and ep rights.
fn position_key(pos: &Chess) -> String {
    Epd::from_position(pos.clone(), EnPassantMode::Legal).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_white_and_20_moves() {
        let game = ChessMatch::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.legal_moves_san().len(), 20);
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_illegal_input_leaves_board_unchanged() {
        let mut game = ChessMatch::new();
        assert!(!game.play_san("Qh5")); // queen can't move yet
        assert!(!game.play_san("not a move"));
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.legal_moves_san().len(), 20);
    }

    #[test]
    fn test_scholars_mate_is_a_player_win() {
        let mut game = ChessMatch::new();
        for m in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"] {
            assert!(game.play_san(m), "move {m} should be legal");
        }
        assert_eq!(game.outcome(), Some(MatchOutcome::PlayerWin));
    }

    #[test]
    fn test_fools_mate_is_a_bot_win() {
        let mut game = ChessMatch::new();
        for m in ["f3", "e5", "g4", "Qh4#"] {
            assert!(game.play_san(m), "move {m} should be legal");
        }
        assert_eq!(game.outcome(), Some(MatchOutcome::BotWin));
    }

    #[test]
    fn test_threefold_repetition_is_a_draw() {
        let mut game = ChessMatch::new();
        // Shuffle knights back and forth; the start position recurs
        for _ in 0..2 {
            for m in ["Nf3", "Nf6", "Ng1", "Ng8"] {
                assert!(game.play_san(m));
            }
        }
        assert_eq!(game.outcome(), Some(MatchOutcome::Draw));
    }

    #[test]
    fn test_check_suffix_present_in_san_list() {
        let mut game = ChessMatch::new();
        for m in ["e4", "e5", "Qh5", "Nc6"] {
            assert!(game.play_san(m));
        }
        // Qxf7+ is among White's legal moves here
        assert!(
            game.legal_moves_san()
                .iter()
                .any(|m| m.contains('x') && m.contains('+'))
        );
    }
}
