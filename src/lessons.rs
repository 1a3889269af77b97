//! Built-in quiz lesson catalog

/// A single multiple-choice question.
#[derive(Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    /// Index into `choices`.
    pub answer: usize,
}

/// A quiz lesson.
#[derive(Debug)]
pub struct Lesson {
    pub id: u32,
    pub title: &'static str,
    pub questions: &'static [Question],
}

impl Lesson {
    /// Look up a lesson by id.
    pub fn get(id: u32) -> Option<&'static Lesson> {
        LESSONS.iter().find(|l| l.id == id)
    }
}

/// All built-in lessons
pub static LESSONS: &[Lesson] = &[
    Lesson {
        id: 1,
        title: "The Board and the Pieces",
        questions: &[
            Question {
                prompt: "How many squares does a chessboard have?",
                choices: ["32", "48", "64", "100"],
                answer: 2,
            },
            Question {
                prompt: "Which piece can jump over other pieces?",
                choices: ["Bishop", "Knight", "Rook", "Queen"],
                answer: 1,
            },
            Question {
                prompt: "How many pawns does each side start with?",
                choices: ["6", "7", "8", "9"],
                answer: 2,
            },
            Question {
                prompt: "On which color square does the white queen start?",
                choices: ["White", "Black", "Either", "It varies by opening"],
                answer: 0,
            },
        ],
    },
    Lesson {
        id: 2,
        title: "How the Pieces Move",
        questions: &[
            Question {
                prompt: "How does the bishop move?",
                choices: [
                    "Along ranks and files",
                    "Diagonally",
                    "One square in any direction",
                    "In an L-shape",
                ],
                answer: 1,
            },
            Question {
                prompt: "Which piece combines the rook and the bishop?",
                choices: ["King", "Knight", "Queen", "Pawn"],
                answer: 2,
            },
            Question {
                prompt: "How far can the king move in one turn?",
                choices: ["One square", "Two squares", "Any distance", "It cannot move"],
                answer: 0,
            },
            Question {
                prompt: "What may a pawn become on the last rank?",
                choices: ["Only a queen", "Any piece except a king", "A second king", "Nothing"],
                answer: 1,
            },
        ],
    },
    Lesson {
        id: 3,
        title: "Check and Checkmate",
        questions: &[
            Question {
                prompt: "What does 'check' mean?",
                choices: [
                    "The game is over",
                    "The king is attacked",
                    "A piece was captured",
                    "A draw was offered",
                ],
                answer: 1,
            },
            Question {
                prompt: "What is checkmate?",
                choices: [
                    "The king is attacked and cannot escape",
                    "All pawns are captured",
                    "Both players agree to stop",
                    "The king reaches the last rank",
                ],
                answer: 0,
            },
            Question {
                prompt: "What is stalemate?",
                choices: [
                    "A win for White",
                    "A win for Black",
                    "No legal moves but the king is not in check - a draw",
                    "A repeated position",
                ],
                answer: 2,
            },
        ],
    },
    Lesson {
        id: 4,
        title: "Special Moves",
        questions: &[
            Question {
                prompt: "What is castling?",
                choices: [
                    "Moving the king two squares towards a rook",
                    "Capturing with a pawn",
                    "Promoting a pawn",
                    "Moving two pawns at once",
                ],
                answer: 0,
            },
            Question {
                prompt: "En passant is a special capture by which piece?",
                choices: ["Knight", "Bishop", "Pawn", "Queen"],
                answer: 2,
            },
            Question {
                prompt: "When is castling NOT allowed?",
                choices: [
                    "After 10 moves",
                    "While the king is in check",
                    "When a queen is on the board",
                    "In the endgame",
                ],
                answer: 1,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_ids_are_unique_and_resolvable() {
        for lesson in LESSONS {
            assert_eq!(Lesson::get(lesson.id).unwrap().id, lesson.id);
            assert!(!lesson.questions.is_empty());
        }
        assert!(Lesson::get(999).is_none());
    }

    #[test]
    fn test_answer_indices_are_in_range() {
        for lesson in LESSONS {
            for question in lesson.questions {
                assert!(question.answer < question.choices.len());
            }
        }
    }
}
