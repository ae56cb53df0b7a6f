//! The seam to the game surface.

use crate::{BoardError, Feedback, Word, WORD_LEN};

/// Capability interface to whatever renders the game.
///
/// A board accepts a guess and, once the surface has settled, yields one
/// feedback symbol per letter for a given row. Implementations own any
/// waiting or retry behavior of their surface; the session only sequences
/// the calls.
pub trait Board {
    /// Enters `guess` on the game surface.
    fn submit_guess(&mut self, guess: Word) -> Result<(), BoardError>;

    /// Reads the feedback row for the zero-based `attempt`.
    fn read_feedback(&mut self, attempt: usize) -> Result<Vec<Feedback>, BoardError>;
}

/// A board that plays a fixed hidden answer.
///
/// Guesses are graded with the same duplicate-aware rules as the live
/// game, making this the stand-in surface for offline runs and tests.
#[derive(Debug, Clone)]
pub struct SimulatedBoard {
    answer: Word,
    rows: Vec<[Feedback; WORD_LEN]>,
}

impl SimulatedBoard {
    pub fn new(answer: Word) -> Self {
        SimulatedBoard {
            answer,
            rows: Vec::new(),
        }
    }

    pub fn answer(&self) -> Word {
        self.answer
    }
}

impl Board for SimulatedBoard {
    fn submit_guess(&mut self, guess: Word) -> Result<(), BoardError> {
        log::debug!("board accepts {}", guess);
        self.rows.push(Feedback::grade(&guess, &self.answer));
        Ok(())
    }

    fn read_feedback(&mut self, attempt: usize) -> Result<Vec<Feedback>, BoardError> {
        self.rows
            .get(attempt)
            .map(|row| row.to_vec())
            .ok_or(BoardError::RowUnavailable(attempt))
    }
}

/// A board that replays canned feedback rows, recording what was guessed.
///
/// Rows are handed out by attempt index regardless of the submitted word;
/// running out of rows surfaces as a row-unavailable fault, which is also
/// how tests exercise the failure path.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBoard {
    rows: Vec<Vec<Feedback>>,
    submitted: Vec<Word>,
}

impl ScriptedBoard {
    pub fn new(rows: Vec<Vec<Feedback>>) -> Self {
        ScriptedBoard {
            rows,
            submitted: Vec::new(),
        }
    }

    /// The words submitted so far, in order.
    pub fn submitted(&self) -> &[Word] {
        &self.submitted
    }
}

impl Board for ScriptedBoard {
    fn submit_guess(&mut self, guess: Word) -> Result<(), BoardError> {
        self.submitted.push(guess);
        Ok(())
    }

    fn read_feedback(&mut self, attempt: usize) -> Result<Vec<Feedback>, BoardError> {
        self.rows
            .get(attempt)
            .cloned()
            .ok_or(BoardError::RowUnavailable(attempt))
    }
}
