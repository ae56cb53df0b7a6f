//! Running one game from start to terminal state.

use std::fmt::{self, Display};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::{
    filter::filter,
    strategy::{Strategy, Uniform},
    Board, CandidateSet, GuessRecord, WordleError, DEFAULT_MAX_ATTEMPTS,
};

/// How a finished game ended.
///
/// All three states are terminal; no further guesses are submitted once
/// one is reached.
#[derive(Debug)]
pub enum Outcome {
    /// The board showed an all-correct row on the given 1-based attempt.
    Won { attempts: usize },

    /// Every attempt was spent without an all-correct row.
    Lost,

    /// A collaborator fault ended the game early.
    Failed { error: WordleError },
}

impl Outcome {
    /// Short status label for reporting.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Won { .. } => "Won",
            Outcome::Lost => "Lost",
            Outcome::Failed { .. } => "Failed",
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// One game session: the candidate set plus the guesses made so far.
///
/// A session is seeded with the full dictionary, configured with the
/// builder methods, and consumed by [`play()`](Session::play). Note that
/// the configuration methods consume the existing session and return a
/// new one.
///
/// # Examples
///
/// ```rust
/// use wordle_auto::{board::SimulatedBoard, strategy::Uniform, words, Session, Word};
///
/// let mut board = SimulatedBoard::new(Word::from_str("slate")?);
/// let report = Session::new(words::builtin())
///     .max_attempts(6)
///     .strategy(Box::new(Uniform::with_seed(7)))
///     .play(&mut board);
///
/// println!("{}", report.summary());
/// #
/// # Ok::<_, wordle_auto::WordleError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    candidates: CandidateSet,
    history: Vec<GuessRecord>,
    strategy: Box<dyn Strategy>,
    max_attempts: usize,
}

impl Session {
    /// Creates a session seeded with the full dictionary, playing the
    /// stock selection policy.
    pub fn new(dictionary: CandidateSet) -> Self {
        Session {
            candidates: dictionary,
            history: Vec::new(),
            strategy: Box::new(Uniform::new()),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the guess-selection policy.
    pub fn strategy(self, strategy: Box<dyn Strategy>) -> Self {
        Session { strategy, ..self }
    }

    /// Changes the number of attempts the board allows.
    pub fn max_attempts(self, max_attempts: usize) -> Self {
        Session {
            max_attempts,
            ..self
        }
    }

    /// Words still consistent with all feedback seen so far.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Guesses recorded so far, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Plays the session to a terminal state.
    ///
    /// Each round submits the selected guess, reads the feedback row, and
    /// either stops (win, attempts exhausted, collaborator fault) or
    /// narrows the candidates and continues. A report is produced on
    /// every path, faults included.
    pub fn play(mut self, board: &mut dyn Board) -> RunReport {
        for attempt in 0..self.max_attempts {
            let guess = self.strategy.next_guess(attempt, &self.candidates);
            info!(
                "attempt {}/{}: guessing {}",
                attempt + 1,
                self.max_attempts,
                guess
            );

            if let Err(e) = board.submit_guess(guess) {
                return self.fail(e.into());
            }
            let row = match board.read_feedback(attempt) {
                Ok(row) => row,
                Err(e) => return self.fail(e.into()),
            };
            let record = match GuessRecord::new(guess, &row) {
                Ok(record) => record,
                Err(e) => return self.fail(e),
            };

            self.history.push(record);
            if record.is_win() {
                info!("solved in {} attempts", attempt + 1);
                return RunReport {
                    outcome: Outcome::Won {
                        attempts: attempt + 1,
                    },
                    history: self.history,
                    max_attempts: self.max_attempts,
                };
            }

            if attempt + 1 < self.max_attempts {
                self.candidates = filter(&self.candidates, &record);
                debug!("{} candidates remain", self.candidates.len());
            }
        }

        RunReport {
            outcome: Outcome::Lost,
            history: self.history,
            max_attempts: self.max_attempts,
        }
    }

    fn fail(self, error: WordleError) -> RunReport {
        warn!("session failed: {}", error);
        RunReport {
            outcome: Outcome::Failed { error },
            history: self.history,
            max_attempts: self.max_attempts,
        }
    }
}

/// The record of a finished session.
#[derive(Debug)]
pub struct RunReport {
    outcome: Outcome,
    history: Vec<GuessRecord>,
    max_attempts: usize,
}

impl RunReport {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The human-readable summary handed to reporters: a headline plus
    /// one tile line per guess.
    ///
    /// A summary is produced on every path; a failed run degrades to a
    /// headline carrying the cause instead of going unreported.
    pub fn summary(&self) -> String {
        let headline = match &self.outcome {
            Outcome::Won { attempts } => {
                format!("Won in {}/{} attempts!", attempts, self.max_attempts)
            }
            Outcome::Lost => format!("Lost ({0}/{0}).", self.max_attempts),
            Outcome::Failed { error } => format!("Failed: {}.", error),
        };

        if self.history.is_empty() {
            headline
        } else {
            let lines = self.history.iter().map(|r| r.to_string()).join("\n");
            format!("{}\n\nGuesses:\n{}", headline, lines)
        }
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::ScriptedBoard;
    use crate::Feedback;

    fn pool(list: &[&str]) -> CandidateSet {
        list.iter()
            .map(|w| crate::Word::from_str(w).unwrap())
            .collect()
    }

    #[test]
    fn candidates_start_as_the_full_dictionary() {
        let session = Session::new(pool(&["crane", "train"]));
        assert_eq!(session.candidates().len(), 2);
        assert!(session.history().is_empty());
    }

    #[test]
    fn failed_summary_still_names_the_guesses_made() {
        let mut board = ScriptedBoard::new(vec![vec![Feedback::Absent; 5]]);
        let report = Session::new(pool(&["crane", "ghost", "moody"]))
            .strategy(Box::new(Uniform::with_seed(1)))
            .play(&mut board);

        assert_eq!(report.outcome().label(), "Failed");
        let summary = report.summary();
        assert!(summary.starts_with("Failed:"));
        assert!(summary.contains("Guesses:"));
        assert!(summary.contains("CRANE"));
    }
}
