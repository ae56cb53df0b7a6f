#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod words;
pub use words::{CandidateSet, Word};

pub mod feedback;
pub use feedback::{Feedback, GuessRecord};

pub mod filter;
pub use filter::filter;

pub mod strategy;
pub use strategy::Strategy;

pub mod board;
pub use board::Board;

pub mod session;
pub use session::{Outcome, RunReport, Session};

pub mod report;
pub use report::Reporter;

/// The number of letters in a game word.
pub const WORD_LEN: usize = 5;

/// The number of guesses a session submits before giving up, by default.
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors that `wordle_auto` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("word rejected")]
    Word {
        #[from]
        kind: WordError,
    },

    #[error("feedback rejected")]
    Feedback {
        #[from]
        kind: FeedbackError,
    },

    #[error("dictionary source failed")]
    Dictionary {
        #[from]
        kind: DictionaryError,
    },

    #[error("board interaction failed")]
    Board {
        #[from]
        kind: BoardError,
    },

    #[error("report delivery failed")]
    Report {
        #[from]
        kind: ReportError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum WordError {
    /// The string provided when constructing a [`Word`] is not exactly
    /// five ASCII letters.
    #[error("the string \"{0}\" is not a five-letter word")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    /// A board handed back a feedback row with the wrong number of symbols.
    #[error("expected {expected} feedback symbols, got {got}")]
    WrongLength { expected: usize, got: usize },

    /// A character does not name any feedback symbol.
    #[error("the character {0:?} is not a feedback symbol")]
    UnknownSymbol(char),
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The source produced no usable five-letter words.
    #[error("the wordlist contains no usable words")]
    Empty,

    #[error("could not read wordlist")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "net")]
    #[error("wordlist download failed")]
    Fetch(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum BoardError {
    /// The board refused a submitted guess.
    #[error("the board rejected the guess \"{0}\"")]
    Rejected(String),

    /// The requested row has no feedback to read.
    #[error("no feedback available for row {0}")]
    RowUnavailable(usize),

    /// The underlying automation failed.
    #[error("board automation failed: {0}")]
    Automation(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report delivery failed: {0}")]
    Delivery(String),

    #[cfg(feature = "net")]
    #[error("report endpoint unreachable")]
    Http(#[from] reqwest::Error),
}
