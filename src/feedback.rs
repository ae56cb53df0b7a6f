//! Per-letter feedback and guess records.

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FeedbackError, Result, Word, WORD_LEN};

/// The outcome of one letter of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Feedback {
    /// The letter is in the word, at this position.
    Correct,

    /// The letter is in the word, at some other position.
    Present,

    /// The word has no unclaimed copies of the letter.
    Absent,
}

impl Feedback {
    /// Parses a feedback symbol.
    ///
    /// Accepts the letter forms `G`/`Y`/`X` (green, yellow, gray; `B` for
    /// black is also taken) and the digit forms `2`/`1`/`0`, in either
    /// case.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Ok(Feedback::Correct),
            'y' | '1' => Ok(Feedback::Present),
            'x' | 'b' | '0' => Ok(Feedback::Absent),
            _ => Err(FeedbackError::UnknownSymbol(c).into()),
        }
    }

    /// Parses a full row of feedback symbols, e.g. `"GYXXG"`.
    pub fn parse_row(row: &str) -> Result<Vec<Self>> {
        row.trim().chars().map(Feedback::from_char).collect()
    }

    /// The colored tile used when rendering a guess.
    pub fn tile(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Grades `guess` against a known `answer`.
    ///
    /// Correct positions claim their letters first; the remaining letters
    /// of the guess are then marked `Present` while unclaimed copies are
    /// left in the answer. A letter never earns more `Correct` and
    /// `Present` marks together than the answer holds copies of it, so
    /// guessing `spool` against `sober` yields `Present` for the first `o`
    /// and `Absent` for the second.
    pub fn grade(guess: &Word, answer: &Word) -> [Feedback; WORD_LEN] {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut feedback = [Feedback::Absent; WORD_LEN];
        let mut remaining = [0u8; 26];

        for i in 0..WORD_LEN {
            if guess[i] == answer[i] {
                feedback[i] = Feedback::Correct;
            } else {
                remaining[(answer[i] - b'A') as usize] += 1;
            }
        }

        for i in 0..WORD_LEN {
            if feedback[i] == Feedback::Correct {
                continue;
            }
            let left = &mut remaining[(guess[i] - b'A') as usize];
            if *left > 0 {
                feedback[i] = Feedback::Present;
                *left -= 1;
            }
        }

        feedback
    }
}

/// A submitted word together with the feedback it earned.
///
/// Records are immutable once constructed; a session's history is an
/// append-only sequence of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GuessRecord {
    word: Word,
    feedback: [Feedback; WORD_LEN],
}

impl GuessRecord {
    /// Records the feedback a guess earned.
    ///
    /// The slice must hold exactly one symbol per letter; anything else is
    /// a board handing back a malformed row.
    pub fn new(word: Word, feedback: &[Feedback]) -> Result<Self> {
        let feedback: [Feedback; WORD_LEN] =
            feedback
                .try_into()
                .map_err(|_| FeedbackError::WrongLength {
                    expected: WORD_LEN,
                    got: feedback.len(),
                })?;
        Ok(GuessRecord { word, feedback })
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn feedback(&self) -> &[Feedback; WORD_LEN] {
        &self.feedback
    }

    /// True when every position is [`Feedback::Correct`].
    pub fn is_win(&self) -> bool {
        self.feedback.iter().all(|&f| f == Feedback::Correct)
    }

    /// The tile rendering of the feedback row.
    pub fn tiles(&self) -> String {
        self.feedback.iter().map(|f| f.tile()).collect()
    }
}

impl Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.tiles())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn word(s: &str) -> Word {
        Word::from_str(s).unwrap()
    }

    fn row(s: &str) -> [Feedback; WORD_LEN] {
        let mut res = [Feedback::Absent; WORD_LEN];
        for (i, c) in s.chars().enumerate() {
            match c {
                'c' => res[i] = Feedback::Correct,
                'p' => res[i] = Feedback::Present,
                _ => {}
            }
        }
        res
    }

    macro_rules! grade_test {
        ($fn_name:ident[$answer:expr => $( [$guess:expr, $res:expr] );*]) => {
            #[test]
            fn $fn_name() {
                $(assert_eq!(
                    Feedback::grade(&word($guess), &word($answer)),
                    row($res),
                    "grading {} against {}",
                    $guess,
                    $answer,
                );)*
            }
        };
    }

    grade_test! { repeat_letter_guesses["sober" =>
        ["spool", "capaa"];
        ["soaks", "ccaaa"]]
    }

    grade_test! { repeat_letter_answer["spoon" =>
        ["odors", "pacap"]]
    }

    grade_test! { repeat_before_correct["tills" =>
        ["pines", "acaac"];
        ["sills", "acccc"]]
    }

    grade_test! { exact_match["crane" =>
        ["crane", "ccccc"]]
    }

    grade_test! { no_overlap["crimp" =>
        ["bolts", "aaaaa"]]
    }

    #[test]
    fn wrong_length_rows_are_rejected() {
        let short = [Feedback::Correct; 3];
        assert!(GuessRecord::new(word("crane"), &short).is_err());
    }

    #[test]
    fn symbol_parsing_round_trips_both_alphabets() {
        assert_eq!(
            Feedback::parse_row("GYXyg").unwrap(),
            Feedback::parse_row("21012").unwrap()
        );
        assert!(Feedback::from_char('q').is_err());
    }

    #[test]
    fn win_detection() {
        let record = GuessRecord::new(word("crane"), &[Feedback::Correct; WORD_LEN]).unwrap();
        assert!(record.is_win());
        assert_eq!(record.to_string(), "CRANE (🟩🟩🟩🟩🟩)");

        let record =
            GuessRecord::new(word("crane"), &Feedback::grade(&word("crane"), &word("train")))
                .unwrap();
        assert!(!record.is_win());
    }
}
