//! Words, candidate sets, and wordlist acquisition.

use std::{
    fmt::{self, Debug, Display},
    fs::File,
    io::{BufRead, BufReader},
    ops::Deref,
    path::Path,
};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DictionaryError, Result, WordError, WORD_LEN};

/// The published wordlist a live deployment plays against.
pub const WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";

const BUILTIN: &str = include_str!("resources/wordbank.txt");

/// A playable five-letter word.
///
/// Construction is validated so that every instance holds exactly five
/// ASCII letters, stored uppercase. Lowercase input is folded.
///
/// # Examples
///
/// ```rust
/// # use std::ops::Deref;
/// # use wordle_auto::Word;
/// #
/// let crane = Word::from_str("crane")?;
/// assert_eq!(crane.deref(), "CRANE");
///
/// assert!(Word::from_str("too long").is_err());
/// #
/// # Ok::<_, wordle_auto::WordleError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

impl Word {
    /// Creates a new [`Word`] from a five-letter string.
    ///
    /// Returns an error if the string is not exactly five ASCII letters.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(word: &str) -> Result<Self> {
        let bytes = word.as_bytes();
        if bytes.len() != WORD_LEN || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::Malformed(word.to_string()).into());
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_uppercase();
        }
        Ok(Word { letters })
    }

    pub(crate) fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Counts the occurrences of an ASCII uppercase `letter` in this word.
    pub(crate) fn count(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&b| b == letter).count()
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // letters are validated ASCII at construction
        std::str::from_utf8(&self.letters).expect("word holds ASCII letters")
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.deref())
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.deref())
    }
}

/// The words still possibly the answer.
///
/// Candidate sets are duplicate-free and order-irrelevant. Filtering never
/// grows one: each application of [`filter`](crate::filter) returns a
/// subset of its input, leaving the input untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Creates a set from any word source, dropping duplicates.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        CandidateSet {
            words: words.into_iter().unique().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        CandidateSet::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Parses a wordlist, keeping only lines that form valid words.
pub fn parse_wordlist(data: &str) -> CandidateSet {
    data.lines()
        .filter_map(|line| Word::from_str(line.trim()).ok())
        .collect()
}

/// The wordbank compiled into the library.
///
/// Small compared to the published list, but enough to play offline and to
/// keep a run alive when the download fails.
pub fn builtin() -> CandidateSet {
    parse_wordlist(BUILTIN)
}

/// Loads a wordlist from a file, one word per line.
///
/// Lines that do not form valid words are skipped; an entirely unusable
/// file is an error.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<CandidateSet, DictionaryError> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Ok(word) = Word::from_str(line?.trim()) {
            words.push(word);
        }
    }

    let set = CandidateSet::new(words);
    if set.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(set)
}

/// Downloads a wordlist from `url`.
#[cfg(feature = "net")]
pub fn fetch(url: &str) -> Result<CandidateSet, DictionaryError> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;

    let set = parse_wordlist(&body);
    if set.is_empty() {
        return Err(DictionaryError::Empty);
    }
    log::info!("downloaded {} words from {}", set.len(), url);
    Ok(set)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_fold_to_uppercase() {
        let word = Word::from_str("crane").unwrap();
        assert_eq!(&*word, "CRANE");
        assert_eq!(word, Word::from_str("CRANE").unwrap());
    }

    #[test]
    fn malformed_words_are_rejected() {
        for bad in ["", "car", "cranes", "cr4ne", "crâne"] {
            assert!(Word::from_str(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn candidate_sets_drop_duplicates() {
        let set = parse_wordlist("crane\nCRANE\ntrain\n crane \n");
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Word::from_str("TRAIN").unwrap()));
    }

    #[test]
    fn parsing_skips_unusable_lines() {
        let set = parse_wordlist("# comment\ncrane\nxy\n12345\ntrain");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn builtin_bank_is_usable() {
        let set = builtin();
        assert!(set.len() > 100);
        assert!(set.contains(&Word::from_str("CRANE").unwrap()));
    }
}
