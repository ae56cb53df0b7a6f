//! Choosing the next guess.

use std::fmt::{Debug, Display};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{CandidateSet, Word};

/// The opening guess, played before any feedback exists.
///
/// A fixed, statistically strong opener amortizes better than recomputing
/// one over the full dictionary at the start of every run.
pub const OPENER: &str = "CRANE";

/// The guess played when no candidate survives, so a session can spend its
/// remaining attempts instead of aborting.
pub const SENTINEL: &str = "LUCKY";

/// Trait defining a guess-selection policy.
///
/// The session hands the policy the zero-based attempt index and the
/// current candidate set; the policy must always produce a word, even for
/// an empty set.
pub trait Strategy: Debug {
    fn next_guess(&mut self, attempt: usize, candidates: &CandidateSet) -> Word;
}

/// The stock policy: a fixed opener, then a uniformly random candidate.
///
/// Attempt 0 always plays the opener. Later attempts draw uniformly from
/// the surviving candidates, or play the sentinel when none survive.
///
/// # Examples
///
/// ```rust
/// use wordle_auto::{strategy::Uniform, CandidateSet, Strategy, Word};
///
/// let pool: CandidateSet = [Word::from_str("train")?].into_iter().collect();
/// let mut policy = Uniform::with_seed(7);
///
/// assert_eq!(&*policy.next_guess(0, &pool), "CRANE");
/// assert_eq!(&*policy.next_guess(1, &pool), "TRAIN");
/// #
/// # Ok::<_, wordle_auto::WordleError>(())
/// ```
#[derive(Debug)]
pub struct Uniform {
    opener: Word,
    sentinel: Word,
    rng: StdRng,
}

impl Uniform {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates the policy with a seeded random source, for reproducible
    /// runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Uniform {
            opener: Word::from_str(OPENER).expect("opener is a valid word"),
            sentinel: Word::from_str(SENTINEL).expect("sentinel is a valid word"),
            rng,
        }
    }

    /// Replaces the opening guess.
    pub fn opener(self, word: Word) -> Self {
        Uniform {
            opener: word,
            ..self
        }
    }

    /// Replaces the sentinel guess.
    pub fn sentinel(self, word: Word) -> Self {
        Uniform {
            sentinel: word,
            ..self
        }
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Uniform {
    fn next_guess(&mut self, attempt: usize, candidates: &CandidateSet) -> Word {
        if attempt == 0 {
            return self.opener;
        }

        match candidates.as_slice().choose(&mut self.rng) {
            Some(&word) => word,
            None => {
                log::warn!("no candidates remain, falling back to {}", self.sentinel);
                self.sentinel
            }
        }
    }
}

impl Display for Uniform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wordle_auto::Uniform (opener: {})", self.opener)
    }
}
