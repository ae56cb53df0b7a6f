//! Narrowing the candidate set with recorded feedback.

use crate::{CandidateSet, Feedback, GuessRecord, Word, WORD_LEN};

/// Returns the candidates consistent with `record`.
///
/// The input set is left untouched; callers replace their set with the
/// returned one. An empty input yields an empty output, never an error.
///
/// A letter's `Correct` and `Present` marks claim copies of that letter: a
/// surviving word must hold at least the claimed copies, and once any
/// position of the letter is marked `Absent`, no more than them. A guess
/// holding a letter twice, once `Absent` and once `Correct` or `Present`,
/// therefore keeps words with exactly one copy instead of dropping them.
pub fn filter(candidates: &CandidateSet, record: &GuessRecord) -> CandidateSet {
    let guess = record.word();
    let mut claims = [0u8; 26];
    for (&letter, &fb) in guess.letters().iter().zip(record.feedback()) {
        if fb != Feedback::Absent {
            claims[(letter - b'A') as usize] += 1;
        }
    }

    candidates
        .iter()
        .filter(|word| survives(word, record, &claims))
        .copied()
        .collect()
}

fn survives(word: &Word, record: &GuessRecord, claims: &[u8; 26]) -> bool {
    let guess = record.word();
    let guess = guess.letters();
    let letters = word.letters();

    for i in 0..WORD_LEN {
        let letter = guess[i];
        let claimed = claims[(letter - b'A') as usize] as usize;
        let held = word.count(letter);

        let passes = match record.feedback()[i] {
            Feedback::Correct => letters[i] == letter,
            Feedback::Present => letters[i] != letter && held >= claimed,
            Feedback::Absent => letters[i] != letter && held <= claimed,
        };
        if !passes {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(list: &[&str]) -> CandidateSet {
        list.iter().map(|w| Word::from_str(w).unwrap()).collect()
    }

    fn record(guess: &str, row: &str) -> GuessRecord {
        GuessRecord::new(
            Word::from_str(guess).unwrap(),
            &Feedback::parse_row(row).unwrap(),
        )
        .unwrap()
    }

    macro_rules! filter_test {
        ($fn_name:ident[$guess:expr, $row:expr; $pool:expr => $expect:expr]) => {
            #[test]
            fn $fn_name() {
                let result = filter(&words(&$pool), &record($guess, $row));
                assert_eq!(result, words(&$expect));
            }
        };
    }

    filter_test! { all_absent_excludes_every_letter[
        "crane", "XXXXX";
        ["crane", "train", "ghost", "moody", "spilt"] => ["ghost", "moody", "spilt"]]
    }

    filter_test! { present_letter_must_move[
        "crane", "YXXXX";
        ["mucky", "touch", "cloud", "brace"] => ["mucky", "touch"]]
    }

    filter_test! { correct_positions_pin_letters[
        "crane", "GGXGG";
        ["crane", "train", "brain", "grain"] => []]
    }

    filter_test! { part_claimed_repeat_keeps_single_copy[
        "erase", "YXXXX";
        ["money", "ember", "spend"] => ["money"]]
    }

    filter_test! { repeat_with_correct_and_absent[
        "soaks", "GGGXX";
        ["soapy", "soaps"] => ["soapy"]]
    }

    filter_test! { mixed_row_narrows_to_consistent_words[
        "crane", "XGXXY";
        ["wrest", "press", "brine", "crepe"] => ["wrest", "press"]]
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty = CandidateSet::default();
        assert!(filter(&empty, &record("crane", "GGGGG")).is_empty());
    }

    #[test]
    fn input_set_is_not_mutated() {
        let pool = words(&["crane", "train", "ghost"]);
        let _ = filter(&pool, &record("crane", "XXXXX"));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn filtering_matches_true_grading() {
        let pool = words(&["crane", "train", "brain", "grain", "slate"]);
        let answer = Word::from_str("train").unwrap();
        let guess = Word::from_str("crane").unwrap();

        let rec = GuessRecord::new(guess, &Feedback::grade(&guess, &answer)).unwrap();
        let filtered = filter(&pool, &rec);

        assert!(filtered.contains(&answer));
        assert_eq!(filtered, words(&["train", "brain", "grain"]));
    }

    #[test]
    fn repeated_application_is_idempotent() {
        let pool = words(&["crane", "train", "brain", "grain", "ocean"]);
        let rec = record("slate", "XXYXY");

        let once = filter(&pool, &rec);
        let twice = filter(&once, &rec);
        assert_eq!(once, twice);
    }
}
