//! Plays one Wordle session end to end and reports the outcome.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use rand::seq::SliceRandom;

use wordle_auto::{
    board::{Board, SimulatedBoard},
    report::{LogReporter, Reporter, ReporterConfig, WebhookReporter},
    strategy::Uniform,
    words, BoardError, CandidateSet, Feedback, Outcome, Session, Word, DEFAULT_MAX_ATTEMPTS,
    WORD_LEN,
};

#[derive(Debug, Parser)]
#[command(name = "wordle_runner", version, about)]
struct Args {
    /// Play against this hidden answer instead of a random one.
    #[arg(long)]
    answer: Option<String>,

    /// Relay feedback by hand from a live board (G=green, Y=yellow,
    /// X=gray).
    #[arg(long, conflicts_with = "answer")]
    interactive: bool,

    /// Load the wordlist from a file instead of downloading it.
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Skip the download and play from the built-in wordbank.
    #[arg(long)]
    offline: bool,

    /// Seed guess selection for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Attempts the board allows.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Endpoint that receives the finished report.
    #[arg(long, env = "WORDLE_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Bearer token for the report endpoint.
    #[arg(long, env = "WORDLE_WEBHOOK_TOKEN", hide_env_values = true)]
    webhook_token: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dictionary = load_dictionary(&args)?;
    info!("playing with {} words", dictionary.len());

    let mut session = Session::new(dictionary.clone()).max_attempts(args.max_attempts);
    if let Some(seed) = args.seed {
        session = session.strategy(Box::new(Uniform::with_seed(seed)));
    }

    let report = if args.interactive {
        let stdin = io::stdin();
        let mut board = ManualBoard::new(stdin.lock());
        session.play(&mut board)
    } else {
        let answer = match &args.answer {
            Some(word) => Word::from_str(word)?,
            None => random_answer(&dictionary)?,
        };
        let mut board = SimulatedBoard::new(answer);
        session.play(&mut board)
    };

    println!("{}", report.summary());

    let delivery = match &args.webhook_url {
        Some(url) => WebhookReporter::new(ReporterConfig {
            url: url.clone(),
            token: args.webhook_token.clone(),
        })
        .deliver(&report),
        None => LogReporter.deliver(&report),
    };
    if let Err(e) = delivery {
        warn!("could not deliver report: {}", e);
    }

    if let Outcome::Failed { error } = report.outcome() {
        anyhow::bail!("session failed: {}", error);
    }
    Ok(())
}

fn load_dictionary(args: &Args) -> anyhow::Result<CandidateSet> {
    if let Some(path) = &args.wordlist {
        return words::load_from_file(path)
            .with_context(|| format!("reading wordlist {}", path.display()));
    }
    if args.offline {
        return Ok(words::builtin());
    }

    match words::fetch(words::WORD_LIST_URL) {
        Ok(set) => Ok(set),
        Err(e) => {
            warn!("wordlist download failed ({}), using built-in bank", e);
            Ok(words::builtin())
        }
    }
}

fn random_answer(dictionary: &CandidateSet) -> anyhow::Result<Word> {
    dictionary
        .as_slice()
        .choose(&mut rand::thread_rng())
        .copied()
        .context("the dictionary is empty")
}

/// A board driven by a person relaying colors from a live game.
#[derive(Debug)]
struct ManualBoard<R> {
    input: R,
}

impl<R: BufRead> ManualBoard<R> {
    fn new(input: R) -> Self {
        ManualBoard { input }
    }
}

impl<R: BufRead> Board for ManualBoard<R> {
    fn submit_guess(&mut self, guess: Word) -> Result<(), BoardError> {
        println!("Enter {} into the game.", guess);
        Ok(())
    }

    fn read_feedback(&mut self, attempt: usize) -> Result<Vec<Feedback>, BoardError> {
        loop {
            print!("Feedback for row {} (G/Y/X, e.g. GYXXG): ", attempt + 1);
            io::stdout()
                .flush()
                .map_err(|e| BoardError::Automation(e.to_string()))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| BoardError::Automation(e.to_string()))?;
            if read == 0 {
                return Err(BoardError::Automation("feedback input closed".into()));
            }

            match Feedback::parse_row(&line) {
                Ok(row) if row.len() == WORD_LEN => return Ok(row),
                _ => println!("Please enter exactly five of G, Y, or X."),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn manual_board_retries_until_a_valid_row() {
        let input = Cursor::new("banana\nGGG\nGYXXG\n");
        let mut board = ManualBoard::new(input);

        use Feedback::*;
        assert_eq!(
            board.read_feedback(0).unwrap(),
            vec![Correct, Present, Absent, Absent, Correct]
        );
    }

    #[test]
    fn manual_board_fails_when_input_closes() {
        let mut board = ManualBoard::new(Cursor::new(""));
        assert!(board.read_feedback(0).is_err());
    }
}
