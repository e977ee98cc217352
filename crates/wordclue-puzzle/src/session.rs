// Guessing session
//
// Puzzles are played in shuffled order, each with its clues shuffled. The
// player either guesses or asks for another clue (empty input or "hint").
// Running out of clues reveals the secret and moves on.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::record::PuzzleRecord;

/// Input that asks for the next clue, in addition to an empty line.
pub const HINT_COMMAND: &str = "hint";

/// What the session says back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A new puzzle starts; `solved` puzzles so far.
    Puzzle { solved: usize },
    Clue(String),
    Correct,
    Wrong,
    /// Clues exhausted; the answer is shown.
    Revealed { secret: String },
    /// Every puzzle has been played.
    Finished { score: usize, total: usize },
}

pub struct Session<R: Rng> {
    rng: R,
    puzzles: Vec<PuzzleRecord>,
    current: usize,
    clues: Vec<String>,
    clue_index: usize,
    score: usize,
    finished: bool,
}

impl<R: Rng> Session<R> {
    /// Start a session. `limit` caps the number of puzzles played and is
    /// ignored unless it lies in `1..=puzzles.len()`. Returns `None` when
    /// there is nothing to play.
    pub fn new(mut puzzles: Vec<PuzzleRecord>, limit: Option<usize>, mut rng: R) -> Option<Self> {
        puzzles.retain(|p| !p.clues().is_empty());
        if puzzles.is_empty() {
            return None;
        }
        puzzles.shuffle(&mut rng);
        if let Some(n) = limit.filter(|n| (1..=puzzles.len()).contains(n)) {
            puzzles.truncate(n);
        }
        let mut session = Self {
            rng,
            puzzles,
            current: 0,
            clues: Vec::new(),
            clue_index: 0,
            score: 0,
            finished: false,
        };
        session.deal_clues();
        Some(session)
    }

    fn deal_clues(&mut self) {
        self.clues = self.puzzles[self.current].clues().to_vec();
        self.clues.shuffle(&mut self.rng);
        self.clue_index = 0;
    }

    /// Replies that open the current puzzle: its banner and first clue.
    /// Empty once the session is finished.
    pub fn opening(&self) -> Vec<Reply> {
        if self.finished {
            return Vec::new();
        }
        let mut replies = vec![Reply::Puzzle { solved: self.score }];
        replies.extend(self.clues.get(self.clue_index).cloned().map(Reply::Clue));
        replies
    }

    /// Handle one line of player input.
    pub fn respond(&mut self, input: &str) -> Vec<Reply> {
        if self.finished {
            return Vec::new();
        }
        let guess = input.trim().to_lowercase();

        if guess.is_empty() || guess == HINT_COMMAND {
            self.clue_index += 1;
            if let Some(clue) = self.clues.get(self.clue_index) {
                return vec![Reply::Clue(clue.clone())];
            }
            let mut replies = vec![Reply::Revealed {
                secret: self.secret().to_string(),
            }];
            replies.extend(self.advance());
            return replies;
        }

        if guess == self.secret() {
            self.score += 1;
            let mut replies = vec![Reply::Correct];
            replies.extend(self.advance());
            return replies;
        }

        vec![Reply::Wrong]
    }

    fn advance(&mut self) -> Vec<Reply> {
        self.current += 1;
        if self.current >= self.puzzles.len() {
            self.finished = true;
            return vec![Reply::Finished {
                score: self.score,
                total: self.puzzles.len(),
            }];
        }
        self.deal_clues();
        self.opening()
    }

    fn secret(&self) -> &str {
        self.puzzles[self.current].secret()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Puzzles in this session (after any limit).
    pub fn total(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
