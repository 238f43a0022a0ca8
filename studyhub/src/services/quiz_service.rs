use crate::models::{QuizQuestion, OPTION_COUNT};
use rand::seq::SliceRandom;

/// A session plays at most this many questions, fewer when the bank is
/// smaller.
pub const SESSION_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The bank was empty at session start; no play is possible.
    Empty,
    InProgress,
    Finished,
}

/// One pass through a fixed subset of the question bank.
///
/// The session owns a snapshot of the drawn questions taken at start, so
/// later edits to the bank cannot affect a run in progress. All operation
/// preconditions are enforced here as no-ops: an out-of-order call never
/// panics and never corrupts the score.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    cursor: usize,
    selected: Option<usize>,
    submitted: bool,
    score: u32,
    finished: bool,
}

impl QuizSession {
    /// Draws `min(SESSION_SIZE, |bank|)` questions without replacement from
    /// a uniformly shuffled permutation of the bank. Restart is the same
    /// call again: it discards all prior session state.
    pub fn start(bank: &[QuizQuestion]) -> Self {
        let mut drawn = bank.to_vec();
        drawn.shuffle(&mut rand::rng());
        drawn.truncate(SESSION_SIZE);

        tracing::debug!(
            "Quiz session started with {} of {} questions",
            drawn.len(),
            bank.len()
        );

        Self {
            questions: drawn,
            cursor: 0,
            selected: None,
            submitted: false,
            score: 0,
            finished: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.questions.is_empty() {
            SessionState::Empty
        } else if self.finished {
            SessionState::Finished
        } else {
            SessionState::InProgress
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state() {
            SessionState::InProgress => self.questions.get(self.cursor),
            _ => None,
        }
    }

    /// Records the pending answer for the current question. Ignored once the
    /// question has been submitted: submission is a one-way gate.
    pub fn select_option(&mut self, index: usize) {
        if self.state() != SessionState::InProgress || self.submitted || index >= OPTION_COUNT {
            return;
        }
        self.selected = Some(index);
    }

    /// Grades the pending answer. The submitted flag gates the score update,
    /// so calling this twice can never double-count, and calling it with no
    /// selection does nothing.
    pub fn submit(&mut self) {
        if self.state() != SessionState::InProgress || self.submitted {
            return;
        }
        let Some(selected) = self.selected else {
            return;
        };
        let Some(question) = self.questions.get(self.cursor) else {
            return;
        };

        if selected == question.correct_answer_index {
            self.score += 1;
        }
        self.submitted = true;
    }

    /// Moves to the next question, or straight to the finished state when
    /// the current question is the last one. Requires the current question
    /// to have been submitted.
    pub fn advance(&mut self) {
        if self.state() != SessionState::InProgress || !self.submitted {
            return;
        }
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            self.selected = None;
            self.submitted = false;
        } else {
            self.finished = true;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the submitted answer was correct. None before submission.
    pub fn answered_correctly(&self) -> Option<bool> {
        if !self.submitted {
            return None;
        }
        let question = self.questions.get(self.cursor)?;
        Some(self.selected == Some(question.correct_answer_index))
    }
}
