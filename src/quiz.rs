use chrono::prelude::*;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::app_dirs::AppDirs;
use crate::history::{AnswerEvent, HistoryDb};
use crate::util::percentage;

/// Scores at or above this fire the confetti burst
pub const CELEBRATION_THRESHOLD: u8 = 80;

/// One multiple-choice question, authored in the embedded topic files
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// Feedback tier for a finished quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Average,
    NeedsReview,
}

impl Tier {
    pub fn for_percentage(percentage: u8) -> Self {
        if percentage >= 90 {
            Tier::Excellent
        } else if percentage >= 70 {
            Tier::Good
        } else if percentage >= 50 {
            Tier::Average
        } else {
            Tier::NeedsReview
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tier::Excellent => "🏆",
            Tier::Good => "🎖",
            Tier::Average => "👍",
            Tier::NeedsReview => "📖",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent! You've mastered this topic!",
            Tier::Good => "Good job! Keep practicing!",
            Tier::Average => "Not bad! Review the topics and try again.",
            Tier::NeedsReview => "Keep learning! Review the material and try again.",
        }
    }
}

/// Derived result of a finished quiz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub tier: Tier,
}

impl QuizOutcome {
    pub fn celebrates(self) -> bool {
        self.percentage >= CELEBRATION_THRESHOLD
    }
}

/// A quiz being presented to the learner. One question is shown at a
/// time; the first answer to a question is final. Invalid operations
/// are silent no-ops so a stray keypress never interrupts the flow.
#[derive(Debug)]
pub struct QuizSession {
    pub topic: String,
    questions: Vec<Question>,
    pub current_index: usize,
    answers: Vec<Option<usize>>,
    score: usize,
    pub review_mode: bool,
    pub history_db: Option<HistoryDb>,
}

impl QuizSession {
    pub fn new(topic: String, questions: Vec<Question>) -> Self {
        let history_db = HistoryDb::new().ok();
        Self::with_history(topic, questions, history_db)
    }

    /// Construct with an explicit (or absent) history backend
    pub fn with_history(
        topic: String,
        questions: Vec<Question>,
        history_db: Option<HistoryDb>,
    ) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            topic,
            questions,
            current_index: 0,
            answers,
            score: 0,
            review_mode: false,
            history_db,
        }
    }

    pub fn from_topic(topic: &crate::content::Topic) -> Self {
        Self::new(topic.name.clone(), topic.questions.clone())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answer(index).is_some()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Record the first answer for the current question. Re-answering,
    /// out-of-range indices, and selections in review mode are ignored.
    pub fn select_option(&mut self, option_index: usize) {
        if self.review_mode || self.answers[self.current_index].is_some() {
            return;
        }
        let question = &self.questions[self.current_index];
        if option_index >= question.options.len() {
            return;
        }

        let was_correct = option_index == question.correct;
        self.answers[self.current_index] = Some(option_index);
        if was_correct {
            self.score += 1;
        }

        if let Some(ref history_db) = self.history_db {
            let event = AnswerEvent {
                topic: self.topic.clone(),
                question_index: self.current_index,
                selected: option_index,
                was_correct,
                timestamp: Local::now(),
            };
            let _ = history_db.record_answer(&event);
        }
    }

    pub fn next_question(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    pub fn prev_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Finish the quiz. Only valid from the last question; unanswered
    /// questions count as wrong.
    pub fn show_results(&self) -> Option<QuizOutcome> {
        if !self.is_last() {
            return None;
        }

        let total = self.total();
        let pct = percentage(self.score, total);
        Some(QuizOutcome {
            score: self.score,
            total,
            percentage: pct,
            tier: Tier::for_percentage(pct),
        })
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answers = vec![None; self.questions.len()];
        self.score = 0;
        self.review_mode = false;
    }

    /// Walk the answered questions again from the start. Presentation
    /// only; the answer map is untouched.
    pub fn review_answers(&mut self) {
        self.review_mode = true;
        self.current_index = 0;
    }

    /// Append one line to the results log under the config dir
    pub fn save_results(&self, outcome: &QuizOutcome) -> io::Result<()> {
        if let Some(log_path) = AppDirs::results_log_path() {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // If the log file doesn't exist, we need to emit a header
            let needs_header = !log_path.exists();

            let mut log_file = OpenOptions::new()
                .write(true)
                .append(true)
                .create(true)
                .open(log_path)?;

            if needs_header {
                writeln!(log_file, "date,topic,score,total,percentage")?;
            }

            writeln!(
                log_file,
                "{},{},{},{},{}",
                Local::now().format("%c"),
                self.topic,
                outcome.score,
                outcome.total,
                outcome.percentage,
            )?;
        }

        Ok(())
    }
}
