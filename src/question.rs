//! A single multiple-choice question and its answer checking
//!
//! Options are shuffled once at construction and shown as 1-based display
//! positions. The correct answer is stored as the display position whose text
//! matches the bank's correct option, so grading never re-derives anything
//! from the raw record.

use rand::seq::SliceRandom;
use rand::Rng;
use std::io;

use crate::console::Console;
use crate::types::{Difficulty, QuestionId, QuestionRecord};

/// Errors while turning a raw bank record into a playable question.
///
/// These are data-integrity failures in the source bank and abort the load;
/// no partial game starts.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("question \"{question}\" needs at least 2 options")]
    TooFewOptions { question: String },

    #[error("question \"{question}\" has no option matching its correct answer")]
    UnmatchedCorrectAnswer { question: String },
}

/// A playable question with its options in final display order.
#[derive(Debug, Clone)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    category: String,
    difficulty: Difficulty,
    /// Index i holds the text shown at display position i + 1.
    options: Vec<String>,
    /// 1-based display position of the correct option. Fixed for the
    /// question's lifetime.
    correct_pos: usize,
}

impl Question {
    /// Build a question from a raw record, shuffling its options with the
    /// injected RNG.
    ///
    /// The record's `correct_answer` is resolved to literal text (option-key
    /// lookup first, else taken literally) and located among the shuffled
    /// options case-insensitively.
    pub fn from_record(record: QuestionRecord, rng: &mut impl Rng) -> Result<Self, QuestionError> {
        if record.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                question: record.question,
            });
        }

        let mut options: Vec<String> = record.options.values().cloned().collect();
        options.shuffle(rng);

        let correct_text = match record.options.get(&record.correct_answer) {
            Some(text) => text.clone(),
            None => record.correct_answer.clone(),
        };

        let wanted = correct_text.to_lowercase();
        let correct_pos = options
            .iter()
            .position(|option| option.to_lowercase() == wanted)
            .map(|index| index + 1)
            .ok_or_else(|| QuestionError::UnmatchedCorrectAnswer {
                question: record.question.clone(),
            })?;

        Ok(Self {
            id: ulid::Ulid::new().to_string(),
            prompt: record.question,
            category: record.category,
            difficulty: record.difficulty,
            options,
            correct_pos,
        })
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Option texts in display order (position 1 first).
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 1-based display position of the correct option.
    pub fn correct_position(&self) -> usize {
        self.correct_pos
    }

    /// Grade one submitted answer.
    ///
    /// A display number in range and any option text (case-insensitive) are
    /// final answers and return `Some(correct?)`. Anything else returns
    /// `None`: syntactically invalid, the caller should re-prompt.
    pub fn grade(&self, input: &str) -> Option<bool> {
        let input = input.trim();

        if let Ok(number) = input.parse::<usize>() {
            if (1..=self.options.len()).contains(&number) {
                return Some(number == self.correct_pos);
            }
            return None;
        }

        let lowered = input.to_lowercase();
        if self.options.iter().any(|o| o.to_lowercase() == lowered) {
            return Some(self.options[self.correct_pos - 1].to_lowercase() == lowered);
        }

        None
    }

    /// Present the question and block until a syntactically valid answer
    /// arrives, then report whether it was correct.
    ///
    /// A wrong answer is immediately final; only malformed input (out-of-range
    /// number, unrecognized text) re-prompts, with a corrective message.
    pub fn ask(&self, console: &mut dyn Console) -> io::Result<bool> {
        loop {
            console.say(&format!(
                "\nCategory: {}, Difficulty: {}",
                self.category, self.difficulty
            ))?;
            console.say(&self.prompt)?;
            for (index, option) in self.options.iter().enumerate() {
                console.say(&format!("\t{}. {}", index + 1, option))?;
            }

            let answer =
                console.prompt("\nEnter your answer (number or full text of the answer): ")?;

            match self.grade(&answer) {
                Some(correct) => return Ok(correct),
                None if answer.parse::<usize>().is_ok() => {
                    console.say(&format!(
                        "\nInvalid number. Please enter a number between 1 and {}",
                        self.options.len()
                    ))?;
                }
                None => {
                    console.say(
                        "\nInvalid answer. Please enter a valid number or the full text of your answer.",
                    )?;
                }
            }
        }
    }
}
