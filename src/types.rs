use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque ID type for questions
pub type QuestionId = String;

/// Difficulty tiers a question can be filed under.
///
/// Ordered so menus always list easy before medium before hard.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One raw entry of the question bank file, as it appears on disk.
///
/// `options` maps an option key (e.g. "A") to the option text. The key order
/// is irrelevant once loaded; a BTreeMap keeps iteration deterministic so a
/// seeded RNG produces a reproducible shuffle.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: BTreeMap<String, String>,
    /// Either an option key or the literal text of the correct option
    /// (matched case-insensitively).
    pub correct_answer: String,
    pub category: String,
    pub difficulty: Difficulty,
}

/// A participant in the current game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self { name, score: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Award one point for a correct answer.
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
