mod bank;
mod player;
mod score;

use rand::Rng;
use std::collections::BTreeMap;

use crate::question::{Question, QuestionError};
use crate::types::{Difficulty, Player, QuestionRecord};

/// Owned game state: the question bank plus the player roster.
///
/// The bank maps category -> difficulty -> remaining questions. Invariant:
/// every difficulty list present is non-empty; empty lists and categories are
/// pruned as soon as a removal leaves them behind. The game is over once the
/// outer map is empty.
#[derive(Debug)]
pub struct GameState {
    bank: BTreeMap<String, BTreeMap<Difficulty, Vec<Question>>>,
    players: Vec<Player>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            bank: BTreeMap::new(),
            players: Vec::new(),
        }
    }

    /// Build a bank from raw records, shuffling each question's options with
    /// the injected RNG. Fails on the first record that cannot be turned into
    /// a playable question.
    pub fn from_records(
        records: Vec<QuestionRecord>,
        rng: &mut impl Rng,
    ) -> Result<Self, QuestionError> {
        let mut state = Self::new();
        for record in records {
            let question = Question::from_record(record, rng)?;
            state.insert_question(question);
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::BTreeMap as Map;

    pub fn record(
        question: &str,
        options: &[(&str, &str)],
        correct: &str,
        category: &str,
        difficulty: Difficulty,
    ) -> QuestionRecord {
        QuestionRecord {
            question: question.to_string(),
            options: options
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Map<_, _>>(),
            correct_answer: correct.to_string(),
            category: category.to_string(),
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_records_groups_by_category_and_difficulty() {
        let mut rng = StdRng::seed_from_u64(0);
        let state = GameState::from_records(
            vec![
                record(
                    "Capital of France?",
                    &[("A", "Paris"), ("B", "Rome")],
                    "A",
                    "Geography",
                    Difficulty::Easy,
                ),
                record(
                    "2 + 2?",
                    &[("A", "4"), ("B", "5")],
                    "A",
                    "Math",
                    Difficulty::Easy,
                ),
                record(
                    "Derivative of x^2?",
                    &[("A", "2x"), ("B", "x")],
                    "A",
                    "Math",
                    Difficulty::Hard,
                ),
            ],
            &mut rng,
        )
        .unwrap();

        assert_eq!(state.question_count(), 3);
        assert_eq!(state.available_categories(), vec!["Geography", "Math"]);
        assert_eq!(
            state.available_difficulties("Math"),
            vec![Difficulty::Easy, Difficulty::Hard]
        );
        assert_eq!(
            state.available_difficulties("Geography"),
            vec![Difficulty::Easy]
        );
    }

    #[test]
    fn test_from_records_propagates_bad_record() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = GameState::from_records(
            vec![record(
                "Broken?",
                &[("A", "Yes"), ("B", "No")],
                "Maybe",
                "Misc",
                Difficulty::Easy,
            )],
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(QuestionError::UnmatchedCorrectAnswer { .. })
        ));
    }

    #[test]
    fn test_new_state_is_exhausted() {
        let state = GameState::new();
        assert!(state.is_exhausted());
        assert_eq!(state.question_count(), 0);
        assert!(state.available_categories().is_empty());
    }
}
