//! Question bank loading
//!
//! The bank is a JSON array of records (see [`QuestionRecord`]). Any
//! structural problem — unreadable file, malformed JSON, a record that cannot
//! become a playable question — aborts the load.

use rand::Rng;
use std::fs;
use std::path::Path;

use crate::question::QuestionError;
use crate::state::GameState;
use crate::types::QuestionRecord;

/// Errors while loading the question bank file.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error("question file contains no questions")]
    Empty,
}

/// Read and parse the raw records of a bank file.
pub fn read_records(path: &Path) -> Result<Vec<QuestionRecord>, BankError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<QuestionRecord> = serde_json::from_str(&raw)?;
    if records.is_empty() {
        return Err(BankError::Empty);
    }
    tracing::info!(
        "Loaded {} question records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Load a bank file into a ready [`GameState`], shuffling each question's
/// options with the injected RNG.
pub fn load_bank(path: &Path, rng: &mut impl Rng) -> Result<GameState, BankError> {
    let records = read_records(path)?;
    let state = GameState::from_records(records, rng)?;
    tracing::info!(
        "Question bank ready: {} questions across {} categories",
        state.question_count(),
        state.available_categories().len()
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn bank_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const VALID_BANK: &str = r#"[
        {
            "question": "What is the capital of France?",
            "options": {"A": "Paris", "B": "Rome"},
            "correct_answer": "A",
            "category": "Geography",
            "difficulty": "easy"
        },
        {
            "question": "What is 6 times 7?",
            "options": {"A": "42", "B": "36", "C": "48"},
            "correct_answer": "42",
            "category": "Math",
            "difficulty": "medium"
        }
    ]"#;

    #[test]
    fn test_load_valid_bank() {
        let file = bank_file(VALID_BANK);
        let mut rng = StdRng::seed_from_u64(17);

        let state = load_bank(file.path(), &mut rng).unwrap();
        assert_eq!(state.question_count(), 2);
        assert_eq!(state.available_categories(), vec!["Geography", "Math"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut rng = StdRng::seed_from_u64(17);
        let result = load_bank(Path::new("/no/such/file.json"), &mut rng);
        assert!(matches!(result, Err(BankError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = bank_file("{ this is not json ]");
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            load_bank(file.path(), &mut rng),
            Err(BankError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let file = bank_file(
            r#"[{"question": "Q?", "options": {"A": "x", "B": "y"}, "category": "Misc", "difficulty": "easy"}]"#,
        );
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            load_bank(file.path(), &mut rng),
            Err(BankError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_difficulty_is_parse_error() {
        let file = bank_file(
            r#"[{"question": "Q?", "options": {"A": "x", "B": "y"}, "correct_answer": "A", "category": "Misc", "difficulty": "brutal"}]"#,
        );
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            load_bank(file.path(), &mut rng),
            Err(BankError::Parse(_))
        ));
    }

    #[test]
    fn test_unmatched_correct_answer_fails_construction() {
        let file = bank_file(
            r#"[{"question": "Q?", "options": {"A": "x", "B": "y"}, "correct_answer": "z", "category": "Misc", "difficulty": "easy"}]"#,
        );
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            load_bank(file.path(), &mut rng),
            Err(BankError::Question(QuestionError::UnmatchedCorrectAnswer { .. }))
        ));
    }

    #[test]
    fn test_single_option_fails_construction() {
        let file = bank_file(
            r#"[{"question": "Q?", "options": {"A": "x"}, "correct_answer": "A", "category": "Misc", "difficulty": "easy"}]"#,
        );
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            load_bank(file.path(), &mut rng),
            Err(BankError::Question(QuestionError::TooFewOptions { .. }))
        ));
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let file = bank_file("[]");
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            load_bank(file.path(), &mut rng),
            Err(BankError::Empty)
        ));
    }
}
