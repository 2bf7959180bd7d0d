use std::path::PathBuf;

pub const USAGE: &str = "Usage: quiznight <questions-file> <num-players>";

/// Command-line argument errors, reported before any game state exists.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("expected exactly two arguments: a questions file and the number of players")]
    WrongArgCount,

    #[error("number of players must be an integer")]
    PlayersNotANumber,

    #[error("number of players must be positive")]
    PlayersNotPositive,
}

/// Validated command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bank_path: PathBuf,
    pub player_count: usize,
}

impl Config {
    /// Parse the positional arguments (program name already stripped).
    pub fn from_args<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let bank_path = args.next().ok_or(UsageError::WrongArgCount)?;
        let players_raw = args.next().ok_or(UsageError::WrongArgCount)?;
        if args.next().is_some() {
            return Err(UsageError::WrongArgCount);
        }

        let players: i64 = players_raw
            .trim()
            .parse()
            .map_err(|_| UsageError::PlayersNotANumber)?;
        if players <= 0 {
            return Err(UsageError::PlayersNotPositive);
        }

        Ok(Self {
            bank_path: PathBuf::from(bank_path),
            player_count: players as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, UsageError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_valid_arguments() {
        let config = parse(&["questions.json", "3"]).unwrap();
        assert_eq!(config.bank_path, PathBuf::from("questions.json"));
        assert_eq!(config.player_count, 3);
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(parse(&[]), Err(UsageError::WrongArgCount));
        assert_eq!(parse(&["questions.json"]), Err(UsageError::WrongArgCount));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert_eq!(
            parse(&["questions.json", "2", "surplus"]),
            Err(UsageError::WrongArgCount)
        );
    }

    #[test]
    fn test_player_count_must_be_integer() {
        assert_eq!(
            parse(&["questions.json", "two"]),
            Err(UsageError::PlayersNotANumber)
        );
        assert_eq!(
            parse(&["questions.json", "2.5"]),
            Err(UsageError::PlayersNotANumber)
        );
    }

    #[test]
    fn test_player_count_must_be_positive() {
        assert_eq!(
            parse(&["questions.json", "0"]),
            Err(UsageError::PlayersNotPositive)
        );
        assert_eq!(
            parse(&["questions.json", "-2"]),
            Err(UsageError::PlayersNotPositive)
        );
    }
}
