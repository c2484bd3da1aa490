//! Solver error types

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while preparing a puzzle or its wordlist
///
/// Noisy wordlist lines are not errors; they fail validation and are
/// skipped. Construction problems surface here and are propagated to the
/// caller.
#[derive(Debug)]
pub enum SolverError {
    /// The edge strings do not describe a usable puzzle
    InvalidPuzzleDefinition(String),
    /// The wordlist source could not be opened or read
    WordlistUnavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPuzzleDefinition(reason) => {
                write!(f, "invalid puzzle definition: {reason}")
            }
            Self::WordlistUnavailable { path, source } => {
                write!(f, "wordlist '{}' unavailable: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPuzzleDefinition(_) => None,
            Self::WordlistUnavailable { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_puzzle_message_names_the_reason() {
        let err = SolverError::InvalidPuzzleDefinition("edges contain no letters".to_string());
        assert_eq!(
            err.to_string(),
            "invalid puzzle definition: edges contain no letters"
        );
    }

    #[test]
    fn wordlist_unavailable_carries_the_io_source() {
        let err = SolverError::WordlistUnavailable {
            path: PathBuf::from("words/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("words/missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
