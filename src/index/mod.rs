//! Word indexing
//!
//! A `WordIndex` filters a raw wordlist down to the words that are legal for
//! one puzzle and keeps them in two lookup structures: by first letter (for
//! chain extension) and by distinct-letter count (for first-word ranking).

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::core::{LetterSet, Puzzle, SolverError};

/// Words of this length or shorter are rejected
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Validated words for one puzzle, indexed for the chain search
///
/// Built once from a wordlist source; read-only afterward. Each word is
/// validated and inserted independently, so any line-oriented source can be
/// streamed through [`WordIndex::insert`].
///
/// Words are not case-normalized here: input is assumed pre-lowercased, and
/// a word with a capitalized first letter is rejected as a proper noun.
#[derive(Debug, Clone)]
pub struct WordIndex {
    puzzle: Puzzle,
    min_length: usize,
    by_first_letter: FxHashMap<u8, BTreeSet<String>>,
    by_unique_count: BTreeMap<usize, BTreeSet<String>>,
}

impl WordIndex {
    /// Create an empty index for a puzzle with the default minimum length
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_min_length(puzzle, DEFAULT_MIN_LENGTH)
    }

    /// Create an empty index with a minimum-length override
    ///
    /// Accepted words are strictly longer than `min_length`.
    #[must_use]
    pub fn with_min_length(puzzle: Puzzle, min_length: usize) -> Self {
        Self {
            puzzle,
            min_length,
            by_first_letter: FxHashMap::default(),
            by_unique_count: BTreeMap::new(),
        }
    }

    /// The puzzle this index was built for
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The minimum-length bound words must strictly exceed
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Check whether a word is playable in this puzzle
    ///
    /// A word is accepted iff its first letter is not uppercase (proper
    /// nouns), it is strictly longer than the minimum length, every letter
    /// is on the box, and no two consecutive letters share an edge. Pure
    /// predicate; empty and otherwise noisy input simply fails.
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        if word.chars().next().is_some_and(char::is_uppercase) {
            return false;
        }

        if word.len() <= self.min_length {
            return false;
        }

        if !word.bytes().all(|byte| self.puzzle.allowed().contains(byte)) {
            return false;
        }

        !word
            .as_bytes()
            .windows(2)
            .any(|pair| self.puzzle.has_forbidden_pair([pair[0], pair[1]]))
    }

    /// Insert a word into both indexes if it is valid; no-op otherwise
    ///
    /// Idempotent: the underlying containers are sets.
    pub fn insert(&mut self, word: &str) {
        if !self.is_valid(word) {
            return;
        }

        let first = word.as_bytes()[0];
        let unique = LetterSet::from_word(word).len();

        self.by_first_letter
            .entry(first)
            .or_default()
            .insert(word.to_string());
        self.by_unique_count
            .entry(unique)
            .or_default()
            .insert(word.to_string());
    }

    /// Insert every word from an iterator of candidates
    pub fn insert_all<'w, I: IntoIterator<Item = &'w str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }

    /// Build the index from a line-oriented wordlist file
    ///
    /// Each line is trimmed and inserted in source order; lines that fail
    /// validation are skipped silently.
    ///
    /// # Errors
    /// Returns [`SolverError::WordlistUnavailable`] if the file cannot be
    /// opened or read.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SolverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SolverError::WordlistUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        self.insert_all(content.lines().map(str::trim));
        Ok(())
    }

    /// Whether a word was accepted into the index
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.as_bytes().first().is_some_and(|first| {
            self.by_first_letter
                .get(first)
                .is_some_and(|words| words.contains(word))
        })
    }

    /// Number of accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_first_letter.values().map(BTreeSet::len).sum()
    }

    /// Whether the index holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_first_letter.is_empty()
    }

    /// Indexed words beginning with the given letter, alphabetically
    pub fn words_starting_with(&self, first: u8) -> impl Iterator<Item = &str> {
        self.by_first_letter
            .get(&first)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// All indexed words, ordered by descending distinct-letter count and
    /// alphabetically within a count
    pub fn words_by_distinct_letters(&self) -> impl Iterator<Item = &str> {
        self.by_unique_count
            .values()
            .rev()
            .flat_map(|words| words.iter().map(String::as_str))
    }
}
