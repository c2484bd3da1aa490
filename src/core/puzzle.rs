//! Puzzle definition
//!
//! A `Puzzle` captures the box edges, the set of playable letters, and the
//! ordered letter pairs that may never appear consecutively inside a word.

use rustc_hash::FxHashSet;

use super::{LetterSet, SolverError};

/// A Letter-Boxed puzzle derived from its edge strings
///
/// Both the allowed letter set and the forbidden pair set are computed once
/// at construction and never change afterward.
#[derive(Debug, Clone)]
pub struct Puzzle {
    edges: Vec<String>,
    allowed: LetterSet,
    forbidden_pairs: FxHashSet<[u8; 2]>,
}

impl Puzzle {
    /// Build a puzzle from its edge strings
    ///
    /// Edges are lowercased. Every ordered pair of letters drawn from the
    /// same edge becomes forbidden, doubled letters included, so an edge
    /// `"abc"` contributes `aa ab ac ba bb bc ca cb cc`.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidPuzzleDefinition`] if the edges contain
    /// no letters at all, or contain a character outside the ASCII alphabet.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// assert_eq!(puzzle.allowed().len(), 12);
    /// assert!(puzzle.has_forbidden_pair([b'a', b'b']));
    /// assert!(!puzzle.has_forbidden_pair([b'a', b'd']));
    /// ```
    pub fn new<S: AsRef<str>>(edges: &[S]) -> Result<Self, SolverError> {
        let edges: Vec<String> = edges
            .iter()
            .map(|edge| edge.as_ref().trim().to_lowercase())
            .collect();

        let mut allowed = LetterSet::EMPTY;
        let mut forbidden_pairs = FxHashSet::default();

        for edge in &edges {
            if !edge.bytes().all(|byte| byte.is_ascii_lowercase()) {
                return Err(SolverError::InvalidPuzzleDefinition(format!(
                    "edge {edge:?} contains non-alphabetic characters"
                )));
            }

            for &letter in edge.as_bytes() {
                allowed.insert(letter);
            }

            for &first in edge.as_bytes() {
                for &second in edge.as_bytes() {
                    forbidden_pairs.insert([first, second]);
                }
            }
        }

        if allowed.is_empty() {
            return Err(SolverError::InvalidPuzzleDefinition(
                "edges contain no letters".to_string(),
            ));
        }

        Ok(Self {
            edges,
            allowed,
            forbidden_pairs,
        })
    }

    /// The lowercased edge strings, in input order
    #[must_use]
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    /// Union of all letters across all edges
    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> LetterSet {
        self.allowed
    }

    /// Whether an ordered letter pair is barred from appearing consecutively
    #[inline]
    #[must_use]
    pub fn has_forbidden_pair(&self, pair: [u8; 2]) -> bool {
        self.forbidden_pairs.contains(&pair)
    }

    /// Forbidden pairs rendered as two-letter strings, sorted
    ///
    /// Diagnostic accessor; the CLI prints these under `--debug`.
    #[must_use]
    pub fn forbidden_pair_strings(&self) -> Vec<String> {
        let mut pairs: Vec<String> = self
            .forbidden_pairs
            .iter()
            .map(|&[first, second]| format!("{}{}", char::from(first), char::from(second)))
            .collect();
        pairs.sort();
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_is_the_union_of_all_edges() {
        let puzzle = Puzzle::new(&["bde", "a", "n", "t"]).unwrap();
        let allowed = puzzle.allowed();

        assert_eq!(allowed.len(), 6);
        for letter in [b'b', b'd', b'e', b'a', b'n', b't'] {
            assert!(allowed.contains(letter));
        }
        assert!(!allowed.contains(b'z'));
    }

    #[test]
    fn forbidden_pairs_are_the_per_edge_cross_product() {
        let puzzle = Puzzle::new(&["bde", "a", "n", "t"]).unwrap();

        // both orders of distinct letters from one edge
        assert!(puzzle.has_forbidden_pair([b'b', b'd']));
        assert!(puzzle.has_forbidden_pair([b'd', b'b']));
        assert!(puzzle.has_forbidden_pair([b'e', b'b']));

        // doubled letters, including single-letter edges
        assert!(puzzle.has_forbidden_pair([b'b', b'b']));
        assert!(puzzle.has_forbidden_pair([b'a', b'a']));
        assert!(puzzle.has_forbidden_pair([b't', b't']));

        // letters from different edges are fine
        assert!(!puzzle.has_forbidden_pair([b'b', b'a']));
        assert!(!puzzle.has_forbidden_pair([b'n', b't']));
    }

    #[test]
    fn edges_are_lowercased() {
        let puzzle = Puzzle::new(&["ABC", "Def"]).unwrap();
        assert_eq!(puzzle.edges(), ["abc", "def"]);
        assert!(puzzle.allowed().contains(b'a'));
        assert!(puzzle.has_forbidden_pair([b'a', b'b']));
    }

    #[test]
    fn empty_edges_are_rejected() {
        let no_edges: &[&str] = &[];
        assert!(matches!(
            Puzzle::new(no_edges),
            Err(SolverError::InvalidPuzzleDefinition(_))
        ));
        assert!(matches!(
            Puzzle::new(&["", ""]),
            Err(SolverError::InvalidPuzzleDefinition(_))
        ));
    }

    #[test]
    fn non_alphabetic_edges_are_rejected() {
        assert!(matches!(
            Puzzle::new(&["ab1", "cd"]),
            Err(SolverError::InvalidPuzzleDefinition(_))
        ));
        assert!(matches!(
            Puzzle::new(&["abé"]),
            Err(SolverError::InvalidPuzzleDefinition(_))
        ));
    }

    #[test]
    fn forbidden_pair_strings_are_sorted() {
        let puzzle = Puzzle::new(&["ba"]).unwrap();
        assert_eq!(puzzle.forbidden_pair_strings(), ["aa", "ab", "ba", "bb"]);
    }
}
