//! Letter-Boxed Solver
//!
//! Finds word chains that solve a Letter-Boxed-style puzzle: each word must
//! avoid consecutive letters from the same box edge, chain onto the last
//! letter of the word before it, and together the words must cover every
//! letter on the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use letterboxed_solver::{core::Puzzle, index::WordIndex, search::ChainSearch};
//!
//! let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
//! let mut index = WordIndex::new(puzzle);
//! index.load_from_file("words/unix.txt").unwrap();
//!
//! let search = ChainSearch::new(&index);
//! for chain in search.solutions().take(10) {
//!     println!("{}", chain.join("-"));
//! }
//! ```

// Core domain types
pub mod core;

// Word validation and indexing
pub mod index;

// Breadth-first chain enumeration
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Wordlist name resolution
pub mod wordlists;
