//! Breadth-first chain search
//!
//! `ChainSearch` enumerates word chains over a built [`WordIndex`]: start
//! words ranked by distinct-letter count, extension words looked up by
//! first letter, and a FIFO frontier so shorter chains always surface
//! before longer ones. The enumeration is a pull-based iterator; the
//! caller decides how many chains to take and simply stops pulling to
//! bound the work.

use std::collections::VecDeque;

use crate::core::LetterSet;
use crate::index::WordIndex;

/// Chain enumerator over a read-only word index
///
/// The index is never mutated during a search, so any number of searches
/// may run over the same index.
#[derive(Clone, Copy)]
pub struct ChainSearch<'a> {
    index: &'a WordIndex,
    allowed: LetterSet,
}

impl<'a> ChainSearch<'a> {
    /// Create a search over a built index
    #[must_use]
    pub fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            allowed: index.puzzle().allowed(),
        }
    }

    /// Candidate opening words, best first
    ///
    /// Words covering more letters shrink the remaining set fastest, so the
    /// ranking is descending distinct-letter count, then alphabetical
    /// within a count.
    pub fn first_word_candidates(&self) -> impl Iterator<Item = &'a str> {
        self.index.words_by_distinct_letters()
    }

    /// Candidate next words for a chain ending in `last_char`
    ///
    /// Words that cover none of `remaining` are excluded. Words that cover
    /// all of it finish the chain and are yielded first, in the order they
    /// are found; the rest follow alphabetically (the index's stable
    /// per-letter order).
    ///
    /// A word covering nothing is skipped even when it could pivot the
    /// chain onto a first letter that still has productive extensions;
    /// catching that case would add substantial complexity.
    pub fn next_word_candidates(
        &self,
        last_char: u8,
        remaining: LetterSet,
    ) -> impl Iterator<Item = &'a str> {
        let mut finishers = Vec::new();
        let mut partials = Vec::new();

        for word in self.index.words_starting_with(last_char) {
            let covered = remaining.intersection(LetterSet::from_word(word));

            if covered.is_empty() {
                continue;
            }

            if covered == remaining {
                finishers.push(word);
            } else {
                partials.push(word);
            }
        }

        finishers.into_iter().chain(partials)
    }

    /// Lazily enumerate every solving chain, best first
    ///
    /// Single-pass and unbounded: the frontier is only exhausted for small
    /// indexes, so callers impose their own cutoffs by ceasing to pull.
    #[must_use]
    pub fn solutions(&self) -> Solutions<'a> {
        Solutions {
            search: *self,
            seeds: self.first_word_candidates().collect::<Vec<_>>().into_iter(),
            frontier: VecDeque::new(),
            ready: VecDeque::new(),
        }
    }
}

/// Pull-based breadth-first enumeration of solving chains
///
/// Holds the queue state internally and advances one step per pull. The
/// FIFO frontier guarantees chains come out in non-decreasing length
/// order, and within one expansion every chain-finishing word is yielded
/// before any partial-progress word.
pub struct Solutions<'a> {
    search: ChainSearch<'a>,
    seeds: std::vec::IntoIter<&'a str>,
    frontier: VecDeque<(Vec<&'a str>, LetterSet)>,
    ready: VecDeque<Vec<&'a str>>,
}

impl<'a> Iterator for Solutions<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.ready.pop_front() {
                return Some(chain);
            }

            // seed the whole frontier before expanding anything; a single
            // word occasionally covers the entire box and comes straight out
            if let Some(word) = self.seeds.next() {
                let remaining = self
                    .search
                    .allowed
                    .difference(LetterSet::from_word(word));
                if remaining.is_empty() {
                    return Some(vec![word]);
                }
                self.frontier.push_back((vec![word], remaining));
                continue;
            }

            let (chain, remaining) = self.frontier.pop_front()?;
            let last = chain.last().copied().expect("frontier chains are never empty");

            for word in self
                .search
                .next_word_candidates(last_char(last), remaining)
            {
                let left = remaining.difference(LetterSet::from_word(word));
                let mut grown = chain.clone();
                grown.push(word);

                if left.is_empty() {
                    self.ready.push_back(grown);
                } else {
                    self.frontier.push_back((grown, left));
                }
            }
        }
    }
}

/// Final byte of a word; accepted words are never empty
fn last_char(word: &str) -> u8 {
    word.as_bytes()[word.len() - 1]
}
