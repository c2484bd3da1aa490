//! Chain collection command
//!
//! Drives the lazy solution stream and applies the caller's cutoffs. The
//! core search is unbounded, so the cutoffs here are what keep a run
//! finite; printing is left to the output module.

use std::collections::{BTreeMap, BTreeSet};

/// Cutoffs applied while consuming the solution stream
pub struct SolveConfig {
    /// Stop once chains grow past this many words
    pub max_chain_len: usize,
    /// Stop after this many chains; `None` collects until `max_chain_len`
    pub max_results: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(max_chain_len: usize) -> Self {
        Self {
            max_chain_len,
            max_results: None,
        }
    }
}

/// Collected chains, grouped by word count
///
/// Within a group the joined chains are kept sorted, so rendering is
/// deterministic regardless of discovery order.
pub struct ChainGroups {
    groups: BTreeMap<usize, BTreeSet<String>>,
    total: usize,
}

impl ChainGroups {
    /// Number of chains collected
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing was collected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate the groups in ascending chain length
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<String>)> {
        self.groups.iter().map(|(len, chains)| (*len, chains))
    }
}

/// Consume solutions until a cutoff is hit, grouping chains by length
///
/// Relies on the search yielding chains in non-decreasing length order:
/// once one chain is too long, everything after it would be too.
pub fn collect_chains<'a, I>(solutions: I, config: &SolveConfig) -> ChainGroups
where
    I: IntoIterator<Item = Vec<&'a str>>,
{
    let mut groups: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
    let mut total = 0;

    for chain in solutions {
        if chain.len() > config.max_chain_len {
            break;
        }
        if config.max_results.is_some_and(|max| total >= max) {
            break;
        }

        total += 1;
        groups.entry(chain.len()).or_default().insert(chain.join("-"));
    }

    ChainGroups { groups, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_chains() -> Vec<Vec<&'static str>> {
        vec![
            vec!["adebcf"],
            vec!["adec", "cafb"],
            vec!["adea", "afbe"],
            vec!["acea", "adec", "cafb"],
        ]
    }

    #[test]
    fn chains_are_grouped_by_length_and_joined() {
        let config = SolveConfig::new(3);
        let groups = collect_chains(fixture_chains(), &config);

        assert_eq!(groups.total(), 4);

        let collected: Vec<(usize, Vec<&String>)> = groups
            .iter()
            .map(|(len, chains)| (len, chains.iter().collect()))
            .collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].0, 1);
        assert_eq!(collected[1].1, ["adea-afbe", "adec-cafb"]);
        assert_eq!(collected[2].1, ["acea-adec-cafb"]);
    }

    #[test]
    fn over_long_chains_stop_the_collection() {
        let config = SolveConfig::new(2);
        let groups = collect_chains(fixture_chains(), &config);

        assert_eq!(groups.total(), 3);
        assert!(groups.iter().all(|(len, _)| len <= 2));
    }

    #[test]
    fn max_results_bounds_the_collection() {
        let config = SolveConfig {
            max_chain_len: 3,
            max_results: Some(2),
        };
        let groups = collect_chains(fixture_chains(), &config);

        assert_eq!(groups.total(), 2);
    }

    #[test]
    fn zero_max_results_collects_nothing() {
        let config = SolveConfig {
            max_chain_len: 3,
            max_results: Some(0),
        };
        let groups = collect_chains(fixture_chains(), &config);

        assert!(groups.is_empty());
    }

    #[test]
    fn empty_streams_produce_empty_groups() {
        let config = SolveConfig::new(3);
        let groups = collect_chains(Vec::<Vec<&str>>::new(), &config);

        assert!(groups.is_empty());
        assert_eq!(groups.iter().count(), 0);
    }
}
