//! Display functions for solver results

use colored::Colorize;

use crate::commands::{ChainGroups, SolveConfig};
use crate::index::WordIndex;

/// Print the wordlist summary line shown before the search starts
pub fn print_search_header(wordlist: &str, index: &WordIndex) {
    println!(
        "Wordlist: {} | Candidate Words: {}",
        wordlist.bright_yellow(),
        index.len().to_string().bright_yellow()
    );
}

/// Print the puzzle internals and the active cutoffs
///
/// Shown only under `--debug`.
pub fn print_debug_info(index: &WordIndex, config: &SolveConfig) {
    let max_results = config
        .max_results
        .map_or_else(|| "unlimited".to_string(), |max| max.to_string());

    println!(
        "Result Filters: max_chain_len: {} max_results: {max_results}",
        config.max_chain_len
    );
    println!("Allowed Chars: {:?}", index.puzzle().allowed());
    println!(
        "Forbidden Substrings: {}",
        index.puzzle().forbidden_pair_strings().join(" ")
    );
    println!("Min Word Length: > {}", index.min_length());
}

/// Print the collected chains, grouped by word count
pub fn print_chain_groups(groups: &ChainGroups) {
    for (length, chains) in groups.iter() {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "{} word combinations: {} results",
            length.to_string().bright_yellow().bold(),
            chains.len().to_string().bright_yellow()
        );
        println!("{}", "─".repeat(60).cyan());

        for chain in chains {
            println!("  {chain}");
        }
    }
}

/// Print the failure notice for a search with no surviving chains
pub fn print_no_solutions() {
    println!(
        "{}",
        "No valid letter boxed solutions found".red().bold()
    );
}
