//! Letter-Boxed Solver - CLI
//!
//! Solves Letter-Boxed-style puzzles from the given edge strings, printing
//! word chains grouped by length.

use anyhow::Result;
use clap::Parser;
use letterboxed_solver::{
    commands::{SolveConfig, collect_chains},
    core::Puzzle,
    index::WordIndex,
    output::{print_chain_groups, print_debug_info, print_no_solutions, print_search_header},
    search::ChainSearch,
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "letterboxed_solver",
    about = "A generic letterbox solver",
    version,
    author
)]
struct Cli {
    /// Edge strings, one per side of the box (e.g. `abc def ghi jkl`)
    #[arg(required = true)]
    edges: Vec<String>,

    /// Wordlist: a named list (google-10k, test, unix, scrabble, wordle) or a path
    #[arg(short = 'w', long, default_value = "unix")]
    wordlist: String,

    /// Limit the number of rendered results
    #[arg(long)]
    max_results: Option<usize>,

    /// Limit the length of the word chains
    #[arg(long, default_value_t = 3)]
    max_word_chain: usize,

    /// Minimum word length; accepted words are strictly longer than this
    #[arg(long, default_value_t = 3)]
    min_length: usize,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let puzzle = Puzzle::new(&cli.edges)?;
    let mut index = WordIndex::with_min_length(puzzle, cli.min_length);
    index.load_from_file(wordlists::resolve(&cli.wordlist))?;

    let config = SolveConfig {
        max_chain_len: cli.max_word_chain,
        max_results: cli.max_results,
    };

    if cli.debug {
        print_debug_info(&index, &config);
    }
    print_search_header(&cli.wordlist, &index);

    let search = ChainSearch::new(&index);
    let groups = collect_chains(search.solutions(), &config);

    if groups.is_empty() {
        print_no_solutions();
        std::process::exit(1);
    }

    print_chain_groups(&groups);
    Ok(())
}
