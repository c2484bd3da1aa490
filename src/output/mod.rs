//! Terminal output formatting
//!
//! Display utilities for CLI results. The search core never prints; every
//! user-facing line goes through here.

pub mod display;

pub use display::{print_chain_groups, print_debug_info, print_no_solutions, print_search_header};
