//! Wordlist discovery input
//!
//! This module loads the candidate paths that a scan probes.

pub mod wordlist;

// Re-export commonly used items
pub use wordlist::load_wordlist;
