//! # Compact Trie
//!
//! A compact prefix tree (also known as a patricia or radix trie) over a fixed,
//! ordered table of lowercase words, answering prefix completion queries.
//!
//! The trie never copies word text. Every edge is labeled with a byte range of
//! one word in the table, so the table is borrowed again by each query instead
//! of being owned by the trie.
//!
//! ## Features
//!
//! - **Incremental build**: words are inserted in table order, splitting edges as needed
//! - **Compact labels**: edges reference `(word, start..end)` instead of owning strings
//! - **Completion lists**: all stored words sharing a prefix, as leaves of one subtree
//! - **Arena storage**: nodes are addressed by stable indices, with no parent pointers
//!
//! ## Example
//!
//! ```rust
//! use compact_trie::CompactTrie;
//!
//! let words = ["bat", "bear", "bell", "bull", "stock"];
//! let trie = CompactTrie::build(&words);
//!
//! let list = trie.completions(&words, "be").unwrap();
//! let mut found: Vec<&str> = list.words(&words).collect();
//! found.sort();
//! assert_eq!(found, vec!["bear", "bell"]);
//!
//! assert!(trie.completions(&words, "z").is_none());
//! ```
//!
//! Words that are a prefix of other words, or that repeat, are kept with
//! zero-length terminal markers and duplicate collapsing:
//!
//! ```rust
//! use compact_trie::CompactTrie;
//!
//! let words = ["bells", "bell", "bell"];
//! let trie = CompactTrie::build(&words);
//!
//! assert_eq!(trie.len(), 2);
//! assert_eq!(trie.duplicates(), 1);
//! assert!(trie.contains(&words, "bell"));
//! assert_eq!(trie.completions(&words, "bel").map(|list| list.len()), Some(2));
//! ```

mod builder;
mod completion;
pub mod label;
pub mod node;
mod trie;
mod util;

// Re-export public types
pub use crate::completion::{CompletionIter, Completions};
pub use crate::label::EdgeLabel;
pub use crate::node::{Children, Node, NodeId};
pub use crate::trie::{validate_words, CompactTrie, Rendered, TrieStats};

/// Errors reported by the checked entry points.
///
/// Queries themselves never fail; a prefix with no completions is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A word is not lowercase
    InvalidWord {
        /// Position of the word in the table
        index: usize,
        /// The offending word
        word: String,
    },
    /// The word table is shorter than the one the trie was built from
    TableMismatch {
        /// Words the trie was built from
        expected: usize,
        /// Words in the table that was passed
        found: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWord { index, word } => {
                write!(f, "word {} ({:?}) is not lowercase", index, word)
            }
            Error::TableMismatch { expected, found } => write!(
                f,
                "word table has {} words, the trie was built from {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for Error {}
