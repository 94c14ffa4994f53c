//! The main trie implementation.
//!
//! This module contains the `CompactTrie` type, which provides the primary API
//! for building the index and asking it for completions.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::builder::Builder;
use crate::completion::Completions;
use crate::label::EdgeLabel;
use crate::node::{Children, Node, NodeId};
use crate::util::is_lowercase_word;
use crate::Error;

/// A compact prefix tree over a borrowed word table.
///
/// Edges do not own text. Each one carries an [`EdgeLabel`] pointing into the
/// table the trie was built from, so the same table has to be handed back to
/// every query that reads text.
///
/// The trie is built once and never changes afterwards. It holds no interior
/// mutability beyond a write-once statistics cache, so it can be shared
/// between threads for concurrent queries.
///
/// # Examples
///
/// ```
/// use compact_trie::CompactTrie;
///
/// let words = ["bat", "bear", "bell", "bull", "stock"];
/// let trie = CompactTrie::build(&words);
///
/// assert_eq!(trie.len(), 5);
/// assert_eq!(trie.completions(&words, "b").map(|list| list.len()), Some(4));
/// assert!(trie.completions(&words, "").is_none());
/// ```
#[derive(Debug)]
pub struct CompactTrie {
    /// Node arena, the root lives in slot 0
    nodes: Vec<Node>,

    /// Number of words in the table the trie was built from
    word_count: usize,

    /// Inputs that were already stored when their turn came
    duplicates: usize,

    stats: OnceCell<TrieStats>,
}

/// Shape statistics for a built trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrieStats {
    /// All nodes, not counting the root
    pub nodes: usize,
    /// Leaves, one per distinct stored word
    pub leaves: usize,
    /// Leaves whose label is a terminal marker
    pub markers: usize,
    /// Longest root-to-leaf path, in edges
    pub max_depth: usize,
}

impl CompactTrie {
    /// Builds a trie by inserting every word of the table, first to last.
    ///
    /// The order matters: later words split edges created by earlier ones,
    /// and the first word to reach an edge becomes its witness. Words are
    /// assumed to be lowercase; see [`CompactTrie::try_build`] for a checked
    /// variant.
    ///
    /// An empty table produces an empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::CompactTrie;
    ///
    /// let trie = CompactTrie::build::<&str>(&[]);
    /// assert!(trie.is_empty());
    /// ```
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let (nodes, duplicates) = Builder::new(words).build();
        CompactTrie {
            nodes,
            word_count: words.len(),
            duplicates,
            stats: OnceCell::new(),
        }
    }

    /// Validates the table with [`validate_words`] and then builds the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::{CompactTrie, Error};
    ///
    /// assert!(CompactTrie::try_build(&["bear", "bell"]).is_ok());
    /// assert!(matches!(
    ///     CompactTrie::try_build(&["bear", "Bell"]),
    ///     Err(Error::InvalidWord { index: 1, .. })
    /// ));
    /// ```
    pub fn try_build<S: AsRef<str>>(words: &[S]) -> Result<Self, Error> {
        validate_words(words)?;
        Ok(Self::build(words))
    }

    /// Returns `true` if the trie was built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::ROOT.0].is_leaf()
    }

    /// Returns the number of distinct words stored, which is the number of leaves.
    pub fn len(&self) -> usize {
        self.word_count - self.duplicates
    }

    /// Returns the size of the word table the trie was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns how many words were collapsed onto an identical earlier word.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// The synthetic root. It has no label and never stands for a word.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Looks up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this trie.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Iterates over the child list of `id`, in list order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            nodes: &self.nodes,
            next: self.nodes[id.0].first_child,
        }
    }

    /// Returns the word a leaf stands for.
    ///
    /// The witness of a leaf's label always ends exactly where the leaf's word
    /// ends, so the whole word is a prefix of the witness. Returns `None` for
    /// the root and for internal nodes.
    pub fn leaf_word<'w, S: AsRef<str>>(&self, words: &'w [S], id: NodeId) -> Option<&'w str> {
        let node = self.nodes.get(id.0)?;
        if !node.is_leaf() {
            return None;
        }
        let label = node.label?;
        words.get(label.word)?.as_ref().get(..label.end)
    }

    /// Returns the completion list for `prefix`: every stored word that starts
    /// with it, as leaves of the matched subtree.
    ///
    /// Returns `None` when the trie is empty, the prefix is empty, or no
    /// stored word starts with the prefix.
    ///
    /// `words` must be the table the trie was built from.
    pub fn completions<S: AsRef<str>>(&self, words: &[S], prefix: &str) -> Option<Completions<'_>> {
        let prefix = prefix.as_bytes();
        if prefix.is_empty() || self.is_empty() {
            return None;
        }

        let mut parent = NodeId::ROOT;
        let mut depth = 0;

        loop {
            let (child, label) = self.find_child(words, parent, prefix[depth])?;
            let stop = label.end.min(prefix.len());

            // The prefix may diverge from the edge anywhere along it
            if label.witness(words)[label.start..stop] != prefix[label.start..stop] {
                return None;
            }

            if stop == prefix.len() {
                return Some(Completions::new(self, child));
            }

            parent = child;
            depth = label.end;
        }
    }

    /// Returns `true` if `word` itself was inserted.
    pub fn contains<S: AsRef<str>>(&self, words: &[S], word: &str) -> bool {
        self.completions(words, word)
            .map_or(false, |list| list.contains_word(words, word))
    }

    /// Checks that `words` can serve as the table for this trie.
    ///
    /// Only the table size can be verified; the caller is still responsible
    /// for passing the same words in the same order.
    pub fn check_table<S: AsRef<str>>(&self, words: &[S]) -> Result<(), Error> {
        if words.len() < self.word_count {
            return Err(Error::TableMismatch {
                expected: self.word_count,
                found: words.len(),
            });
        }
        Ok(())
    }

    /// Returns shape statistics, computed on first use.
    pub fn stats(&self) -> TrieStats {
        *self.stats.get_or_init(|| self.compute_stats())
    }

    fn compute_stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            nodes: self.nodes.len() - 1,
            ..TrieStats::default()
        };

        let mut stack: Vec<(NodeId, usize)> = self.children(NodeId::ROOT).map(|c| (c, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.is_leaf() {
                stats.leaves += 1;
                if node.is_marker() {
                    stats.markers += 1;
                }
                stats.max_depth = stats.max_depth.max(depth);
            } else {
                stack.extend(self.children(id).map(|c| (c, depth + 1)));
            }
        }

        stats
    }

    /// Returns a value that draws the tree, one line per node.
    ///
    /// Each line shows the full text spelled from the root down to the node
    /// followed by the node's label as `(word, start..end)`. Terminal markers
    /// show an empty range. Intended for debugging.
    pub fn render<'a, S: AsRef<str>>(&'a self, words: &'a [S]) -> Rendered<'a, S> {
        Rendered { trie: self, words }
    }

    fn find_child<S: AsRef<str>>(&self, words: &[S], parent: NodeId, byte: u8) -> Option<(NodeId, EdgeLabel)> {
        self.children(parent).find_map(|child| {
            let label = self.nodes[child.0].label?;
            if label.first_byte(words) == Some(byte) {
                Some((child, label))
            } else {
                None
            }
        })
    }
}

/// Checks that every word is lowercase.
///
/// The trie compares bytes and never folds case, so tables should go through
/// this (or an equivalent check) before [`CompactTrie::build`].
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<(), Error> {
    match words.iter().position(|word| !is_lowercase_word(word.as_ref())) {
        Some(index) => Err(Error::InvalidWord {
            index,
            word: words[index].as_ref().to_string(),
        }),
        None => Ok(()),
    }
}

/// Debug drawing of a trie, see [`CompactTrie::render`].
pub struct Rendered<'a, S> {
    trie: &'a CompactTrie,
    words: &'a [S],
}

impl<'a, S: AsRef<str>> Rendered<'a, S> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = self.trie.node(id);
        let indent = "    ".repeat(depth);
        match node.label() {
            None => writeln!(f, "{}root", indent)?,
            Some(label) => {
                let spelled = &label.witness(self.words)[..label.end];
                writeln!(
                    f,
                    "{}{} ({}, {}..{})",
                    indent,
                    String::from_utf8_lossy(spelled),
                    label.word,
                    label.start,
                    label.end
                )?;
            }
        }

        for child in self.trie.children(id) {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<'a, S: AsRef<str>> fmt::Display for Rendered<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, NodeId::ROOT, 0)
    }
}
