//! Completion lists.
//!
//! This module provides the `Completions` type, a view of the subtree reached
//! by following a prefix down the trie, and the iterator over its leaves.

use std::fmt;

use crate::node::NodeId;
use crate::trie::CompactTrie;

/// The completion list for a prefix.
///
/// Holds the node where the prefix ran out. Every leaf below that node (or the
/// node itself, when it is a leaf) stands for one stored word starting with
/// the prefix. Leaves are produced lazily and in no particular order.
///
/// # Examples
///
/// ```
/// use compact_trie::CompactTrie;
///
/// let words = ["bat", "bear", "bell", "bull", "stock"];
/// let trie = CompactTrie::build(&words);
///
/// let be = trie.completions(&words, "be").unwrap();
/// let mut found: Vec<&str> = be.words(&words).collect();
/// found.sort();
/// assert_eq!(found, vec!["bear", "bell"]);
///
/// assert!(trie.completions(&words, "z").is_none());
/// ```
#[derive(Clone, Copy)]
pub struct Completions<'t> {
    trie: &'t CompactTrie,
    subtree_root: NodeId,
}

/// An iterator over the leaves of a completion list.
///
/// Walks the first-child/sibling links with an explicit stack, so very long
/// shared prefixes cannot exhaust the call stack.
pub struct CompletionIter<'t> {
    trie: &'t CompactTrie,

    /// Heads of sibling lists still to visit
    stack: Vec<NodeId>,

    /// Set while the subtree root itself is a leaf that has not been yielded
    single: Option<NodeId>,
}

impl<'t> Completions<'t> {
    pub(crate) fn new(trie: &'t CompactTrie, subtree_root: NodeId) -> Self {
        Completions { trie, subtree_root }
    }

    /// The node where the prefix was used up.
    pub fn subtree_root(&self) -> NodeId {
        self.subtree_root
    }

    /// The trie this list was taken from.
    pub fn trie(&self) -> &'t CompactTrie {
        self.trie
    }

    /// Number of leaves in the list. Never zero.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`: a prefix that matches nothing yields no list at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the leaves of the list.
    pub fn iter(&self) -> CompletionIter<'t> {
        let node = self.trie.node(self.subtree_root);
        match node.first_child() {
            Some(head) => CompletionIter {
                trie: self.trie,
                stack: vec![head],
                single: None,
            },
            None => CompletionIter {
                trie: self.trie,
                stack: Vec::new(),
                single: Some(self.subtree_root),
            },
        }
    }

    /// Collects the leaves into a vector.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.iter().collect()
    }

    /// The completed words, read from the word table the trie was built on.
    pub fn words<'w, S: AsRef<str>>(&self, words: &'w [S]) -> impl Iterator<Item = &'w str> + 't
    where
        'w: 't,
        S: 't,
    {
        let trie = self.trie;
        self.iter().filter_map(move |leaf| trie.leaf_word(words, leaf))
    }

    /// Checks whether `word` is one of the completions.
    pub fn contains_word<S: AsRef<str>>(&self, words: &[S], word: &str) -> bool {
        self.iter()
            .any(|leaf| self.trie.leaf_word(words, leaf) == Some(word))
    }
}

impl<'t> fmt::Debug for Completions<'t> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completions")
            .field("subtree_root", &self.subtree_root)
            .field("leaves", &self.leaves())
            .finish()
    }
}

impl<'a, 't> IntoIterator for &'a Completions<'t> {
    type Item = NodeId;
    type IntoIter = CompletionIter<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'t> IntoIterator for Completions<'t> {
    type Item = NodeId;
    type IntoIter = CompletionIter<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'t> Iterator for CompletionIter<'t> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(leaf) = self.single.take() {
            return Some(leaf);
        }

        while let Some(current) = self.stack.pop() {
            let node = self.trie.node(current);

            // Come back for the rest of this list after the current node
            if let Some(sibling) = node.sibling() {
                self.stack.push(sibling);
            }

            match node.first_child() {
                Some(child) => self.stack.push(child),
                None => return Some(current),
            }
        }

        None
    }
}
