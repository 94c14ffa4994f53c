//! Incremental construction of the trie from an ordered word table.
//!
//! Words are inserted strictly in table order. Each insertion walks down from
//! the root, selecting children by the first byte of their edge, and finishes
//! in exactly one of these ways:
//!
//! - a new leaf is appended to the child list where no edge matches,
//! - an edge that only partly matches is split in place,
//! - a leaf whose word is a prefix of the new word is extended,
//! - a terminal marker is added where the word ends on a node boundary,
//! - nothing happens because the word is already stored.

use tracing::{debug, trace};

use crate::label::EdgeLabel;
use crate::node::{Node, NodeId};
use crate::util::prefix_match;

/// What a single insertion did to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Appended,
    Split,
    Extended,
    Marked,
    Duplicate,
}

/// Builds the node arena for a word table.
pub(crate) struct Builder<'w, S> {
    words: &'w [S],
    nodes: Vec<Node>,
    duplicates: usize,
}

impl<'w, S: AsRef<str>> Builder<'w, S> {
    pub(crate) fn new(words: &'w [S]) -> Self {
        Builder {
            words,
            nodes: vec![Node::root()],
            duplicates: 0,
        }
    }

    /// Inserts every word in table order and hands back the arena.
    pub(crate) fn build(mut self) -> (Vec<Node>, usize) {
        for index in 0..self.words.len() {
            if self.insert(index) == Placement::Duplicate {
                self.duplicates += 1;
            }
        }

        debug!(
            words = self.words.len(),
            nodes = self.nodes.len(),
            duplicates = self.duplicates,
            "built compact trie"
        );

        (self.nodes, self.duplicates)
    }

    /// Inserts the word at `index`. All earlier words must already be in.
    pub(crate) fn insert(&mut self, index: usize) -> Placement {
        let words = self.words;
        let word = words[index].as_ref().as_bytes();
        let mut parent = NodeId::ROOT;
        // Bytes of `word` spelled by the path from the root to `parent`
        let mut depth = 0;

        loop {
            if depth == word.len() {
                return self.terminate(parent, index, depth);
            }

            let (child, label) = match self.find_child(parent, word[depth]) {
                Some(found) => found,
                None => {
                    trace!(word = index, at = depth, "appending leaf");
                    self.push_child(parent, Node::leaf(EdgeLabel::new(index, depth, word.len())));
                    return Placement::Appended;
                }
            };

            let common = prefix_match(word, depth, label.text(words));
            let split_at = label.start + common;

            if split_at < label.end {
                trace!(word = index, at = split_at, witness = label.word, "splitting edge");
                self.split(child, label, split_at, EdgeLabel::new(index, split_at, word.len()));
                return Placement::Split;
            }

            if self.nodes[child.0].is_leaf() {
                if split_at == word.len() {
                    trace!(word = index, witness = label.word, "duplicate word");
                    return Placement::Duplicate;
                }
                trace!(word = index, at = split_at, witness = label.word, "extending leaf");
                self.extend_leaf(child, label, EdgeLabel::new(index, split_at, word.len()));
                return Placement::Extended;
            }

            parent = child;
            depth = split_at;
        }
    }

    /// Handles a word that is used up exactly at the end of `parent`'s edge.
    fn terminate(&mut self, parent: NodeId, index: usize, depth: usize) -> Placement {
        let already_marked = self
            .child_ids(parent)
            .any(|child| self.nodes[child.0].is_marker());
        if already_marked {
            trace!(word = index, "duplicate word");
            return Placement::Duplicate;
        }

        trace!(word = index, at = depth, "adding terminal marker");
        self.push_child(parent, Node::leaf(EdgeLabel::marker(index, depth)));
        Placement::Marked
    }

    /// Splits the edge into `node` at byte offset `split_at`.
    ///
    /// `node` keeps its slot and sibling link and becomes the shared prefix.
    /// Below it go the continuation of the old edge, which inherits the old
    /// children, followed by a leaf for the new word's remainder.
    fn split(&mut self, node: NodeId, old: EdgeLabel, split_at: usize, suffix: EdgeLabel) {
        let suffix_id = self.alloc(Node::leaf(suffix));
        let continuation_id = self.alloc(Node {
            label: Some(EdgeLabel::new(old.word, split_at, old.end)),
            first_child: self.nodes[node.0].first_child,
            sibling: Some(suffix_id),
        });

        let prefix = &mut self.nodes[node.0];
        prefix.label = Some(EdgeLabel::new(old.word, old.start, split_at));
        prefix.first_child = Some(continuation_id);
    }

    /// Turns the leaf `node` into an internal node whose old word is kept by a
    /// terminal marker, next to a new leaf for the rest of the longer word.
    fn extend_leaf(&mut self, node: NodeId, old: EdgeLabel, rest: EdgeLabel) {
        let rest_id = self.alloc(Node::leaf(rest));
        let marker_id = self.alloc(Node {
            label: Some(EdgeLabel::marker(old.word, old.end)),
            first_child: None,
            sibling: Some(rest_id),
        });
        self.nodes[node.0].first_child = Some(marker_id);
    }

    /// Finds the child of `parent` whose edge starts with `byte`.
    fn find_child(&self, parent: NodeId, byte: u8) -> Option<(NodeId, EdgeLabel)> {
        let words = self.words;
        self.child_ids(parent).find_map(|child| {
            let label = self.nodes[child.0].label?;
            if label.first_byte(words) == Some(byte) {
                Some((child, label))
            } else {
                None
            }
        })
    }

    /// Appends `node` at the end of `parent`'s child list.
    fn push_child(&mut self, parent: NodeId, node: Node) {
        let id = self.alloc(node);
        let last = self.child_ids(parent).last();
        match last {
            Some(last) => self.nodes[last.0].sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn child_ids(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut next = self.nodes[parent.0].first_child;
        std::iter::from_fn(move || {
            let current = next?;
            next = self.nodes[current.0].sibling;
            Some(current)
        })
    }
}
