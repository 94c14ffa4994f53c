//! Node storage for the compact trie.
//!
//! Nodes live in a single arena owned by the trie and refer to each other by
//! [`NodeId`]. Each node links to the head of its child list and to its next
//! sibling, so the tree is a first-child/next-sibling binary encoding with no
//! parent pointers.

use crate::label::EdgeLabel;

/// Stable index of a node inside a [`CompactTrie`](crate::CompactTrie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The synthetic root always occupies the first slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the trie.
///
/// The root has no label. Every other node carries the [`EdgeLabel`] of the
/// edge leading into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) label: Option<EdgeLabel>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Node {
            label: None,
            first_child: None,
            sibling: None,
        }
    }

    pub(crate) fn leaf(label: EdgeLabel) -> Self {
        Node {
            label: Some(label),
            first_child: None,
            sibling: None,
        }
    }

    /// The label of the edge into this node, `None` for the root.
    pub fn label(&self) -> Option<EdgeLabel> {
        self.label
    }

    /// Head of this node's child list.
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    /// Next node in the same child list.
    pub fn sibling(&self) -> Option<NodeId> {
        self.sibling
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    pub fn is_root(&self) -> bool {
        self.label.is_none()
    }

    /// Returns `true` if this node is a terminal marker leaf.
    pub fn is_marker(&self) -> bool {
        self.label.map_or(false, |label| label.is_marker())
    }
}

/// Iterator over one sibling list, in list order.
#[derive(Debug, Clone)]
pub struct Children<'t> {
    pub(crate) nodes: &'t [Node],
    pub(crate) next: Option<NodeId>,
}

impl<'t> Iterator for Children<'t> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.nodes[current.0].sibling;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let node = Node::root();
        assert!(node.is_root());
        assert!(node.is_leaf());
        assert!(!node.is_marker());
        assert_eq!(node.label(), None);
    }

    #[test]
    fn test_leaf_node() {
        let node = Node::leaf(EdgeLabel::new(2, 0, 5));
        assert!(!node.is_root());
        assert!(node.is_leaf());
        assert_eq!(node.label(), Some(EdgeLabel::new(2, 0, 5)));

        let marker = Node::leaf(EdgeLabel::marker(2, 5));
        assert!(marker.is_marker());
    }

    #[test]
    fn test_children_follows_sibling_links() {
        let mut root = Node::root();
        root.first_child = Some(NodeId(1));
        let mut first = Node::leaf(EdgeLabel::new(0, 0, 1));
        first.sibling = Some(NodeId(2));
        let second = Node::leaf(EdgeLabel::new(1, 0, 1));
        let nodes = vec![root, first, second];

        let children = Children {
            nodes: &nodes,
            next: nodes[0].first_child,
        };
        assert_eq!(children.collect::<Vec<_>>(), vec![NodeId(1), NodeId(2)]);
    }
}
