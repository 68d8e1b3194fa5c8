//! A sharing trie over fixed-dimension integer vectors.
//!
//! Each root-to-leaf path spells one stored vector; identical prefixes are
//! shared, and siblings are kept in strictly decreasing label order. On top
//! of plain prefix sharing, every node carries an equivalence-class *color*:
//! two nodes are color-equal iff the sub-tries below them accept the same
//! set of suffix vectors. Queries exploit the colors to skip subtrees that
//! are language-equivalent to one already visited, so the trie answers
//! dominance questions as if it were a minimized DAG while physically
//! remaining a tree.
//!
//! The authoritative content lives in the backing vector; the trie nodes
//! are a redundant query index over it, rebuilt wholesale by [`relabel`].
//!
//! [`relabel`]: SharingTrie::relabel

mod build;
mod node;
mod query;

use std::fmt;

use tracing::trace;

use crate::vector::Vector;
use self::node::{NodeIdx, StNode, NO_NODE};

/// Traversal direction for the explicit DFS stacks.
///
/// Trie depth equals the vector dimension, so all traversals are driven by
/// an explicit stack rather than recursion; large dimensions overflow the
/// call stack otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir {
    Down,
    Right,
}

/// A set of same-dimension vectors stored as a colored sharing trie.
///
/// Move-only: the trie owns a node arena that should not be deep-copied
/// implicitly. Node indices are internal and invalidated by every rebuild.
#[derive(Debug)]
pub struct SharingTrie<V: Vector> {
    /// Dimension shared by all stored vectors.
    dim: usize,
    /// Index of the first (highest-labeled) top-layer node.
    root: NodeIdx,
    /// The packed node arena. Rebuilds may leave unreachable cells behind;
    /// the arena never exceeds `dim * backing.len()` cells.
    nodes: Vec<StNode<V::Value>>,
    /// The stored vectors, in insertion order. The trie is an index over
    /// this sequence.
    backing: Vec<V>,
}

impl<V: Vector> SharingTrie<V> {
    /// Build a trie over a non-empty sequence of same-dimension vectors.
    pub fn from_elements(elements: Vec<V>) -> Self {
        let mut trie = SharingTrie {
            dim: 0,
            root: NO_NODE,
            nodes: Vec::new(),
            backing: Vec::new(),
        };
        trie.relabel(elements);
        trie
    }

    /// Replace the stored content, reusing the node arena when it is large
    /// enough. All previously observed node indices become invalid.
    pub fn relabel(&mut self, elements: Vec<V>) {
        assert!(!elements.is_empty(), "sharing trie built from zero vectors");
        self.dim = elements[0].len();
        assert!(self.dim > 0, "sharing trie over zero-dimensional vectors");
        debug_assert!(elements.iter().all(|e| e.len() == self.dim));

        // Vec::reserve reallocates only when the remaining capacity is
        // short, which is exactly the regrow policy we want after clear().
        self.nodes.clear();
        self.nodes.reserve(self.dim * elements.len());
        self.backing = elements;
        self.root = 0;

        self.layout_forest();
        self.to_trie();
        self.color_as_dfa();

        trace!(
            n = self.backing.len(),
            dim = self.dim,
            arena = self.nodes.len(),
            "rebuilt sharing trie"
        );
    }

    /// Number of stored vectors (counting duplicates in the backing).
    pub fn size(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// The dimension of the stored vectors.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterate the backing sequence. Order is stable between rebuilds.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.backing.iter()
    }

    /// The authoritative content, in insertion order.
    pub fn backing(&self) -> &[V] {
        &self.backing
    }

    /// True iff no stored vector is componentwise comparable to another.
    pub fn is_antichain(&self) -> bool {
        for (i, a) in self.backing.iter().enumerate() {
            for b in &self.backing[i + 1..] {
                let po = a.partial_order(b);
                if po.leq || po.geq {
                    return false;
                }
            }
        }
        true
    }

    fn node(&self, idx: NodeIdx) -> &StNode<V::Value> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: NodeIdx) -> &mut StNode<V::Value> {
        &mut self.nodes[idx as usize]
    }
}

impl<'a, V: Vector> IntoIterator for &'a SharingTrie<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.iter()
    }
}

impl<V: Vector + PartialEq> PartialEq for SharingTrie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<V: Vector + fmt::Display> fmt::Display for SharingTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.get_all() {
            writeln!(f, "{}", v)?;
        }
        Ok(())
    }
}
