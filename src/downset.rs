//! Downward-closed sets represented by the antichain of their maximal
//! elements.
//!
//! A [`Downset`] wraps one [`SharingTrie`] and maintains the invariant that
//! its contents are pairwise incomparable. Membership in the downward
//! closure, union, intersection, and pointwise mapping are all expressed
//! through dominance queries on the trie; every mutating operation ends
//! with the contents re-canonicalized to the antichain of maximal elements.

use std::fmt;

use tracing::debug;

use crate::trie::SharingTrie;
use crate::vector::Vector;

/// The antichain of maximal elements of a downward-closed set.
///
/// Move-only, like the trie it owns. Never empty: the empty downset has no
/// representation here, and constructing one is a precondition violation.
#[derive(Debug)]
pub struct Downset<V: Vector> {
    trie: SharingTrie<V>,
}

impl<V: Vector> Downset<V> {
    /// Build the downset generated by a non-empty sequence of vectors.
    ///
    /// Duplicates and dominated elements are dropped.
    pub fn new(elements: Vec<V>) -> Self {
        assert!(!elements.is_empty(), "downset built from zero vectors");
        let mut downset = Downset {
            trie: SharingTrie::from_elements(elements),
        };
        downset.canonicalize();
        downset
    }

    /// The downset generated by a single vector.
    pub fn from_vector(element: V) -> Self {
        // a singleton is trivially an antichain
        Downset {
            trie: SharingTrie::from_elements(vec![element]),
        }
    }

    /// Reduce the trie contents to the antichain of maximal elements.
    ///
    /// Two passes over the trie: the freshly built trie first answers "does
    /// some *other* element strictly dominate me" for its own deduplicated
    /// contents, then gets rebuilt from the survivors.
    fn canonicalize(&mut self) {
        let distinct = self.trie.get_all();
        let candidates = distinct.len();
        let survivors: Vec<V> = distinct
            .into_iter()
            .filter(|e| !self.trie.dominates(e, true))
            .collect();

        if survivors.len() < candidates {
            debug!(
                dropped = candidates - survivors.len(),
                kept = survivors.len(),
                "dropped dominated elements"
            );
        }
        self.trie.relabel(survivors);
        debug_assert!(self.trie.is_antichain());
    }

    /// Is `v` in the downward closure, i.e. dominated by some maximal
    /// element?
    pub fn contains(&self, v: &V) -> bool {
        self.trie.dominates(v, false)
    }

    /// Absorb `other`, leaving the antichain of the union of the two
    /// downward-closed sets.
    pub fn union_with(&mut self, other: Downset<V>) {
        let mut result: Vec<V> = Vec::with_capacity(self.size() + other.size());

        // keep our elements unless strictly dominated by the other side; the
        // strict check keeps one representative of elements present in both
        for e in &self.trie {
            if !other.trie.dominates(e, true) {
                result.push(e.clone());
            }
        }
        // keep the other side's elements unless dominated at all by ours,
        // so a shared element is contributed exactly once
        for e in &other.trie {
            if !self.trie.dominates(e, false) {
                result.push(e.clone());
            }
        }

        // both inputs were antichains, so the survivors already are one
        self.trie.relabel(result);
        debug_assert!(self.trie.is_antichain());
    }

    /// Replace the contents with the antichain of the intersection of the
    /// two downward-closed sets.
    ///
    /// The maximal elements of the intersection are found among the
    /// pointwise meets of the two antichains. An element of ours that is
    /// dominated by the other side is itself in the intersection and
    /// dominates all its meets, so the meet family is only expanded for
    /// elements that are not.
    pub fn intersect_with(&mut self, other: &Downset<V>) {
        let mut intersection: Vec<V> = Vec::new();
        let mut smaller_set = false;

        for x in &self.trie {
            if other.trie.dominates(x, false) {
                intersection.push(x.clone());
            } else {
                for y in &other.trie {
                    intersection.push(x.meet(y));
                }
                smaller_set = true;
            }
        }

        // if every element was kept as-is, our downset is a subset of the
        // other and the intersection is exactly what we already hold
        if !smaller_set {
            return;
        }
        self.trie.relabel(intersection);
        self.canonicalize();
    }

    /// Map every maximal element through `f` and build the downset of the
    /// images. The image of an antichain need not be one, so the result is
    /// re-canonicalized.
    pub fn apply<F>(&self, f: F) -> Downset<V>
    where
        F: Fn(&V) -> V,
    {
        let mapped: Vec<V> = self.trie.iter().map(f).collect();
        Downset::new(mapped)
    }

    /// Number of maximal elements.
    pub fn size(&self) -> usize {
        self.trie.size()
    }

    /// Iterate the maximal elements. Order is stable between mutations.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.trie.iter()
    }

    /// The maximal elements, in storage order.
    pub fn backing(&self) -> &[V] {
        self.trie.backing()
    }
}

impl<'a, V: Vector> IntoIterator for &'a Downset<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.trie.iter()
    }
}

impl<V: Vector + PartialEq> PartialEq for Downset<V> {
    fn eq(&self, other: &Self) -> bool {
        self.trie == other.trie
    }
}

impl<V: Vector + fmt::Display> fmt::Display for Downset<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.trie)
    }
}
