//! Trie queries: dominance testing and enumeration.
//!
//! Both walks are explicit-stack DFS over the arena. The dominance query
//! prunes on the decreasing sibling order and memoizes failed subtrees by
//! color, so equivalent sub-languages are explored at most once per depth.

use roaring::RoaringBitmap;

use super::node::{NodeIdx, NO_NODE};
use super::{Dir, SharingTrie};
use crate::vector::Vector;

impl<V: Vector> SharingTrie<V> {
    /// Does some stored vector dominate `v` componentwise?
    ///
    /// With `strict`, the witness must additionally differ from `v`
    /// somewhere. The query carries that obligation down the path as a
    /// pending flag: a level whose label exceeds the query component
    /// discharges it for the rest of the descent, a level matching exactly
    /// leaves it pending, and a leaf reached with the obligation still
    /// pending is not a witness.
    pub fn dominates(&self, v: &V, strict: bool) -> bool {
        debug_assert_eq!(v.len(), self.dim);

        // Failed subtrees are memoized per depth by (color, pending): a
        // subtree that fails while the strictness obligation is pending can
        // still succeed once it is discharged, so the two outcomes are
        // tracked separately.
        let mut seen: Vec<[RoaringBitmap; 2]> = (0..self.dim)
            .map(|_| [RoaringBitmap::new(), RoaringBitmap::new()])
            .collect();

        let mut to_visit: Vec<(NodeIdx, usize, bool, Dir)> =
            vec![(self.root, 0, strict, Dir::Down)];

        while let Some((idx, depth, pending, dir)) = to_visit.pop() {
            let node = self.node(idx);
            let v_comp = v.get(depth);

            // Siblings are sorted in decreasing label order: once a label
            // drops below the query component, the node and everything to
            // its right are out.
            if node.label < v_comp {
                continue;
            }
            let child_pending = pending && node.label == v_comp;

            if node.son == NO_NODE {
                debug_assert_eq!(depth, self.dim - 1);
                debug_assert_eq!(dir, Dir::Down);
                if child_pending {
                    // exact match at the leaf with the obligation still
                    // pending; smaller-labeled siblings cannot help either
                    continue;
                }
                return true;
            }

            match dir {
                Dir::Down => {
                    let memo = &mut seen[depth][pending as usize];
                    if memo.contains(node.color) {
                        // an equivalent subtree already failed from this
                        // obligation state; skip straight to the sibling
                        if node.bro != NO_NODE {
                            to_visit.push((node.bro, depth, pending, Dir::Down));
                        }
                    } else {
                        memo.insert(node.color);
                        to_visit.push((idx, depth, pending, Dir::Right));
                        to_visit.push((node.son, depth + 1, child_pending, Dir::Down));
                    }
                }
                Dir::Right => {
                    if node.bro != NO_NODE {
                        to_visit.push((node.bro, depth, pending, Dir::Down));
                    }
                }
            }
        }
        false
    }

    /// Enumerate the distinct stored vectors by walking the trie.
    ///
    /// Duplicates in the backing collapse onto one path, so the result can
    /// be shorter than [`size`]. Order is unspecified (in practice
    /// lex-decreasing on the leftmost differing coordinate).
    ///
    /// [`size`]: SharingTrie::size
    pub fn get_all(&self) -> Vec<V> {
        let mut to_visit: Vec<(NodeIdx, Dir)> = vec![(self.root, Dir::Down)];
        let mut res = Vec::new();
        let mut scratch: Vec<V::Value> = Vec::with_capacity(self.dim);

        while let Some((idx, dir)) = to_visit.pop() {
            let node = self.node(idx);

            if node.son == NO_NODE {
                debug_assert_eq!(dir, Dir::Down);
                scratch.push(node.label);
                res.push(V::from_components(scratch.clone()));
                scratch.pop();
                if node.bro != NO_NODE {
                    to_visit.push((node.bro, Dir::Down));
                }
            } else {
                match dir {
                    Dir::Down => {
                        to_visit.push((idx, Dir::Right));
                        scratch.push(node.label);
                        to_visit.push((node.son, Dir::Down));
                    }
                    Dir::Right => {
                        scratch.pop();
                        if node.bro != NO_NODE {
                            to_visit.push((node.bro, Dir::Down));
                        }
                    }
                }
            }
        }
        res
    }
}
