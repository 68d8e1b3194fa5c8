//! Trie construction: linear forest, label-sorted merge, equivalence
//! coloring.
//!
//! Construction runs in three phases over the packed arena. Phase A lays
//! every vector out as its own root-to-leaf path. Phase B merges equal
//! labels level by level, leaving each sibling list in strictly decreasing
//! label order with shared prefixes collapsed onto shared nodes. Phase C
//! walks the layers bottom-up and assigns each node the color of its
//! sub-language's equivalence class.

use std::collections::BTreeMap;

use indexmap::IndexSet;

use super::node::{Color, NodeIdx, StNode, NO_NODE};
use super::{Dir, SharingTrie};
use crate::vector::Vector;

/// What to do with a node index popped off the merge stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Sort and merge the sibling list headed here.
    Reorder,
    /// Descend into the child list.
    Down,
    /// Move on to the next sibling.
    Right,
}

impl<V: Vector> SharingTrie<V> {
    /// Phase A: lay each backing vector out as a fresh path of `dim` nodes,
    /// chaining the path roots as siblings. Nothing is shared yet.
    pub(super) fn layout_forest(&mut self) {
        let mut prev_root = NO_NODE;
        for vi in 0..self.backing.len() {
            let base = self.nodes.len() as NodeIdx;
            if prev_root != NO_NODE {
                self.node_mut(prev_root).bro = base;
            }
            prev_root = base;
            for c in 0..self.dim {
                let label = self.backing[vi].get(c);
                let son = if c + 1 < self.dim {
                    base + c as NodeIdx + 1
                } else {
                    NO_NODE
                };
                self.nodes.push(StNode {
                    label,
                    color: 0,
                    son,
                    bro: NO_NODE,
                });
            }
        }
    }

    /// Graft the child lists of all nodes in a same-label bucket onto the
    /// first one, turning them into a single sibling list. The non-first
    /// bucket nodes become unreachable arena garbage.
    fn string_children(&mut self, bucket: &[NodeIdx]) {
        let first_son = self.node(bucket[0]).son;
        if first_son == NO_NODE {
            // leaf bucket: duplicates collapse onto the survivor
            return;
        }
        let mut last = first_son;
        for &idx in &bucket[1..] {
            while self.node(last).bro != NO_NODE {
                last = self.node(last).bro;
            }
            let son = self.node(idx).son;
            debug_assert!(son != NO_NODE, "paths must have uniform depth");
            self.node_mut(last).bro = son;
            last = son;
        }
    }

    /// Phase B: turn the linear forest into a trie whose sibling lists have
    /// strictly decreasing distinct labels.
    pub(super) fn to_trie(&mut self) {
        let mut to_visit: Vec<(NodeIdx, Mode)> = vec![(self.root, Mode::Reorder)];

        while let Some((idx, mode)) = to_visit.pop() {
            match mode {
                Mode::Down => {
                    let son = self.node(idx).son;
                    if son != NO_NODE {
                        // come back in Right mode once the subtree is done
                        to_visit.push((idx, Mode::Right));
                        to_visit.push((son, Mode::Reorder));
                    }
                }
                Mode::Right => {
                    let bro = self.node(idx).bro;
                    if bro != NO_NODE {
                        to_visit.push((bro, Mode::Down));
                    }
                }
                Mode::Reorder => {
                    // bucket the sibling list by label
                    let mut buckets: BTreeMap<V::Value, Vec<NodeIdx>> = BTreeMap::new();
                    let mut sib = idx;
                    while sib != NO_NODE {
                        let (label, bro) = {
                            let node = self.node(sib);
                            (node.label, node.bro)
                        };
                        buckets.entry(label).or_default().push(sib);
                        sib = bro;
                    }

                    // relink the bucket survivors as a decreasing-label chain
                    let mut head = NO_NODE;
                    let mut prev = NO_NODE;
                    for bucket in buckets.values().rev() {
                        self.string_children(bucket);
                        let survivor = bucket[0];
                        if head == NO_NODE {
                            head = survivor;
                        } else {
                            self.node_mut(prev).bro = survivor;
                        }
                        prev = survivor;
                    }
                    self.node_mut(prev).bro = NO_NODE;

                    // repair the parent's son link, or the root
                    match to_visit.last() {
                        Some(&(parent, mode)) => {
                            debug_assert_eq!(mode, Mode::Right);
                            self.node_mut(parent).son = head;
                        }
                        None => self.root = head,
                    }
                    to_visit.push((head, Mode::Down));
                }
            }
        }
    }

    /// Phase C: assign equivalence-class colors bottom-up.
    ///
    /// A node's signature is its label followed by the colors of its
    /// children in order. Signatures are interned into one set for the
    /// whole trie and the entry index is the color, so the namespace is
    /// flat: colors are never reused across layers (a signature's child
    /// colors pin the layer below it, and leaf signatures are the only
    /// childless ones).
    pub(super) fn color_as_dfa(&mut self) {
        // collect the node indices of each layer, top layer first
        let mut layers: Vec<Vec<NodeIdx>> = vec![Vec::new(); self.dim];
        let mut to_visit: Vec<(NodeIdx, usize, Dir)> = vec![(self.root, 0, Dir::Down)];

        while let Some((idx, depth, dir)) = to_visit.pop() {
            let (son, bro) = {
                let node = self.node(idx);
                (node.son, node.bro)
            };
            if son == NO_NODE {
                debug_assert_eq!(depth, self.dim - 1);
                debug_assert_eq!(dir, Dir::Down);
                layers[depth].push(idx);
                if bro != NO_NODE {
                    to_visit.push((bro, depth, Dir::Down));
                }
            } else {
                match dir {
                    Dir::Down => {
                        layers[depth].push(idx);
                        to_visit.push((idx, depth, Dir::Right));
                        to_visit.push((son, depth + 1, Dir::Down));
                    }
                    Dir::Right => {
                        if bro != NO_NODE {
                            to_visit.push((bro, depth, Dir::Down));
                        }
                    }
                }
            }
        }

        // intern signatures bottom-up; the entry index is the color
        let mut classes: IndexSet<(V::Value, Vec<Color>)> = IndexSet::new();
        for depth in (0..self.dim).rev() {
            for &idx in &layers[depth] {
                let mut child_colors = Vec::new();
                let mut son = self.node(idx).son;
                while son != NO_NODE {
                    let child = self.node(son);
                    child_colors.push(child.color);
                    son = child.bro;
                }
                let signature = (self.node(idx).label, child_colors);
                let (color, _) = classes.insert_full(signature);
                self.node_mut(idx).color = color as Color;
            }
        }
    }
}
