//! Packed arena cells for the left-child right-sibling trie.
//!
//! The trie never stores pointers: nodes live in one contiguous buffer and
//! refer to each other by 32-bit index, with `NO_NODE` marking an absent
//! link. This keeps the structure trivially movable and lets a rebuild
//! reuse the allocation.

/// Index into the node arena.
pub type NodeIdx = i32;

/// Sentinel for an absent `son`/`bro` link.
pub const NO_NODE: NodeIdx = -1;

/// Equivalence-class identifier assigned by the bottom-up coloring pass.
///
/// Colors live in one flat namespace: a color is never reused for a second
/// class, so equal colors always mean equal sub-languages.
pub type Color = u32;

/// One trie node in left-child right-sibling form.
///
/// `son` points at the head of this node's child list; `bro` at the next
/// sibling. Siblings are kept in strictly decreasing `label` order once the
/// trie has been built.
#[derive(Clone, Copy, Debug)]
pub struct StNode<T> {
    pub label: T,
    pub color: Color,
    pub son: NodeIdx,
    pub bro: NodeIdx,
}
