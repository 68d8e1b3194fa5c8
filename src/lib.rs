//! Downward-closed sets of integer vectors under the componentwise order,
//! stored compactly as antichains of their maximal elements.
//!
//! The workhorse is a *sharing trie*: a fixed-depth, label-sorted trie over
//! the stored vectors whose nodes carry equivalence-class colors. Colors
//! let queries skip subtrees that accept the same suffix language as one
//! already explored, giving DAG-like query behavior without DAG
//! construction. On top of the trie, [`Downset`] maintains the antichain
//! invariant and provides the downward-closed-set algebra: membership,
//! union, intersection, and pointwise mapping.
//!
//! ```
//! use posets::{Downset, VecBacked};
//!
//! let a = Downset::new(vec![
//!     VecBacked::from(vec![1, 2]),
//! ]);
//! let b = Downset::new(vec![
//!     VecBacked::from(vec![2, 1]),
//! ]);
//!
//! let mut u = a;
//! u.union_with(b);
//! assert!(u.contains(&VecBacked::from(vec![1, 1])));
//! assert!(!u.contains(&VecBacked::from(vec![2, 2])));
//! ```

pub mod downset;
pub mod trie;
pub mod vector;

pub use downset::Downset;
pub use trie::SharingTrie;
pub use vector::{OrderPair, VecBacked, Vector};
