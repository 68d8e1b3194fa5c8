//! Property tests for the sharing trie against brute-force oracles.


use generators::{naive_dominates, sorted_dedup, sorted_rows};
use posets::trie::SharingTrie;
use posets::vector::Vector;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    /// Building a trie and reading it back yields the deduplicated input.
    #[test]
    fn round_trip((set, _) in generators::arb_set_with_probe()) {
        let trie = SharingTrie::from_elements(set.clone());
        prop_assert_eq!(sorted_rows(&trie.get_all()), sorted_dedup(&set));
        // the backing keeps the input as-is
        prop_assert_eq!(trie.size(), set.len());
    }

    /// Non-strict dominance agrees with the brute-force check.
    #[test]
    fn dominates_matches_naive((set, probe) in generators::arb_set_with_probe()) {
        let trie = SharingTrie::from_elements(set.clone());
        prop_assert_eq!(trie.dominates(&probe, false), naive_dominates(&set, &probe, false));
    }

    /// Strict dominance agrees with the brute-force check: some stored
    /// vector is componentwise ≥ the probe and differs from it.
    #[test]
    fn strict_dominates_matches_naive((set, probe) in generators::arb_set_with_probe()) {
        let trie = SharingTrie::from_elements(set.clone());
        prop_assert_eq!(trie.dominates(&probe, true), naive_dominates(&set, &probe, true));
    }

    /// Stored vectors also get checked: every element dominates itself
    /// non-strictly, and strict dominance on an element means some *other*
    /// element sits above it.
    #[test]
    fn dominates_on_members((set, _) in generators::arb_set_with_probe()) {
        let trie = SharingTrie::from_elements(set.clone());
        for v in &set {
            prop_assert!(trie.dominates(v, false));
            prop_assert_eq!(trie.dominates(v, true), naive_dominates(&set, v, true));
        }
    }

    /// Strict dominance implies non-strict dominance.
    #[test]
    fn strict_implies_nonstrict((set, probe) in generators::arb_set_with_probe()) {
        let trie = SharingTrie::from_elements(set);
        if trie.dominates(&probe, true) {
            prop_assert!(trie.dominates(&probe, false));
        }
    }

    /// Relabeling with the trie's own content changes nothing observable.
    #[test]
    fn relabel_is_idempotent((set, probe) in generators::arb_set_with_probe()) {
        let mut trie = SharingTrie::from_elements(set);
        let before = sorted_rows(&trie.get_all());
        let dominated = trie.dominates(&probe, false);

        let content = trie.get_all();
        trie.relabel(content);

        prop_assert_eq!(sorted_rows(&trie.get_all()), before);
        prop_assert_eq!(trie.dominates(&probe, false), dominated);
    }

    /// A trie dominates exactly the componentwise meets of its elements
    /// with anything: u.meet(v) is always dominated (witnessed by u).
    #[test]
    fn meets_are_dominated((set, probe) in generators::arb_set_with_probe()) {
        let trie = SharingTrie::from_elements(set.clone());
        for u in &set {
            prop_assert!(trie.dominates(&u.meet(&probe), false));
        }
    }
}
