//! Unit tests for the downset façade: canonicalization, the set algebra,
//! and pointwise mapping on concrete inputs.

use posets::downset::Downset;
use posets::vector::VecBacked;

fn downset(rows: &[&[i32]]) -> Downset<VecBacked<i32>> {
    Downset::new(rows.iter().map(|r| VecBacked::from(r.to_vec())).collect())
}

fn v(components: &[i32]) -> VecBacked<i32> {
    VecBacked::from(components.to_vec())
}

/// Sorted component rows of the maximal elements.
fn content(downset: &Downset<VecBacked<i32>>) -> Vec<Vec<i32>> {
    let mut rows: Vec<Vec<i32>> = downset
        .backing()
        .iter()
        .map(|e| e.components().to_vec())
        .collect();
    rows.sort();
    rows
}

#[test]
fn test_canonicalization_drops_dominated_and_duplicates() {
    let d = downset(&[&[-1, 0], &[-1, 1], &[-1, 0], &[-1, 1], &[-1, 0], &[0, -1]]);

    // [-1,0] ≤ [-1,1], so only the two maximal elements survive
    assert_eq!(content(&d), vec![vec![-1, 1], vec![0, -1]]);
    assert_eq!(d.size(), 2);

    // it is still in the downward closure
    assert!(d.contains(&v(&[-1, 0])));
    assert!(d.contains(&v(&[-1, 1])));
    assert!(d.contains(&v(&[0, -1])));
    assert!(!d.contains(&v(&[0, 0])));
}

#[test]
fn test_construction_keeps_antichain_untouched() {
    let d = downset(&[&[6, 3, 2], &[5, 5, 4], &[2, 6, 2]]);
    assert_eq!(d.size(), 3);
    assert!(d.contains(&v(&[5, 2, 1])));
    assert!(!d.contains(&v(&[7, 7, 7])));
}

#[test]
fn test_union_of_incomparable_singletons() {
    let mut a = downset(&[&[1, 2]]);
    let b = downset(&[&[2, 1]]);

    a.union_with(b);
    assert_eq!(content(&a), vec![vec![1, 2], vec![2, 1]]);
    assert!(a.contains(&v(&[1, 1])));
    assert!(!a.contains(&v(&[2, 2])));
}

#[test]
fn test_union_contributes_shared_elements_once() {
    let mut a = downset(&[&[1, 2], &[2, 1]]);
    let b = downset(&[&[2, 1], &[0, 3]]);

    a.union_with(b);
    assert_eq!(
        content(&a),
        vec![vec![0, 3], vec![1, 2], vec![2, 1]]
    );
}

#[test]
fn test_union_absorbs_dominated_side() {
    let mut a = downset(&[&[1, 1]]);
    let b = downset(&[&[2, 2]]);

    a.union_with(b);
    assert_eq!(content(&a), vec![vec![2, 2]]);
}

#[test]
fn test_intersection_of_meets() {
    let mut a = downset(&[&[3, 3]]);
    let b = downset(&[&[2, 4], &[4, 2]]);

    a.intersect_with(&b);
    assert_eq!(content(&a), vec![vec![2, 3], vec![3, 2]]);
}

#[test]
fn test_intersection_short_circuits_on_subset() {
    // ↓{[1,1]} ⊆ ↓{[2,2]}, so the intersection is the left operand
    let mut a = downset(&[&[1, 1]]);
    let b = downset(&[&[2, 2]]);

    a.intersect_with(&b);
    assert_eq!(content(&a), vec![vec![1, 1]]);
}

#[test]
fn test_intersection_with_self_content() {
    let mut a = downset(&[&[2, 5, 6], &[7, 4, 3]]);
    let b = downset(&[&[2, 5, 6], &[7, 4, 3]]);

    a.intersect_with(&b);
    assert_eq!(content(&a), vec![vec![2, 5, 6], vec![7, 4, 3]]);
}

#[test]
fn test_apply_recanonicalizes_collapsed_images() {
    let d = downset(&[&[1, 2], &[2, 1]]);

    // clamping both elements to [1,1] collapses the antichain to a point
    let clamped = d.apply(|e| {
        VecBacked::from(
            e.components()
                .iter()
                .map(|&c| c.min(1))
                .collect::<Vec<_>>(),
        )
    });
    assert_eq!(content(&clamped), vec![vec![1, 1]]);
}

#[test]
fn test_apply_shift_preserves_shape() {
    let d = downset(&[&[1, 2], &[2, 1]]);
    let shifted = d.apply(|e| {
        VecBacked::from(
            e.components()
                .iter()
                .map(|&c| c + 10)
                .collect::<Vec<_>>(),
        )
    });
    assert_eq!(content(&shifted), vec![vec![11, 12], vec![12, 11]]);
}

#[test]
fn test_from_vector() {
    let d = Downset::from_vector(v(&[4, 4]));
    assert_eq!(d.size(), 1);
    assert!(d.contains(&v(&[4, 4])));
    assert!(d.contains(&v(&[0, -3])));
    assert!(!d.contains(&v(&[4, 5])));
}

#[test]
fn test_display_one_vector_per_line() {
    let d = downset(&[&[1, 2], &[2, 1]]);
    assert_eq!(d.to_string().lines().count(), 2);
}

#[test]
fn test_iteration_is_stable_between_mutations() {
    let d = downset(&[&[7, 4, 3], &[4, 8, 4], &[2, 5, 6]]);
    let first: Vec<_> = d.iter().cloned().collect();
    let second: Vec<_> = d.iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "zero vectors")]
fn test_empty_construction_fails_fast() {
    let _ = Downset::<VecBacked<i32>>::new(Vec::new());
}
