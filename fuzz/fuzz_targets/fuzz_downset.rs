//! Fuzz the downset algebra.
//!
//! Bytes are decoded into two small same-dimension vector sets and a probe
//! vector; construction, membership, union, and intersection are then
//! exercised. The antichain post-condition is asserted after every
//! mutation, and nothing here should ever panic on decodable input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use posets::downset::Downset;
use posets::vector::{VecBacked, Vector};

/// Chunk a byte stream into vectors of the given dimension.
fn decode(data: &[u8], dim: usize) -> Vec<VecBacked<i32>> {
    data.chunks_exact(dim)
        .take(24)
        .map(|chunk| VecBacked::from(chunk.iter().map(|&b| b as i8 as i32).collect::<Vec<_>>()))
        .collect()
}

fn assert_antichain(downset: &Downset<VecBacked<i32>>) {
    let backing = downset.backing();
    for (i, a) in backing.iter().enumerate() {
        for b in &backing[i + 1..] {
            let po = a.partial_order(b);
            assert!(!po.leq && !po.geq, "antichain invariant violated");
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let dim = (first as usize % 6) + 1;

    let half = rest.len() / 2;
    let left = decode(&rest[..half], dim);
    let right = decode(&rest[half..], dim);
    if left.is_empty() || right.is_empty() {
        return;
    }
    let probe = left[0].meet(&right[0]);

    let mut a = Downset::new(left.clone());
    assert_antichain(&a);
    let b = Downset::new(right);
    assert_antichain(&b);

    // every generator is in its own closure
    for v in &left {
        assert!(a.contains(v));
    }

    let mut meet = Downset::new(left);
    meet.intersect_with(&b);
    assert_antichain(&meet);
    assert_eq!(
        meet.contains(&probe),
        a.contains(&probe) && b.contains(&probe)
    );

    a.union_with(b);
    assert_antichain(&a);
    assert!(a.contains(&probe));
});
