use longvec_core::hash_constants::{HashConstants, LONG2_HASH, LONG3_HASH, LONG4_HASH};
use longvec_core::{narrow_hash, wide_hash, Long2, Long3, Long4, ULong2, ULong3, ULong4, VectorHash};
use proptest::prelude::*;

/// Fraction of single-bit flips over `samples` that change `hash`.
fn changed_flip_ratio<const N: usize>(samples: &[[i64; N]], hash: impl Fn([i64; N]) -> u64) -> f64 {
    let mut changed = 0usize;
    let mut total = 0usize;
    for &lanes in samples {
        let base = hash(lanes);
        for lane in 0..N {
            for bit in 0..64 {
                let mut flipped = lanes;
                flipped[lane] ^= 1i64 << bit;
                total += 1;
                if hash(flipped) != base {
                    changed += 1;
                }
            }
        }
    }
    changed as f64 / total as f64
}

fn table_words<const N: usize>(table: &HashConstants<N>) -> Vec<u64> {
    let mut words = table.narrow.to_vec();
    words.push(table.narrow_offset);
    words.extend_from_slice(&table.wide);
    words.push(table.wide_offset);
    words
}

#[test]
fn test_zero_vector_hashes_to_final_constant() {
    assert_eq!(narrow_hash(Long2::ZERO), 0xA9D9_19BF);
    assert_eq!(wide_hash(Long2::ZERO), ULong2::splat(0x5D3E_D947));

    assert_eq!(narrow_hash(Long3::ZERO), LONG3_HASH.narrow_offset);
    assert_eq!(wide_hash(Long3::ZERO), ULong3::splat(LONG3_HASH.wide_offset));

    assert_eq!(narrow_hash(Long4::ZERO), LONG4_HASH.narrow_offset);
    assert_eq!(wide_hash(Long4::ZERO), ULong4::splat(LONG4_HASH.wide_offset));

    assert_ne!(narrow_hash(Long2::ZERO), 0);
}

#[test]
fn test_long2_concrete_vectors() {
    let zero = narrow_hash(Long2::new(0, 0));
    let x = narrow_hash(Long2::new(1, 0));
    let y = narrow_hash(Long2::new(0, 1));

    assert_eq!(zero, 0xA9D9_19BF);
    assert_ne!(x, y);
    assert_ne!(x, zero);
    assert_ne!(y, zero);

    let wide = wide_hash(Long2::new(0, 0));
    assert_eq!(wide.x, 0x5D3E_D947);
    assert_eq!(wide.y, 0x5D3E_D947);
}

#[test]
fn test_negative_lanes_are_reinterpreted_not_converted() {
    let expected = 0xFFFF_FFFF_FFFF_FFFFu64
        .wrapping_mul(LONG2_HASH.narrow[0])
        .wrapping_add(0xFFFF_FFFF_FFFF_FFFFu64.wrapping_mul(LONG2_HASH.narrow[1]))
        .wrapping_add(LONG2_HASH.narrow_offset);
    assert_eq!(narrow_hash(Long2::new(-1, -1)), expected);

    // Neither |x| nor a clamp to zero would give the same value.
    assert_ne!(narrow_hash(Long2::new(-1, -1)), narrow_hash(Long2::new(1, 1)));
    assert_ne!(narrow_hash(Long2::new(-1, -1)), narrow_hash(Long2::ZERO));

    let wide = wide_hash(Long2::new(-1, -1));
    assert_eq!(wide.x, LONG2_HASH.wide_offset.wrapping_sub(LONG2_HASH.wide[0]));
    assert_eq!(wide.y, LONG2_HASH.wide_offset.wrapping_sub(LONG2_HASH.wide[1]));
}

#[test]
fn test_width_tables_are_independent() {
    let tables = [table_words(&LONG2_HASH), table_words(&LONG3_HASH), table_words(&LONG4_HASH)];
    for (i, a) in tables.iter().enumerate() {
        for b in &tables[i + 1..] {
            for word in a {
                assert!(!b.contains(word), "constant {word:#x} is reused across widths");
            }
        }
    }

    assert_ne!(LONG2_HASH.narrow, LONG2_HASH.wide);
    assert_ne!(LONG3_HASH.narrow, LONG3_HASH.wide);
    assert_ne!(LONG4_HASH.narrow, LONG4_HASH.wide);
}

#[test]
fn test_wide_hashes_combine_before_narrowing() {
    // Fold two wide hashes with a multiply-add, then narrow once.
    fn combine(a: Long2, b: Long2) -> u64 {
        (a.hash_wide() * ULong2::new(LONG2_HASH.narrow[0], LONG2_HASH.narrow[1]) + b.hash_wide())
            .wrapping_csum()
    }

    let a = Long2::new(1, 0);
    let b = Long2::ZERO;
    assert_eq!(combine(a, b), combine(a, b));
    assert_ne!(combine(a, b), combine(b, a));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn narrow_hash_is_deterministic(x in any::<i64>(), y in any::<i64>(), z in any::<i64>(), w in any::<i64>()) {
        prop_assert_eq!(narrow_hash(Long2::new(x, y)), narrow_hash(Long2::new(x, y)));
        prop_assert_eq!(narrow_hash(Long3::new(x, y, z)), narrow_hash(Long3::new(x, y, z)));
        prop_assert_eq!(narrow_hash(Long4::new(x, y, z, w)), narrow_hash(Long4::new(x, y, z, w)));
    }

    #[test]
    fn wide_hash_is_deterministic(x in any::<i64>(), y in any::<i64>(), z in any::<i64>(), w in any::<i64>()) {
        prop_assert_eq!(wide_hash(Long2::new(x, y)), wide_hash(Long2::new(x, y)));
        prop_assert_eq!(wide_hash(Long3::new(x, y, z)), wide_hash(Long3::new(x, y, z)));
        prop_assert_eq!(wide_hash(Long4::new(x, y, z, w)), wide_hash(Long4::new(x, y, z, w)));
    }

    #[test]
    fn narrow_hash_matches_reference(lanes in any::<[i64; 4]>()) {
        let reference = lanes
            .iter()
            .zip(LONG4_HASH.narrow.iter())
            .fold(0u64, |acc, (&lane, &k)| acc.wrapping_add((lane as u64).wrapping_mul(k)))
            .wrapping_add(LONG4_HASH.narrow_offset);
        prop_assert_eq!(Long4::from(lanes).hash(), reference);
    }

    #[test]
    fn wide_lanes_are_not_combined(lanes in any::<[i64; 3]>()) {
        let wide = Long3::from(lanes).hash_wide().to_array();
        for i in 0..3 {
            let expected = (lanes[i] as u64)
                .wrapping_mul(LONG3_HASH.wide[i])
                .wrapping_add(LONG3_HASH.wide_offset);
            prop_assert_eq!(wide[i], expected);
        }
    }

    #[test]
    fn std_hash_agrees_with_equality(a in any::<[i64; 2]>(), b in any::<[i64; 2]>()) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let digest = |v: Long2| {
            let mut hasher = DefaultHasher::new();
            Hash::hash(&v, &mut hasher);
            hasher.finish()
        };
        let (a, b) = (Long2::from(a), Long2::from(b));
        if a == b {
            prop_assert_eq!(digest(a), digest(b));
        }
        prop_assert_eq!(digest(a), digest(a));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn single_bit_flips_change_long2_hash(samples in prop::collection::vec(any::<[i64; 2]>(), 64)) {
        let ratio = changed_flip_ratio(&samples, |lanes| Long2::from(lanes).hash());
        prop_assert!(ratio > 0.99, "only {:.4} of flips changed the hash", ratio);
    }

    #[test]
    fn single_bit_flips_change_long3_hash(samples in prop::collection::vec(any::<[i64; 3]>(), 64)) {
        let ratio = changed_flip_ratio(&samples, |lanes| Long3::from(lanes).hash());
        prop_assert!(ratio > 0.99, "only {:.4} of flips changed the hash", ratio);
    }

    #[test]
    fn single_bit_flips_change_long4_hash(samples in prop::collection::vec(any::<[i64; 4]>(), 64)) {
        let ratio = changed_flip_ratio(&samples, |lanes| Long4::from(lanes).hash());
        prop_assert!(ratio > 0.99, "only {:.4} of flips changed the hash", ratio);
    }

    #[test]
    fn single_bit_flips_change_wide_hash(samples in prop::collection::vec(any::<[i64; 4]>(), 64)) {
        let ratio = changed_flip_ratio(&samples, |lanes| {
            let wide = VectorHash::hash_wide(Long4::from(lanes));
            wide.x ^ wide.y.rotate_left(16) ^ wide.z.rotate_left(32) ^ wide.w.rotate_left(48)
        });
        prop_assert!(ratio > 0.99, "only {:.4} of flips changed the wide hash", ratio);
    }
}
