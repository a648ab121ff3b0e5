//! Shuffle distribution and fixture tests.

use std::collections::HashMap;

use fairdraw::{FixedEntropy, SampleError, Sampler, SamplerConfiguration, ScriptedEntropy};

fn permutation_counts(
    config: SamplerConfiguration,
    seed: u64,
    trials: usize,
) -> HashMap<Vec<u8>, u32> {
    let mut sampler = Sampler::seeded(seed).with_config(config);
    let mut counts = HashMap::new();
    for _ in 0..trials {
        let mut items = vec![0u8, 1, 2, 3];
        sampler.shuffle_slice(&mut items).expect("seeded");
        *counts.entry(items).or_insert(0) += 1;
    }
    counts
}

fn assert_uniform(counts: &HashMap<Vec<u8>, u32>, expected: u32) {
    // 4! permutations, each within 15% of the uniform share
    assert_eq!(counts.len(), 24, "missing permutations: {:?}", counts);
    let low = expected * 85 / 100;
    let high = expected * 115 / 100;
    for (permutation, &count) in counts {
        assert!(
            (low..=high).contains(&count),
            "permutation {:?} seen {} times, expected about {}",
            permutation,
            count,
            expected
        );
    }
}

#[test]
fn test_batched_shuffle_is_uniform() {
    let counts = permutation_counts(SamplerConfiguration::default(), 42, 24_000);
    assert_uniform(&counts, 1_000);
}

#[test]
fn test_stepwise_shuffle_is_uniform() {
    let counts = permutation_counts(SamplerConfiguration::unbatched(), 43, 24_000);
    assert_uniform(&counts, 1_000);
}

#[test]
fn test_position_distribution_for_larger_n() {
    // Element 0 should land in each of 40 slots about equally often;
    // 40 positions need two batches, so the batch boundary is covered
    let n = 40;
    let trials = 20_000;
    let mut sampler = Sampler::seeded(7);
    let mut landing = vec![0u32; n];
    for _ in 0..trials {
        let mut items: Vec<usize> = (0..n).collect();
        sampler.shuffle_slice(&mut items).expect("seeded");
        let slot = items.iter().position(|&x| x == 0).expect("element present");
        landing[slot] += 1;
    }

    // Expected 500 per slot
    for (slot, &count) in landing.iter().enumerate() {
        assert!(
            (375..=625).contains(&count),
            "slot {} received element 0 {} times",
            slot,
            count
        );
    }
}

#[test]
fn test_zero_stream_golden_fixture() {
    for config in [SamplerConfiguration::default(), SamplerConfiguration::unbatched()] {
        let mut items = [0, 1, 2, 3, 4];
        Sampler::new(FixedEntropy::zeros())
            .with_config(config)
            .shuffle_slice(&mut items)
            .expect("fixed");

        // Every digit is 0, so each step swaps position i with 0
        assert_eq!(items, [1, 2, 3, 4, 0]);
    }
}

#[test]
fn test_swap_calls_are_sequential_and_bounded() {
    let mut sampler = Sampler::seeded(99);
    let n = 1_000;
    let mut expected_i = n - 1;
    sampler
        .shuffle(n, |i, j| {
            assert_eq!(i, expected_i);
            assert!(j <= i);
            expected_i = expected_i.saturating_sub(1);
        })
        .expect("seeded");
    assert_eq!(expected_i, 0);
}

#[test]
fn test_failure_leaves_partial_shuffle() {
    let mut items: Vec<usize> = (0..30).collect();
    let mut sampler = Sampler::new(ScriptedEntropy::new([0]));
    let err = sampler
        .shuffle_slice(&mut items)
        .expect_err("entropy runs out after the first batch");

    assert!(matches!(err, SampleError::EntropySourceFailure(_)));
    // The first batch swapped positions 29..=16 with 0
    assert_ne!(items, (0..30).collect::<Vec<_>>());
    assert_eq!(items[29], 0);
}
