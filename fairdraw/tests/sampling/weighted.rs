//! Weighted choice and weighted shuffle properties.

use std::collections::{HashMap, HashSet};

use fairdraw::{SampleError, Sampler, ScriptedEntropy};

#[test]
fn test_invalid_weight_vectors() {
    let mut sampler = Sampler::new(ScriptedEntropy::exhausted());
    let cases: [&[f64]; 3] = [&[], &[0.0, 0.0], &[-1.0, -2.0]];
    for weights in cases {
        assert!(
            matches!(
                sampler.weighted_choice(weights),
                Err(SampleError::InvalidWeights(_))
            ),
            "weights {:?}",
            weights
        );
        assert!(matches!(
            sampler.weighted_order(weights),
            Err(SampleError::InvalidWeights(_))
        ));
    }
}

#[test]
fn test_choice_frequencies_follow_weights() {
    let weights = [2.0, 0.0, 5.0, 3.0];
    let trials = 50_000;
    let mut sampler = Sampler::seeded(314);
    let mut counts = [0u32; 4];
    for _ in 0..trials {
        counts[sampler.weighted_choice(&weights).expect("seeded")] += 1;
    }

    assert_eq!(counts[1], 0);
    for (index, &weight) in weights.iter().enumerate().filter(|(_, w)| **w > 0.0) {
        let expected = trials as f64 * weight / 10.0;
        let observed = f64::from(counts[index]);
        assert!(
            (observed - expected).abs() < expected * 0.05,
            "index {} observed {} expected {}",
            index,
            observed,
            expected
        );
    }
}

#[test]
fn test_tiny_weight_beside_huge_one_is_starved() {
    // 1e-6 next to 1e30 is below double precision resolution of the sum
    let mut sampler = Sampler::seeded(1);
    for _ in 0..1_000 {
        assert_eq!(sampler.weighted_choice(&[1e-6, 1e30]).expect("seeded"), 1);
    }
}

#[test]
fn test_weighted_shuffle_is_a_permutation_of_positive_indices() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let weights = [0.5, 4.0, 0.0, 1.5, -1.0, 2.0, 0.0, 9.0];
    let positive: HashSet<usize> = [0, 1, 3, 5, 7].into_iter().collect();
    let mut sampler = Sampler::seeded(2718);

    for _ in 0..200 {
        let mut seen = HashSet::new();
        sampler
            .weighted_shuffle(&weights, |index| {
                assert!(seen.insert(index), "index {} visited twice", index);
                Ok::<(), SampleError>(())
            })
            .expect("seeded");
        assert_eq!(seen, positive);
    }
}

#[test]
fn test_first_draw_of_weighted_shuffle_matches_choice_distribution() {
    let weights = [1.0, 3.0];
    let mut sampler = Sampler::seeded(77);
    let mut heavy_first = 0u32;
    for _ in 0..20_000 {
        if sampler.weighted_order(&weights).expect("seeded")[0] == 1 {
            heavy_first += 1;
        }
    }

    // Expected 15,000
    assert!((14_250..=15_750).contains(&heavy_first), "heavy first {}", heavy_first);
}

/// Probability of drawing `order` when each draw is proportional to the
/// mass not yet drawn.
fn order_probability(weights: &[f64], order: &[usize]) -> f64 {
    let mut remaining: f64 = weights.iter().sum();
    let mut probability = 1.0;
    for &index in order {
        probability *= weights[index] / remaining;
        remaining -= weights[index];
    }
    probability
}

#[test]
fn test_every_draw_follows_remaining_mass() {
    let weights = [1.0, 2.0, 3.0];
    let trials = 60_000;
    let mut sampler = Sampler::seeded(1618);
    let mut counts: HashMap<Vec<usize>, u32> = HashMap::new();
    for _ in 0..trials {
        *counts
            .entry(sampler.weighted_order(&weights).expect("seeded"))
            .or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "orders {:?}", counts);
    // [2, 1, 0]: 3/6 * 2/3 = 1/3, [0, 1, 2]: 1/6 * 2/5 = 1/15
    assert!((order_probability(&weights, &[2, 1, 0]) - 1.0 / 3.0).abs() < 1e-12);
    assert!((order_probability(&weights, &[0, 1, 2]) - 1.0 / 15.0).abs() < 1e-12);

    for (order, &count) in &counts {
        let expected = f64::from(trials) * order_probability(&weights, order);
        let observed = f64::from(count);
        assert!(
            (observed - expected).abs() < expected * 0.06,
            "order {:?} observed {} expected {}",
            order,
            observed,
            expected
        );
    }
}

#[test]
fn test_later_draws_exclude_drawn_mass() {
    // After the heavy index leads, the two light ones split evenly
    let weights = [1.0, 1.0, 98.0];
    let mut sampler = Sampler::seeded(4242);
    let mut second = [0u32; 3];
    for _ in 0..20_000 {
        let order = sampler.weighted_order(&weights).expect("seeded");
        if order[0] == 2 {
            second[order[1]] += 1;
        }
    }

    let total = second[0] + second[1];
    assert_eq!(second[2], 0);
    let share = f64::from(second[0]) / f64::from(total);
    assert!((0.47..=0.53).contains(&share), "share {} of {}", share, total);
}
