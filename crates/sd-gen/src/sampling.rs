//! Sampling primitives shared by the generators

use rand::seq::index;
use rand::Rng;

/// Round a monetary amount or fraction to two decimal places
pub fn round_to_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Pick from a fixed categorical distribution.
///
/// Weights need not sum to one. `choices` must be non-empty.
pub fn pick_weighted<T: Copy, R: Rng + ?Sized>(choices: &[(T, f64)], rng: &mut R) -> T {
    let total: f64 = choices.iter().map(|(_, w)| w).sum();
    let mut target = rng.gen::<f64>() * total;
    for (item, weight) in choices {
        if target < *weight {
            return *item;
        }
        target -= weight;
    }
    // Float drift can leave a sliver past the last bucket
    choices[choices.len() - 1].0
}

/// Pick uniformly from a non-empty slice
pub fn pick_uniform<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Sample `k` distinct indices uniformly from `[0, n)`.
///
/// `k` is capped at `n`. The result is in sampling order, not sorted.
pub fn sample_indices<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    index::sample(rng, n, k.min(n)).into_vec()
}
