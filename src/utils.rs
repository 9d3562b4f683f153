//! Utility functions for sampling and summarising matchbox contents

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

/// Calculate Shannon entropy (in nats) from non-negative weights.
///
/// Weights are normalised first. Returns 0.0 when the total weight is zero.
///
/// # Examples
///
/// ```
/// use magic_menace::utils::entropy_from_weights;
///
/// let entropy = entropy_from_weights(vec![1.0, 1.0]);
/// assert!((entropy - std::f64::consts::LN_2).abs() < 0.001);
///
/// assert_eq!(entropy_from_weights(vec![0.0, 0.0]), 0.0);
/// ```
pub fn entropy_from_weights<I>(weights: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let weights: Vec<f64> = weights.into_iter().collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    weights
        .iter()
        .map(|w| w / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.ln())
        .sum()
}

/// Sample an item with probability proportional to its weight.
///
/// Falls back to uniform sampling when every weight is zero, and returns
/// `None` only for an empty slice.
pub fn weighted_sample<R, T, W>(rng: &mut R, items: &[(T, W)]) -> Option<T>
where
    R: Rng,
    T: Clone,
    W: Into<f64> + Copy,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| (*w).into()).sum();
    if total <= 0.0 {
        return items.choose(rng).map(|(item, _)| item.clone());
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;
    for (item, weight) in items {
        let w = (*weight).into();
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    // Rounding can leave a sliver past the last bucket
    items.last().map(|(item, _)| item.clone())
}
