//! Weighted selection over a normalized variant set.

use super::Variant;

/// Index of the variant picked by `draw`.
///
/// Walks the variants in order with a remainder starting at `draw`: the first
/// variant whose weight exceeds the remainder wins, otherwise its weight is
/// subtracted. A variant without a weight counts as `0`.
///
/// When rounding leaves the walk without a hit (weights summing to slightly
/// less than the draw), the last variant is picked. Returns `None` only for an
/// empty slice.
#[must_use]
pub fn select_index(variants: &[Variant], draw: f64) -> Option<usize> {
    let mut remainder = draw;
    for (index, variant) in variants.iter().enumerate() {
        let weight = variant.weight().unwrap_or(0.0);
        if remainder < weight {
            return Some(index);
        }
        remainder -= weight;
    }
    variants.len().checked_sub(1)
}

/// The variant picked by `draw`. See [`select_index`].
#[must_use]
pub fn select_weighted(variants: &[Variant], draw: f64) -> Option<&Variant> {
    select_index(variants, draw).map(|index| &variants[index])
}
