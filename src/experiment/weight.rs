//! Weight validation and the equal-probability fallback.

use std::borrow::Cow;

use super::{Logger, Variant};

/// Outcome of checking the weights of a variant set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightCheck {
    /// Every variant has a weight and they sum to exactly 1.
    WellWeighted,
    /// No variant has a weight.
    Missing,
    /// Some variants have a weight but not all of them.
    Partial,
    /// Every variant has a weight but the total is not 1.
    BadTotal(f64),
    /// A weight is negative, NaN or infinite.
    Invalid,
}

impl WeightCheck {
    /// Whether the weights can be used as-is.
    #[must_use]
    pub const fn is_well_weighted(&self) -> bool {
        matches!(self, Self::WellWeighted)
    }
}

/// Check the weights of `variants`.
///
/// The total is summed in order starting from `0.0` and compared to `1.0`
/// exactly, with no tolerance.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn check_weights(variants: &[Variant]) -> WeightCheck {
    let weighted = variants.iter().filter(|v| v.weight().is_some()).count();
    if weighted == 0 {
        return WeightCheck::Missing;
    }
    if weighted < variants.len() {
        return WeightCheck::Partial;
    }

    let weights = variants.iter().filter_map(Variant::weight);
    if weights.clone().any(|w| !w.is_finite() || w < 0.0) {
        return WeightCheck::Invalid;
    }

    let total = weights.fold(0.0, |acc, w| acc + w);
    if total == 1.0 {
        WeightCheck::WellWeighted
    } else {
        WeightCheck::BadTotal(total)
    }
}

/// Whether every variant has a weight and the weights sum to exactly 1.
#[must_use]
pub fn is_well_weighted(variants: &[Variant]) -> bool {
    check_weights(variants).is_well_weighted()
}

/// Copy `variants`, giving every one of them weight `1 / n`.
///
/// Order and all other fields are preserved.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn equal_weights(variants: &[Variant]) -> Vec<Variant> {
    let weight = 1.0 / variants.len() as f64;
    variants
        .iter()
        .map(|v| v.clone().with_weight(weight))
        .collect()
}

/// Return `variants` unchanged when well-weighted, else an equal-weight copy.
///
/// The input is never mutated. Inconsistent weights (partial, bad total,
/// invalid values) are reported as warnings; a set with no weights at all is
/// the normal unweighted case and only logged when debugging.
pub fn normalize_weights<'a>(variants: &'a [Variant], logger: &Logger) -> Cow<'a, [Variant]> {
    match check_weights(variants) {
        WeightCheck::WellWeighted => return Cow::Borrowed(variants),
        WeightCheck::Missing => {}
        WeightCheck::Partial => logger.warn(format_args!(
            "Some variants have a weight but not all of them, reset of all weights"
        )),
        WeightCheck::BadTotal(total) => logger.warn(format_args!(
            "The total of all weights is {total}, not 1, reset of all weights"
        )),
        WeightCheck::Invalid => logger.warn(format_args!(
            "Weights must be finite and non-negative, reset of all weights"
        )),
    }

    logger.debug(format_args!(
        "Making all weights equal so the variants have the same probability of being picked"
    ));
    Cow::Owned(equal_weights(variants))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(weights: &[Option<f64>]) -> Vec<Variant> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let v = Variant::new(format!("v{i}"));
                match w {
                    Some(w) => v.with_weight(*w),
                    None => v,
                }
            })
            .collect()
    }

    #[test]
    fn test_check_well_weighted() {
        let variants = weighted(&[Some(0.75), Some(0.25)]);
        assert_eq!(check_weights(&variants), WeightCheck::WellWeighted);
        assert!(is_well_weighted(&variants));
    }

    #[test]
    fn test_check_missing() {
        assert_eq!(check_weights(&weighted(&[None, None])), WeightCheck::Missing);
    }

    #[test]
    fn test_check_partial() {
        assert_eq!(
            check_weights(&weighted(&[Some(0.5), None])),
            WeightCheck::Partial
        );
    }

    #[test]
    fn test_check_bad_total() {
        assert_eq!(
            check_weights(&weighted(&[Some(0.5), Some(0.6)])),
            WeightCheck::BadTotal(0.5 + 0.6)
        );
    }

    #[test]
    fn test_check_has_no_tolerance() {
        // ten times 0.1 sums to 0.9999999999999999 in f64
        let variants = weighted(&[Some(0.1); 10]);
        assert!(matches!(check_weights(&variants), WeightCheck::BadTotal(_)));
    }

    #[test]
    fn test_check_invalid() {
        assert_eq!(
            check_weights(&weighted(&[Some(1.5), Some(-0.5)])),
            WeightCheck::Invalid
        );
        assert_eq!(
            check_weights(&weighted(&[Some(f64::NAN), Some(0.5)])),
            WeightCheck::Invalid
        );
    }

    #[test]
    fn test_equal_weights_preserves_order_and_data() {
        let variants = vec![
            Variant::new("a").with_data(serde_json::json!(1)),
            Variant::new("b").with_weight(0.9),
            Variant::new("c"),
            Variant::new("d"),
        ];

        let equal = equal_weights(&variants);

        let names: Vec<_> = equal.iter().map(Variant::name).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
        assert!(equal.iter().all(|v| v.weight() == Some(0.25)));
        assert_eq!(equal[0].data(), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_normalize_borrows_well_weighted_input() {
        let variants = weighted(&[Some(0.5), Some(0.5)]);

        let normalized = normalize_weights(&variants, &Logger::new(false));

        assert!(matches!(normalized, Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_never_mutates_input() {
        let variants = weighted(&[Some(0.5), None, None]);

        let normalized = normalize_weights(&variants, &Logger::new(false));

        assert!(matches!(normalized, Cow::Owned(_)));
        assert_eq!(variants[1].weight(), None);
        assert_eq!(variants[0].weight(), Some(0.5));
        assert!(normalized.iter().all(|v| v.weight() == Some(1.0 / 3.0)));
    }
}
