//! Experiment controller - resolves the variant of a client
//!
//! ## State Machine (per experiment, per store)
//!
//! ```text
//! UNASSIGNED ──first resolve──▶ ASSIGNED ──seed conflict──▶ ASSIGNED (re-pick)
//! ```
//!
//! Leaving ASSIGNED only happens through external store mutation.

use rand::Rng;

use super::assignment::AssignmentStore;
use super::options::ExperimentOptions;
use super::random::draw;
use super::select::select_index;
use super::weight::normalize_weights;
use super::{Logger, Variant, LOG_TARGET};
use crate::error::ValidationError;
use crate::kv::KvStore;
use crate::{Error, Result};

/// Resolve the variant of an experiment, assigning one on the first call.
///
/// Unseeded picks draw from [`rand::thread_rng`].
///
/// # Errors
///
/// - [`Error::Validation`] for an empty name, no variants, an unnamed variant,
///   or no store available. Nothing is read or written in that case.
/// - [`Error::InconsistentState`] if the stored variant is not in `options`.
/// - Any store error, unchanged.
///
/// # Example
///
/// ```rust
/// use split_testing::experiment::{resolve_variant, ExperimentOptions, Variant};
/// use split_testing::kv::MemoryKvStore;
///
/// # fn main() -> split_testing::Result<()> {
/// let store = MemoryKvStore::new();
/// let options = ExperimentOptions::builder("test1")
///     .variant(Variant::new("control").with_weight(0.75))
///     .variant(Variant::new("test").with_weight(0.25))
///     .seed("abc")
///     .store(&store)
///     .build();
///
/// let variant = resolve_variant(options)?;
/// assert_eq!(variant.name(), "test");
/// # Ok(())
/// # }
/// ```
pub fn resolve_variant(options: ExperimentOptions<'_>) -> Result<Variant> {
    resolve_variant_with_rng(options, &mut rand::thread_rng())
}

/// [`resolve_variant`] drawing unseeded picks from `rng`.
///
/// # Errors
/// See [`resolve_variant`].
pub fn resolve_variant_with_rng<R: Rng + ?Sized>(
    mut options: ExperimentOptions<'_>,
    rng: &mut R,
) -> Result<Variant> {
    options.validate()?;

    match options.store.take() {
        Some(store) => resolve_in(options, store, rng),
        None => resolve_with_default_store(options, rng),
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
fn resolve_with_default_store<R: Rng + ?Sized>(
    options: ExperimentOptions<'_>,
    rng: &mut R,
) -> Result<Variant> {
    let store =
        crate::kv::LocalStorageKvStore::new().map_err(|_| ValidationError::NoStore)?;
    resolve_in(options, &store, rng)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
fn resolve_with_default_store<R: Rng + ?Sized>(
    _options: ExperimentOptions<'_>,
    _rng: &mut R,
) -> Result<Variant> {
    Err(ValidationError::NoStore.into())
}

fn resolve_in<R: Rng + ?Sized>(
    options: ExperimentOptions<'_>,
    store: &dyn KvStore,
    rng: &mut R,
) -> Result<Variant> {
    let ExperimentOptions {
        name,
        variants,
        seed,
        debug,
        resolve_seed_conflict,
        on_first_pick,
        ..
    } = options;
    let logger = Logger::from_flag(debug);
    let assignments = AssignmentStore::new(store);

    if logger.is_debug() {
        tracing::info!(
            target: LOG_TARGET,
            experiment = %name,
            variants = ?variants,
            seed = ?seed,
            resolve_seed_conflict,
            "Running split testing"
        );
    }

    let Some(stored_name) = assignments.read_variant_name(&name)? else {
        logger.info(format_args!("No variant stored for '{name}', picking it"));
        let picked = pick_and_persist(&assignments, &name, &variants, seed.as_deref(), &logger, rng)?;
        if let Some(callback) = on_first_pick {
            callback(&picked);
        }
        return Ok(picked);
    };

    logger.info(format_args!("Variant detected in store: {stored_name}"));
    let Some(stored) = variants.iter().find(|v| v.name() == stored_name) else {
        logger.error(format_args!(
            "Stored variant '{stored_name}' is not a variant of experiment '{name}'"
        ));
        return Err(Error::InconsistentState {
            experiment: name,
            variant: stored_name,
        });
    };

    if let Some(seed) = seed.as_deref() {
        if resolve_seed_conflict && !assignments.seed_matches(&name, Some(seed))? {
            logger.warn(format_args!(
                "Seed conflict for experiment '{name}', picking the variant again for the current seed"
            ));
            return pick_and_persist(&assignments, &name, &variants, Some(seed), &logger, rng);
        }
    }

    Ok(stored.clone())
}

// Draws before writing: a failed draw or selection leaves the store untouched.
fn pick_and_persist<S: KvStore, R: Rng + ?Sized>(
    assignments: &AssignmentStore<S>,
    experiment: &str,
    variants: &[Variant],
    seed: Option<&str>,
    logger: &Logger,
    rng: &mut R,
) -> Result<Variant> {
    let normalized = normalize_weights(variants, logger);
    let r = draw(seed, rng);
    let index = select_index(&normalized, r).ok_or(ValidationError::NoVariants)?;
    let picked = &variants[index];

    assignments.write_assignment(experiment, picked.name(), seed)?;
    logger.info(format_args!(
        "New picked variant: {}{}",
        picked.name(),
        if seed.is_some() { " (with seed)" } else { "" }
    ));

    Ok(picked.clone())
}

/// Name of the variant stored for `experiment`, if any.
///
/// # Errors
/// Returns the store's error.
pub fn picked_variant_name(store: &dyn KvStore, experiment: &str) -> Result<Option<String>> {
    AssignmentStore::new(store).read_variant_name(experiment)
}

/// The stored variant of `experiment`, looked up in `variants`.
///
/// Never picks. Returns `None` when nothing is stored or the stored name is not
/// among `variants`.
///
/// # Errors
/// Returns the store's error.
pub fn picked_variant(
    store: &dyn KvStore,
    experiment: &str,
    variants: &[Variant],
) -> Result<Option<Variant>> {
    let Some(name) = picked_variant_name(store, experiment)? else {
        return Ok(None);
    };
    Ok(variants.iter().find(|v| v.name() == name).cloned())
}
