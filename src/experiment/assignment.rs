//! Assignment store - persisted (variant name, seed) pair per experiment
//!
//! ## Key Layout
//!
//! ```text
//! {experiment}-variant-name → name of the picked variant
//! {experiment}-seed         → seed used for the pick (absent when unseeded)
//! ```

use serde::{Deserialize, Serialize};

use crate::kv::KvStore;
use crate::Result;

const VARIANT_NAME_SUFFIX: &str = "-variant-name";
const SEED_SUFFIX: &str = "-seed";

/// Store key holding the picked variant name of `experiment`.
#[must_use]
pub fn variant_name_key(experiment: &str) -> String {
    format!("{experiment}{VARIANT_NAME_SUFFIX}")
}

/// Store key holding the seed of `experiment`.
#[must_use]
pub fn seed_key(experiment: &str) -> String {
    format!("{experiment}{SEED_SUFFIX}")
}

/// Typed view of a persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    variant_name: String,
    seed: Option<String>,
}

impl Assignment {
    /// Create an assignment.
    #[must_use]
    pub fn new(variant_name: impl Into<String>, seed: Option<String>) -> Self {
        Self {
            variant_name: variant_name.into(),
            seed,
        }
    }

    /// Name of the assigned variant.
    #[must_use]
    pub fn variant_name(&self) -> &str {
        &self.variant_name
    }

    /// Seed used for the pick, if any.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }
}

/// Reads and writes assignments through a [`KvStore`].
///
/// Store errors are returned as-is. The two writes of
/// [`write_assignment`](Self::write_assignment) are not atomic.
#[derive(Debug)]
pub struct AssignmentStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> AssignmentStore<S> {
    /// Wrap a store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Get reference to inner store.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.store
    }

    /// Stored variant name of `experiment`.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn read_variant_name(&self, experiment: &str) -> Result<Option<String>> {
        self.store.get(&variant_name_key(experiment))
    }

    /// Stored seed of `experiment`.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn read_seed(&self, experiment: &str) -> Result<Option<String>> {
        self.store.get(&seed_key(experiment))
    }

    /// Stored assignment of `experiment`, `None` if no variant name is stored.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn read_assignment(&self, experiment: &str) -> Result<Option<Assignment>> {
        let Some(variant_name) = self.read_variant_name(experiment)? else {
            return Ok(None);
        };
        let seed = self.read_seed(experiment)?;
        Ok(Some(Assignment { variant_name, seed }))
    }

    /// Persist a pick.
    ///
    /// The variant name is always written. The seed is written when given and
    /// removed otherwise, so a stale seed never survives an unseeded pick.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn write_assignment(
        &self,
        experiment: &str,
        variant_name: &str,
        seed: Option<&str>,
    ) -> Result<()> {
        self.store.set(&variant_name_key(experiment), variant_name)?;
        match seed {
            Some(seed) => self.store.set(&seed_key(experiment), seed),
            None => self.store.remove(&seed_key(experiment)),
        }
    }

    /// Whether the stored seed equals `seed` (absent equals absent).
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn seed_matches(&self, experiment: &str, seed: Option<&str>) -> Result<bool> {
        Ok(self.read_seed(experiment)?.as_deref() == seed)
    }

    /// Remove both entries of `experiment`.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn clear(&self, experiment: &str) -> Result<()> {
        self.store.remove(&variant_name_key(experiment))?;
        self.store.remove(&seed_key(experiment))
    }
}
