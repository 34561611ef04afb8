//! Experiment definition: options builder and serde-loadable config

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Variant;
use crate::error::ValidationError;
use crate::kv::KvStore;
use crate::Result;

/// Callback invoked with the variant picked on a first assignment.
pub type VariantCallback<'a> = Box<dyn FnOnce(&Variant) + 'a>;

/// Everything needed to resolve the variant of one experiment.
///
/// Built with [`ExperimentOptions::builder`] and consumed by
/// [`resolve_variant`](super::resolve_variant).
pub struct ExperimentOptions<'a> {
    pub(crate) name: String,
    pub(crate) variants: Vec<Variant>,
    pub(crate) seed: Option<String>,
    pub(crate) debug: Option<bool>,
    pub(crate) resolve_seed_conflict: bool,
    pub(crate) on_first_pick: Option<VariantCallback<'a>>,
    pub(crate) store: Option<&'a dyn KvStore>,
}

impl<'a> ExperimentOptions<'a> {
    /// Create options with the required fields and defaults for the rest.
    #[must_use]
    pub fn new(name: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            name: name.into(),
            variants,
            seed: None,
            debug: None,
            resolve_seed_conflict: true,
            on_first_pick: None,
            store: None,
        }
    }

    /// Create a builder for constructing options with optional fields.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ExperimentOptionsBuilder<'a> {
        ExperimentOptionsBuilder::new(name)
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the candidate variants.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Get the seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Get the explicit debug flag, if any.
    #[must_use]
    pub const fn debug(&self) -> Option<bool> {
        self.debug
    }

    /// Whether a changed seed re-picks an existing assignment.
    #[must_use]
    pub const fn resolve_seed_conflict(&self) -> bool {
        self.resolve_seed_conflict
    }

    /// Check the definition without touching any store.
    ///
    /// Store availability is checked at resolution time.
    ///
    /// # Errors
    /// Returns the first problem found: empty name, no variants, or an
    /// unnamed variant.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyExperimentName);
        }
        if self.variants.is_empty() {
            return Err(ValidationError::NoVariants);
        }
        if let Some(index) = self.variants.iter().position(|v| v.name().is_empty()) {
            return Err(ValidationError::UnnamedVariant { index });
        }
        Ok(())
    }
}

impl fmt::Debug for ExperimentOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentOptions")
            .field("name", &self.name)
            .field("variants", &self.variants)
            .field("seed", &self.seed)
            .field("debug", &self.debug)
            .field("resolve_seed_conflict", &self.resolve_seed_conflict)
            .field("on_first_pick", &self.on_first_pick.is_some())
            .field("store", &self.store.is_some())
            .finish()
    }
}

/// Builder for `ExperimentOptions`.
#[derive(Debug)]
pub struct ExperimentOptionsBuilder<'a> {
    options: ExperimentOptions<'a>,
}

impl<'a> ExperimentOptionsBuilder<'a> {
    /// Create a new builder with the experiment name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            options: ExperimentOptions::new(name, Vec::new()),
        }
    }

    /// Append one variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.options.variants.push(variant);
        self
    }

    /// Append several variants, keeping their order.
    #[must_use]
    pub fn variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.options.variants.extend(variants);
        self
    }

    /// Pin the draw to `seed`.
    #[must_use]
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.options.seed = Some(seed.into());
        self
    }

    /// Enable or disable info logging for this experiment.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.options.debug = Some(debug);
        self
    }

    /// Whether a changed seed re-picks an existing assignment (default `true`).
    #[must_use]
    pub const fn resolve_seed_conflict(mut self, resolve: bool) -> Self {
        self.options.resolve_seed_conflict = resolve;
        self
    }

    /// Call `callback` with the variant when it is first assigned.
    #[must_use]
    pub fn on_first_pick(mut self, callback: impl FnOnce(&Variant) + 'a) -> Self {
        self.options.on_first_pick = Some(Box::new(callback));
        self
    }

    /// Persist the assignment in `store`.
    #[must_use]
    pub fn store(mut self, store: &'a dyn KvStore) -> Self {
        self.options.store = Some(store);
        self
    }

    /// Build the `ExperimentOptions`.
    #[must_use]
    pub fn build(self) -> ExperimentOptions<'a> {
        self.options
    }

    /// Build and resolve in one step.
    ///
    /// # Errors
    /// See [`resolve_variant`](super::resolve_variant).
    pub fn resolve(self) -> Result<Variant> {
        super::resolve_variant(self.build())
    }
}

/// Serializable experiment definition, e.g. loaded from a JSON file.
///
/// Callbacks and stores are attached after loading through
/// [`into_builder`](Self::into_builder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Experiment name, also the store key prefix
    pub name: String,
    /// Candidate variants in selection order
    pub variants: Vec<Variant>,
    /// Optional seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Optional debug flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Whether a changed seed re-picks an existing assignment
    #[serde(default = "default_resolve_seed_conflict", alias = "resolveSeedConflict")]
    pub resolve_seed_conflict: bool,
}

const fn default_resolve_seed_conflict() -> bool {
    true
}

impl ExperimentConfig {
    /// Parse a config from JSON.
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or misses required fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into a builder to attach a store and callbacks.
    #[must_use]
    pub fn into_builder<'a>(self) -> ExperimentOptionsBuilder<'a> {
        let mut builder = ExperimentOptions::builder(self.name)
            .variants(self.variants)
            .resolve_seed_conflict(self.resolve_seed_conflict);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if let Some(debug) = self.debug {
            builder = builder.debug(debug);
        }
        builder
    }
}
