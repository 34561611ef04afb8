//! Split-testing experiments
//!
//! Assigns a persistent variant of a named experiment to a client. The first
//! resolution picks a variant by weight (reproducibly when a seed is given)
//! and stores it; later resolutions return the stored variant unless the seed
//! changed.
//!
//! ## Pipeline
//!
//! ```text
//! ExperimentOptions ──validate──▶ AssignmentStore::read_variant_name
//!                                   │
//!                  ┌──── absent ────┴──── present ────┐
//!                  ▼                                  ▼
//!   normalize_weights → draw → select      lookup by name (seed conflict → re-pick)
//!                  │
//!                  ▼
//!   AssignmentStore::write_assignment
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use split_testing::experiment::{ExperimentOptions, Variant};
//! use split_testing::kv::MemoryKvStore;
//!
//! # fn main() -> split_testing::Result<()> {
//! let store = MemoryKvStore::new();
//!
//! let first = ExperimentOptions::builder("homepage-title")
//!     .variant(Variant::new("control").with_data(serde_json::json!("Super title")))
//!     .variant(Variant::new("test").with_data(serde_json::json!("Great title")))
//!     .store(&store)
//!     .resolve()?;
//!
//! // Same store, same answer
//! let again = ExperimentOptions::builder("homepage-title")
//!     .variant(Variant::new("control").with_data(serde_json::json!("Super title")))
//!     .variant(Variant::new("test").with_data(serde_json::json!("Great title")))
//!     .store(&store)
//!     .resolve()?;
//! assert_eq!(first, again);
//! # Ok(())
//! # }
//! ```

mod assignment;
mod controller;
mod logger;
mod options;
mod random;
mod select;
mod variant;
mod weight;

pub use assignment::{seed_key, variant_name_key, Assignment, AssignmentStore};
pub use controller::{picked_variant, picked_variant_name, resolve_variant, resolve_variant_with_rng};
pub use logger::{Logger, LOG_TARGET};
pub use options::{ExperimentConfig, ExperimentOptions, ExperimentOptionsBuilder, VariantCallback};
pub use random::{draw, random_index, seeded_random};
pub use select::{select_index, select_weighted};
pub use variant::Variant;
pub use weight::{check_weights, equal_weights, is_well_weighted, normalize_weights, WeightCheck};
