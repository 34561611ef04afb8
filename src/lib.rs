//! # split-testing: Persistent, Deterministic Variant Assignment
//!
//! Assigns a variant of a named split-testing experiment to a client and
//! stores the assignment so repeat visits see the same variant.
//!
//! ## Design Principles
//!
//! - **Determinism**: a seed pins the draw, so equal seeds and equal variant
//!   sets always yield the same variant
//! - **Consistency**: a stored assignment wins over a fresh pick unless the
//!   seed changed
//! - **Pluggable persistence**: any [`kv::KvStore`] (in-memory, JSON file,
//!   browser local storage)
//! - **Fail fast**: malformed definitions are rejected before the store is read
//!
//! ## Example Usage
//!
//! ```rust
//! use split_testing::experiment::{ExperimentOptions, Variant};
//! use split_testing::kv::MemoryKvStore;
//!
//! let store = MemoryKvStore::new();
//!
//! let variant = ExperimentOptions::builder("test1")
//!     .variant(Variant::new("control").with_weight(0.75))
//!     .variant(Variant::new("test").with_weight(0.25))
//!     .seed("abc")
//!     .on_first_pick(|v| println!("Variant picked, named \"{}\"", v.name()))
//!     .store(&store)
//!     .resolve()?;
//!
//! assert_eq!(variant.name(), "test");
//! # Ok::<(), split_testing::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod experiment;
pub mod kv;
pub mod logging;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use error::{Error, Result, ValidationError};
pub use experiment::{resolve_variant, ExperimentConfig, ExperimentOptions, Variant};
