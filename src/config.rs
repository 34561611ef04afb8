//! Process-wide configuration defaults
//!
//! Every experiment call may set its own debug flag. When it doesn't, the
//! value configured here is used. This is a default, not shared call state:
//! nothing in the engine writes it.

use std::sync::atomic::{AtomicBool, Ordering};

static DEFAULT_DEBUG: AtomicBool = AtomicBool::new(false);

/// Set the debug flag used by calls that leave it unset.
pub fn set_default_debug(enabled: bool) {
    DEFAULT_DEBUG.store(enabled, Ordering::Relaxed);
}

/// Debug flag used by calls that leave it unset.
#[must_use]
pub fn default_debug() -> bool {
    DEFAULT_DEBUG.load(Ordering::Relaxed)
}
