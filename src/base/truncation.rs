//! Process-wide default for error-excerpt truncation.
//!
//! A materialized [`RequestError`](crate::RequestError) embeds an excerpt of
//! the failing body. How much of the body is retained is resolved per
//! wrapper through a [`TruncationPolicy`]; when a wrapper carries no policy
//! of its own, the process-wide default configured here applies.
//!
//! The default is plain mutable configuration, not a scoped setting: hosts
//! that swap it temporarily (for one test, one subsystem) must restore it
//! afterwards. [`TruncationGuard`] packages that save-restore discipline.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Characters of a failing body retained in an excerpt by default.
pub const DEFAULT_TRUNCATE_AT: usize = 120;

// 0 encodes "no truncation".
static GLOBAL_TRUNCATE_AT: AtomicUsize = AtomicUsize::new(DEFAULT_TRUNCATE_AT);

/// Current process-wide excerpt limit, `None` meaning unlimited.
pub fn global_truncate_at() -> Option<NonZeroUsize> {
    NonZeroUsize::new(GLOBAL_TRUNCATE_AT.load(Ordering::Relaxed))
}

/// Set the process-wide excerpt limit.
pub fn set_global_truncate_at(limit: NonZeroUsize) {
    GLOBAL_TRUNCATE_AT.store(limit.get(), Ordering::Relaxed);
}

/// Disable excerpt truncation process-wide.
pub fn set_global_dont_truncate() {
    GLOBAL_TRUNCATE_AT.store(0, Ordering::Relaxed);
}

/// Restore the built-in default of [`DEFAULT_TRUNCATE_AT`] characters.
pub fn reset_global_truncation() {
    GLOBAL_TRUNCATE_AT.store(DEFAULT_TRUNCATE_AT, Ordering::Relaxed);
}

/// RAII override of the process-wide excerpt limit.
///
/// Swaps the global default on construction and restores the previous value
/// on drop, so a temporary override cannot leak past its region.
#[derive(Debug)]
pub struct TruncationGuard {
    previous: usize,
}

impl TruncationGuard {
    /// Override the global limit for the guard's lifetime.
    pub fn truncate_at(limit: NonZeroUsize) -> Self {
        Self {
            previous: GLOBAL_TRUNCATE_AT.swap(limit.get(), Ordering::Relaxed),
        }
    }

    /// Disable truncation for the guard's lifetime.
    pub fn dont_truncate() -> Self {
        Self {
            previous: GLOBAL_TRUNCATE_AT.swap(0, Ordering::Relaxed),
        }
    }
}

impl Drop for TruncationGuard {
    fn drop(&mut self) {
        GLOBAL_TRUNCATE_AT.store(self.previous, Ordering::Relaxed);
    }
}

/// Per-wrapper truncation override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Fall back to the process-wide default.
    #[default]
    Inherit,
    /// Truncate excerpts to this many characters.
    At(NonZeroUsize),
    /// Keep the full body in excerpts.
    Unlimited,
}

impl TruncationPolicy {
    /// Resolve to a concrete character limit, `None` meaning unlimited.
    pub fn effective_limit(self) -> Option<NonZeroUsize> {
        match self {
            TruncationPolicy::Inherit => global_truncate_at(),
            TruncationPolicy::At(limit) => Some(limit),
            TruncationPolicy::Unlimited => None,
        }
    }
}
