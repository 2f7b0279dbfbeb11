//! Global library settings.
//!
//! [`Settings`] holds the **default rounding mode**: the mode used whenever
//! a money value is normalized without an explicit rounding policy. It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`, initialised
//! on first use and never torn down.
//!
//! Thread safety: the mode is stored behind a `RwLock` so that it can be
//! changed from any thread. Code that changes it temporarily should use
//! [`ScopedDefaultRounding`], which restores the previous mode on drop.

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::rounding_mode::RoundingMode;

/// Process-wide settings used by the tender crates.
pub struct Settings {
    default_rounding: RwLock<RoundingMode>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_rounding: RwLock::new(RoundingMode::default()),
        })
    }

    /// The mode applied when no rounding policy is given.
    pub fn default_rounding(&self) -> RoundingMode {
        // A plain `Copy` value cannot be left half-written.
        *self
            .default_rounding
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the default rounding mode, returning the previous one.
    pub fn set_default_rounding(&self, mode: RoundingMode) -> RoundingMode {
        let mut guard = self
            .default_rounding
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, mode)
    }

    /// Restore the default rounding mode to [`RoundingMode::HalfToEven`].
    pub fn reset_default_rounding(&self) {
        self.set_default_rounding(RoundingMode::default());
    }
}

/// RAII guard that overrides the default rounding mode for its lifetime.
///
/// ```
/// use tender_core::{RoundingMode, ScopedDefaultRounding, Settings};
///
/// {
///     let _guard = ScopedDefaultRounding::new(RoundingMode::Floor);
///     assert_eq!(Settings::instance().default_rounding(), RoundingMode::Floor);
/// }
/// ```
#[must_use = "the previous mode is restored as soon as the guard is dropped"]
pub struct ScopedDefaultRounding {
    previous: RoundingMode,
}

impl ScopedDefaultRounding {
    /// Install `mode` as the default until the guard is dropped.
    pub fn new(mode: RoundingMode) -> Self {
        let previous = Settings::instance().set_default_rounding(mode);
        Self { previous }
    }
}

impl Drop for ScopedDefaultRounding {
    fn drop(&mut self) {
        Settings::instance().set_default_rounding(self.previous);
    }
}
