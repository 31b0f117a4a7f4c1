//! Process-wide theme registry.
//!
//! Prefer constructing a [`ThemeRegistry`] and passing it around. The global
//! instance exists for code that cannot thread a registry through, and is
//! created on first use.

use std::cell::Cell;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

use crate::registry::{ColorId, OverrideId, ScaleType, ValueId};
use crate::theme::ThemeRegistry;

static GLOBAL_THEME: Lazy<Mutex<ThemeRegistry>> = Lazy::new(|| Mutex::new(ThemeRegistry::new()));

thread_local! {
    static IN_GLOBAL: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as holding the global lock until dropped.
struct Entered;

impl Entered {
    fn enter() -> Self {
        if IN_GLOBAL.with(|flag| flag.replace(true)) {
            panic!(
                "global theme registry accessed re-entrantly from inside global::with or global::with_mut"
            );
        }
        Entered
    }
}

impl Drop for Entered {
    fn drop(&mut self) {
        IN_GLOBAL.with(|flag| flag.set(false));
    }
}

fn lock() -> MutexGuard<'static, ThemeRegistry> {
    // Entries are append-only, so a panic mid-registration leaves nothing half-written.
    GLOBAL_THEME
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` with shared access to the global registry.
///
/// # Panics
///
/// Panics if `f` calls back into this module (`with`, `with_mut` or any
/// `register_*` function). The lock is held while `f` runs and is not
/// re-entrant.
pub fn with<R>(f: impl FnOnce(&ThemeRegistry) -> R) -> R {
    let _entered = Entered::enter();
    f(&lock())
}

/// Runs `f` with exclusive access to the global registry.
///
/// # Panics
///
/// Panics if `f` calls back into this module, as for [`with`].
pub fn with_mut<R>(f: impl FnOnce(&mut ThemeRegistry) -> R) -> R {
    let _entered = Entered::enter();
    f(&mut lock())
}

/// Registers a color in the global registry.
pub fn register_color(name: impl Into<String>, source_path: &str, default_color: u32) -> ColorId {
    with_mut(|theme| {
        theme
            .colors_mut()
            .register(name, source_path, default_color)
    })
}

/// Registers a scalar value in the global registry.
pub fn register_value(
    name: impl Into<String>,
    source_path: &str,
    default_value: f32,
    scale_type: ScaleType,
    round_to_pixel: bool,
) -> ValueId {
    with_mut(|theme| {
        theme.values_mut().register(
            name,
            source_path,
            default_value,
            scale_type,
            round_to_pixel,
        )
    })
}

/// Registers a palette override context in the global registry.
pub fn register_override(name: impl Into<String>) -> OverrideId {
    with_mut(|theme| theme.overrides_mut().register(name))
}
