//! Optional process-wide `KzgSettings` slot (feature `global-settings`).
//!
//! The core library never touches this — every function in [`crate::kzg`]
//! takes `&KzgSettings` explicitly. This module exists only as the
//! convenience the design notes call for: a single mutex-guarded slot for
//! bindings that want C-API-shaped `load_trusted_setup`/`free_trusted_setup`
//! globals instead of threading a settings value through their own FFI
//! surface.

use std::sync::{Arc, Mutex, OnceLock};

use crate::error::{bad_args, Error};
use crate::kzg_settings::KzgSettings;

fn slot() -> &'static Mutex<Option<Arc<KzgSettings>>> {
    static SLOT: OnceLock<Mutex<Option<Arc<KzgSettings>>>> = OnceLock::new();
    SLOT.get_or_init(|| Mutex::new(None))
}

/// Loads `settings` into the global slot. Replaces whatever was there
/// before; the previous `Arc` is dropped once every outstanding
/// `global_settings()` clone of it is gone.
pub fn load_trusted_setup(settings: KzgSettings) {
    let mut guard = slot().lock().expect("global kzg settings mutex poisoned");
    *guard = Some(Arc::new(settings));
}

/// Clears the global slot.
pub fn free_trusted_setup() {
    let mut guard = slot().lock().expect("global kzg settings mutex poisoned");
    *guard = None;
}

/// Returns the currently loaded global settings, or `BadArgs` if none have
/// been loaded yet.
pub fn global_settings() -> Result<Arc<KzgSettings>, Error> {
    slot()
        .lock()
        .expect("global kzg settings mutex poisoned")
        .clone()
        .ok_or_else(|| bad_args("no trusted setup has been loaded into the global slot"))
}
