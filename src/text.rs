// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text-processing subsystem initialization.
//!
//! Must run before the embedded runtime or the framework perform any
//! locale-sensitive string operation. Initialized once per process, never
//! re-initialized; repeated calls are no-ops.

use std::sync::atomic::{AtomicBool, Ordering};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the locale-dependent text subsystem.
///
/// The first call performs the platform locale setup; every later call
/// returns immediately. Safe to call from any mode, but the dispatcher only
/// does so on the paths that bypass the full framework (the framework runs
/// its own equivalent).
pub fn initialize() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::trace!("Text subsystem already initialized, skipping");
        return;
    }
    platform_initialize();
    log::debug!("Text subsystem initialized");
}

/// Whether [`initialize`] has run in this process.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

#[cfg(unix)]
fn platform_initialize() {
    // The empty locale string selects the user's environment locale.
    let result = unsafe { libc::setlocale(libc::LC_ALL, c"".as_ptr()) };
    if result.is_null() {
        log::warn!("setlocale(LC_ALL, \"\") failed; continuing with the C locale");
    }
}

#[cfg(windows)]
fn platform_initialize() {
    use std::os::raw::{c_char, c_int};

    const LC_ALL: c_int = 0;

    unsafe extern "C" {
        fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char;
    }

    let result = unsafe { setlocale(LC_ALL, c"".as_ptr()) };
    if result.is_null() {
        log::warn!("setlocale(LC_ALL, \"\") failed; continuing with the C locale");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        initialize();
        assert!(is_initialized());

        // Second call must be a no-op, not a re-initialization.
        initialize();
        assert!(is_initialized());
    }
}
