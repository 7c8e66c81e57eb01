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

//! Debug-report routing for automated runs.
//!
//! On Windows, assertion failures and critical errors surface as modal
//! dialogs that hang a CI run forever. Routing them to standard error keeps
//! automation moving. Unix reports already reach stderr, so nothing to do.

/// Redirect debug assertion and error reporting to standard error.
///
/// Idempotent; the dispatcher calls it once when a CI indicator is present.
pub fn route_to_stderr() {
    platform_route();
}

#[cfg(unix)]
fn platform_route() {
    log::trace!("Debug reports already reach stderr on this platform");
}

#[cfg(windows)]
fn platform_route() {
    use std::os::raw::c_int;
    use winapi::um::errhandlingapi::SetErrorMode;
    use winapi::um::winbase::{SEM_FAILCRITICALERRORS, SEM_NOGPFAULTERRORBOX};

    const OUT_TO_STDERR: c_int = 1;

    unsafe extern "C" {
        fn _set_error_mode(mode: c_int) -> c_int;
    }

    unsafe {
        SetErrorMode(SEM_FAILCRITICALERRORS | SEM_NOGPFAULTERRORBOX);
        _set_error_mode(OUT_TO_STDERR);
    }
    log::debug!("Debug reports routed to stderr");
}
