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

//! Environment flag probing.
//!
//! Mode selection depends on nothing but these indicators, so a child
//! process spawned with an inherited environment makes the same mode choice
//! as its parent's configuration dictates, whatever its arguments are.

use serde::Serialize;
use std::env;

/// Selects the embedded-runtime-only mode.
pub const ENV_RUNTIME_ONLY: &str = "VESTIBULE_RUNTIME_ONLY";

/// Selects the crash report service mode.
pub const ENV_CRASH_SERVICE: &str = "VESTIBULE_INTERNAL_CRASH_SERVICE";

/// Suppresses console attachment in modes that would otherwise attach.
pub const ENV_NO_ATTACH_CONSOLE: &str = "VESTIBULE_NO_ATTACH_CONSOLE";

/// Marks a CI run; inherited by child processes.
pub const ENV_CI: &str = "VESTIBULE_CI";

/// Command-line equivalent of [`ENV_CI`], compared case-insensitively.
pub const CI_COMMAND_LINE_TOKEN: &str = "--ci";

/// Check whether an environment variable is set to a non-empty value.
///
/// An existing-but-empty variable counts as unset, identically on every
/// platform. Pure query; repeated calls with no intervening mutation return
/// the same answer.
pub fn is_env_set(name: &str) -> bool {
    env::var_os(name).is_some_and(|value| !value.is_empty())
}

/// Read-only snapshot of the boolean indicators the dispatcher consumes.
///
/// Captured once at startup. The live environment is never re-read after
/// the snapshot is taken, so the mode decision cannot change underfoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvironmentFlags {
    runtime_only: bool,
    crash_service: bool,
    no_attach_console: bool,
    ci: bool,
}

impl EnvironmentFlags {
    /// Snapshot the dispatcher's indicators from the process environment.
    pub fn capture() -> Self {
        let flags = Self {
            runtime_only: is_env_set(ENV_RUNTIME_ONLY),
            crash_service: is_env_set(ENV_CRASH_SERVICE),
            no_attach_console: is_env_set(ENV_NO_ATTACH_CONSOLE),
            ci: is_env_set(ENV_CI),
        };
        log::debug!("Environment snapshot: {flags:?}");
        flags
    }

    /// Build a synthetic snapshot without touching the environment.
    ///
    /// Used by the selector tests and the probe's what-if reporting.
    pub fn from_parts(
        runtime_only: bool,
        crash_service: bool,
        no_attach_console: bool,
        ci: bool,
    ) -> Self {
        Self {
            runtime_only,
            crash_service,
            no_attach_console,
            ci,
        }
    }

    pub fn runtime_only(&self) -> bool {
        self.runtime_only
    }

    pub fn crash_service(&self) -> bool {
        self.crash_service
    }

    pub fn no_attach_console(&self) -> bool {
        self.no_attach_console
    }

    pub fn ci(&self) -> bool {
        self.ci
    }

    /// Variable names and captured values, in declaration order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            (ENV_RUNTIME_ONLY, self.runtime_only),
            (ENV_CRASH_SERVICE, self.crash_service),
            (ENV_NO_ATTACH_CONSOLE, self.no_attach_console),
            (ENV_CI, self.ci),
        ]
    }
}
