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

//! Shared helpers for the integration suite.

use assert_cmd::Command;

/// Every variable the dispatcher or the host reads. Tests start from a
/// clean slate and opt into the ones they exercise.
pub const DISPATCH_VARS: [&str; 5] = [
    "VESTIBULE_RUNTIME_ONLY",
    "VESTIBULE_INTERNAL_CRASH_SERVICE",
    "VESTIBULE_NO_ATTACH_CONSOLE",
    "VESTIBULE_CI",
    "VESTIBULE_HOST_EXIT_CODE",
];

fn scrubbed(binary: &str) -> Command {
    let mut cmd = Command::cargo_bin(binary).expect("binary should be built");
    for var in DISPATCH_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// The reference host with a scrubbed dispatch environment.
pub fn host_command() -> Command {
    scrubbed("vestibule-host")
}

/// The probe with a scrubbed dispatch environment.
pub fn probe_command() -> Command {
    scrubbed("vestibule-probe")
}
