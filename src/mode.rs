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

//! Execution mode selection.

use crate::environment::EnvironmentFlags;
use serde::Serialize;
use std::fmt;

/// The single top-level behavior a process invocation commits to.
///
/// Exactly one mode is active per invocation. The decision is made once,
/// before any application logic runs, and is never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    /// Full application bootstrap through the content framework.
    ApplicationMain,
    /// Host the embedded runtime standalone, bypassing the framework.
    EmbeddedRuntimeOnly,
    /// Serve crash reports on behalf of a crashed sibling process.
    CrashReportService,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::ApplicationMain => write!(f, "application-main"),
            ExecutionMode::EmbeddedRuntimeOnly => write!(f, "embedded-runtime-only"),
            ExecutionMode::CrashReportService => write!(f, "crash-report-service"),
        }
    }
}

/// True when this build can host the embedded runtime standalone.
pub fn embedded_runtime_compiled_in() -> bool {
    cfg!(feature = "embedded-runtime")
}

/// Map an environment snapshot to the mode this process will assume.
///
/// Priority order, first match wins:
/// 1. the runtime-only flag, when the capability is compiled in;
/// 2. the crash-service flag;
/// 3. application main.
///
/// The runtime-only escape hatch is checked before anything else so the
/// process can act as a minimal runtime host without touching heavier
/// framework state. The crash service runs out-of-process from a crashed
/// instance and must not re-enter sandboxed or windowed setup, so it is
/// likewise decided before full bootstrap. Argument contents never
/// participate in the decision.
pub fn select_mode(flags: &EnvironmentFlags) -> ExecutionMode {
    if flags.runtime_only() && embedded_runtime_compiled_in() {
        return ExecutionMode::EmbeddedRuntimeOnly;
    }
    if flags.crash_service() {
        return ExecutionMode::CrashReportService;
    }
    ExecutionMode::ApplicationMain
}
