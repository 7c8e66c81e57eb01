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

//! Per-platform bootstrap capabilities.
//!
//! The dispatcher stays portable by driving everything platform-specific
//! through [`PlatformAdapter`]; [`NativePlatform`] is the one real
//! implementation, delegating to the sibling modules. Each capability is a
//! no-op on platforms where the underlying concern does not exist.

pub mod args;
pub mod console;
pub mod debug_report;
pub mod sandbox;

pub use sandbox::SandboxDescriptor;

use crate::arguments::ProcessArguments;
use crate::error::Result;

/// The capability set the dispatcher needs from the platform.
pub trait PlatformAdapter {
    /// Acquire the process argument vector in normalized string form.
    ///
    /// Called exactly once, before any other bootstrap step. Failure is the
    /// one fatal startup condition in this crate.
    fn acquire_arguments(&mut self) -> Result<ProcessArguments>;

    /// Route standard I/O to an attached console.
    ///
    /// Best-effort: the dispatcher logs a failure and continues.
    fn attach_console(&mut self) -> Result<()>;

    /// Redirect debug assertion and error reporting to standard error so
    /// automated runs never block on an interactive dialog.
    fn route_debug_reports_to_stderr(&mut self);

    /// Build the isolation token handed to the full application framework.
    fn build_sandbox_descriptor(&mut self) -> SandboxDescriptor;
}

/// [`PlatformAdapter`] backed by the real operating system.
#[derive(Debug, Default)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformAdapter for NativePlatform {
    fn acquire_arguments(&mut self) -> Result<ProcessArguments> {
        args::acquire_arguments()
    }

    fn attach_console(&mut self) -> Result<()> {
        console::attach_console()
    }

    fn route_debug_reports_to_stderr(&mut self) {
        debug_report::route_to_stderr();
    }

    fn build_sandbox_descriptor(&mut self) -> SandboxDescriptor {
        sandbox::build_sandbox_descriptor()
    }
}
