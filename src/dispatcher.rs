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

//! The multi-mode process entry dispatcher.
//!
//! Runs strictly before any application logic and before any concurrency:
//! snapshot the environment, acquire the arguments, pick exactly one
//! [`ExecutionMode`], perform the bootstrap that mode needs, and hand off to
//! exactly one entry point, returning its exit code verbatim. There is no
//! retry anywhere; every failure here is a before-main-loop condition where
//! retrying in-process would be meaningless.

use crate::arguments::ProcessArguments;
use crate::command_line;
use crate::environment::{CI_COMMAND_LINE_TOKEN, ENV_CI, EnvironmentFlags};
use crate::error::{FATAL_STARTUP_EXIT_CODE, Result, format_error_chain, get_exit_code};
use crate::lifecycle::{self, ShutdownScope};
use crate::mode::{ExecutionMode, select_mode};
use crate::platform::{PlatformAdapter, SandboxDescriptor};
use crate::text;
use std::env;

/// The external entry points the dispatcher can hand off to.
///
/// Their behavior after the hand-off is out of scope here; the dispatcher
/// only decides which one runs and with what raw arguments.
#[cfg_attr(test, mockall::automock)]
pub trait EntryPoints {
    /// Full application bootstrap through the content framework.
    fn enter_application_main(
        &mut self,
        arguments: &ProcessArguments,
        sandbox: &SandboxDescriptor,
    ) -> i32;

    /// Standalone embedded-runtime host.
    fn enter_embedded_runtime(&mut self, arguments: &ProcessArguments) -> i32;

    /// Crash report service for a crashed sibling process.
    fn enter_crash_report_service(&mut self, raw_command_line: &str) -> i32;
}

/// Portable dispatcher over a [`PlatformAdapter`] and a set of
/// [`EntryPoints`].
pub struct Dispatcher<P, E> {
    platform: P,
    entry_points: E,
    early_thread_cleanup: Option<Box<dyn FnOnce() + Send>>,
}

impl<P: PlatformAdapter, E: EntryPoints> Dispatcher<P, E> {
    pub fn new(platform: P, entry_points: E) -> Self {
        Self {
            platform,
            entry_points,
            early_thread_cleanup: None,
        }
    }

    /// Configure the host's thread-exit cleanup to run at process exit,
    /// while the allocator is still live.
    ///
    /// The hook is registered before any hand-off, which makes the later
    /// OS-driven invocation of the same cleanup a guaranteed no-op. See
    /// [`crate::lifecycle`] for the ordering contract.
    pub fn with_early_thread_cleanup<F>(mut self, cleanup: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.early_thread_cleanup = Some(Box::new(cleanup));
        self
    }

    /// Run the dispatch sequence and return the process exit code.
    ///
    /// Argument acquisition failure, and any other dispatcher-local failure
    /// before the hand-off, yields [`FATAL_STARTUP_EXIT_CODE`]; everything
    /// the entered mode returns passes through uninterpreted.
    pub fn run(mut self) -> i32 {
        let flags = EnvironmentFlags::capture();

        let arguments = match self.platform.acquire_arguments() {
            Ok(arguments) => arguments,
            Err(err) => {
                log::error!("{}", format_error_chain(&err));
                return FATAL_STARTUP_EXIT_CODE;
            }
        };

        let mode = select_mode(&flags);
        log::info!("Dispatching to mode: {mode}");

        match self.bootstrap_and_enter(&flags, arguments, mode) {
            Ok(code) => code,
            Err(err) => {
                log::error!("{}", format_error_chain(&err));
                get_exit_code(&err)
            }
        }
    }

    fn bootstrap_and_enter(
        &mut self,
        flags: &EnvironmentFlags,
        arguments: ProcessArguments,
        mode: ExecutionMode,
    ) -> Result<i32> {
        self.route_ci_instrumentation(flags, &arguments);
        self.attach_console_if_wanted(flags, mode);

        if let Some(cleanup) = self.early_thread_cleanup.take() {
            lifecycle::register_process_exit_hook("early-thread-cleanup", cleanup)?;
        }

        match mode {
            ExecutionMode::EmbeddedRuntimeOnly => {
                // The framework's lifecycle manager never runs on this
                // path; the scope stands in for it.
                let _scope = ShutdownScope::new()?;
                text::initialize();
                command_line::register(arguments.clone())?;
                Ok(self.entry_points.enter_embedded_runtime(&arguments))
            }
            ExecutionMode::CrashReportService => {
                let _scope = ShutdownScope::new()?;
                text::initialize();
                Ok(self
                    .entry_points
                    .enter_crash_report_service(arguments.raw_command_line()))
            }
            ExecutionMode::ApplicationMain => {
                command_line::register(arguments.clone())?;
                let sandbox = self.platform.build_sandbox_descriptor();
                Ok(self.entry_points.enter_application_main(&arguments, &sandbox))
            }
        }
    }

    /// Detect CI via the environment snapshot or the literal command-line
    /// token, propagate a token-only detection into the environment for
    /// child processes, and route debug reports accordingly.
    fn route_ci_instrumentation(&mut self, flags: &EnvironmentFlags, arguments: &ProcessArguments) {
        let token = arguments.contains_ignore_ascii_case(CI_COMMAND_LINE_TOKEN);
        if token && !flags.ci() {
            // The dispatcher runs before any thread exists, so this write
            // cannot race an environment reader.
            unsafe {
                env::set_var(ENV_CI, "1");
            }
            log::debug!("CI token seen on the command line; {ENV_CI} set for children");
        }
        if token || flags.ci() {
            self.platform.route_debug_reports_to_stderr();
        }
    }

    /// Attach a console unless suppressed by flag. Embedded-runtime mode
    /// always attaches; attachment failure is logged, never fatal.
    fn attach_console_if_wanted(&mut self, flags: &EnvironmentFlags, mode: ExecutionMode) {
        let wanted = mode == ExecutionMode::EmbeddedRuntimeOnly || !flags.no_attach_console();
        if !wanted {
            log::debug!("Console attachment suppressed by flag");
            return;
        }
        if let Err(err) = self.platform.attach_console() {
            log::warn!("{}", format_error_chain(&err));
        }
    }
}
