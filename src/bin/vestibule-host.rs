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

//! Minimal reference host.
//!
//! Wires the real platform into the dispatcher with entry points that print
//! which mode was entered plus the observable bootstrap state, then exit
//! with a configurable code so the integration suite can assert passthrough.
//! The host itself never interprets its argument vector; that is the
//! dispatcher's contract.

use vestibule::arguments::ProcessArguments;
use vestibule::command_line;
use vestibule::dispatcher::{Dispatcher, EntryPoints};
use vestibule::environment::{ENV_CI, is_env_set};
use vestibule::logging;
use vestibule::platform::{NativePlatform, SandboxDescriptor};
use vestibule::text;

/// Exit code the fake entry points return, for passthrough assertions.
const ENV_HOST_EXIT_CODE: &str = "VESTIBULE_HOST_EXIT_CODE";

struct PrintingEntryPoints {
    exit_code: i32,
}

impl PrintingEntryPoints {
    fn from_env() -> Self {
        let exit_code = std::env::var(ENV_HOST_EXIT_CODE)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        Self { exit_code }
    }

    fn report_shared_state(&self) {
        println!(
            "text-subsystem: {}",
            if text::is_initialized() {
                "initialized"
            } else {
                "untouched"
            }
        );
        match command_line::snapshot() {
            Some(registered) => println!("command-line: registered ({} args)", registered.len()),
            None => println!("command-line: unregistered"),
        }
        println!(
            "ci-env: {}",
            if is_env_set(ENV_CI) { "set" } else { "unset" }
        );
    }
}

impl EntryPoints for PrintingEntryPoints {
    fn enter_application_main(
        &mut self,
        arguments: &ProcessArguments,
        sandbox: &SandboxDescriptor,
    ) -> i32 {
        println!("mode: application-main");
        println!("argv-len: {}", arguments.len());
        println!("sandbox: {} pid={}", sandbox.platform(), sandbox.host_pid());
        self.report_shared_state();
        self.exit_code
    }

    fn enter_embedded_runtime(&mut self, arguments: &ProcessArguments) -> i32 {
        println!("mode: embedded-runtime-only");
        println!("argv-len: {}", arguments.len());
        self.report_shared_state();
        self.exit_code
    }

    fn enter_crash_report_service(&mut self, raw_command_line: &str) -> i32 {
        println!("mode: crash-report-service");
        println!("raw-command-line: {raw_command_line}");
        self.report_shared_state();
        self.exit_code
    }
}

fn main() {
    // Default verbosity; VESTIBULE_LOG still overrides.
    logging::setup_logger(0);

    let code = Dispatcher::new(NativePlatform::new(), PrintingEntryPoints::from_env()).run();
    std::process::exit(code);
}
