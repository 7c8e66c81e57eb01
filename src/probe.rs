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

//! Dispatch decision reporting for the probe binary.
//!
//! A dry run of the selector: capture the same inputs the dispatcher would
//! see and report the mode it would pick, with no bootstrap side effects.

use crate::arguments::ProcessArguments;
use crate::environment::{CI_COMMAND_LINE_TOKEN, EnvironmentFlags};
use crate::mode::{ExecutionMode, embedded_runtime_compiled_in, select_mode};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
pub struct DispatchReport {
    version: String,
    timestamp: DateTime<Utc>,
    platform: &'static str,
    embedded_runtime_compiled_in: bool,
    flags: EnvironmentFlags,
    argv: Vec<String>,
    ci_token_present: bool,
    selected_mode: ExecutionMode,
}

impl DispatchReport {
    /// Snapshot the live environment and the given arguments, and record
    /// the mode the dispatcher would select.
    pub fn capture(arguments: &ProcessArguments) -> Self {
        let flags = EnvironmentFlags::capture();
        Self::for_inputs(flags, arguments)
    }

    /// Build a report from a synthetic snapshot (what-if reporting).
    pub fn for_inputs(flags: EnvironmentFlags, arguments: &ProcessArguments) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            platform: std::env::consts::OS,
            embedded_runtime_compiled_in: embedded_runtime_compiled_in(),
            flags,
            argv: arguments.argv().to_vec(),
            ci_token_present: arguments.contains_ignore_ascii_case(CI_COMMAND_LINE_TOKEN),
            selected_mode: select_mode(&flags),
        }
    }

    pub fn selected_mode(&self) -> ExecutionMode {
        self.selected_mode
    }
}

pub fn format_human<W: Write>(
    writer: &mut W,
    report: &DispatchReport,
    verbose: bool,
) -> std::io::Result<()> {
    writeln!(writer, "\nVestibule Dispatch Report")?;
    writeln!(writer, "=========================")?;
    writeln!(writer)?;

    writeln!(writer, "Environment flags")?;
    writeln!(writer, "-----------------")?;
    for (name, set) in report.flags.entries() {
        let marker = if set { "✓".green() } else { "○".bright_black() };
        let state = if set { "set" } else { "unset" };
        writeln!(writer, "{marker} {name} ({state})")?;
    }
    writeln!(writer)?;

    writeln!(writer, "Decision")?;
    writeln!(writer, "--------")?;
    writeln!(
        writer,
        "Mode: {}",
        report.selected_mode.to_string().bold()
    )?;
    writeln!(
        writer,
        "Embedded runtime capability: {}",
        if report.embedded_runtime_compiled_in {
            "compiled in"
        } else {
            "compiled out"
        }
    )?;
    if report.ci_token_present {
        writeln!(
            writer,
            "{} CI token present on the command line; bootstrap would \
             propagate it to the environment",
            "⚠".yellow()
        )?;
    }

    if verbose {
        writeln!(writer)?;
        writeln!(writer, "Inputs")?;
        writeln!(writer, "------")?;
        writeln!(writer, "Platform: {}", report.platform)?;
        writeln!(writer, "Arguments ({}):", report.argv.len())?;
        for (index, arg) in report.argv.iter().enumerate() {
            writeln!(writer, "  [{index}] {arg}")?;
        }
    }

    Ok(())
}

pub fn format_json<W: Write>(writer: &mut W, report: &DispatchReport) -> crate::error::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
