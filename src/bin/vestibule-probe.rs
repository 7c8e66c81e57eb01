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

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use vestibule::arguments::ProcessArguments;
use vestibule::error::{Result, format_error_chain, get_exit_code};
use vestibule::logging;
use vestibule::probe::{DispatchReport, format_human, format_json};

/// Report which execution mode this process would dispatch to.
///
/// A dry run: the selector sees the real environment and the arguments given
/// after `--`, but no bootstrap side effect is performed.
#[derive(Parser)]
#[command(name = "vestibule-probe")]
#[command(author, version, about = "Dispatch decision probe", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Argument vector to evaluate as the host would receive it
    #[arg(last = true, value_name = "ARGS")]
    host_args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    let result: Result<()> = (|| {
        let arguments = if cli.host_args.is_empty() {
            ProcessArguments::from_argv(std::env::args().collect())
        } else {
            ProcessArguments::from_argv(cli.host_args.clone())
        };
        let report = DispatchReport::capture(&arguments);

        match &cli.output {
            Some(path) => {
                let mut file = File::create(path)?;
                write_report(&mut file, &report, &cli)?;
                log::info!("Report written to {}", path.display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_report(&mut handle, &report, &cli)?;
            }
        }
        Ok(())
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}

fn write_report<W: Write>(writer: &mut W, report: &DispatchReport, cli: &Cli) -> Result<()> {
    if cli.json {
        format_json(writer, report)
    } else {
        format_human(writer, report, cli.verbose > 0)?;
        Ok(())
    }
}
