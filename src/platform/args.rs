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

//! Native argument acquisition.
//!
//! On Unix the argument vector is already string-shaped and acquisition
//! cannot fail. On Windows argv must be parsed out of the single UTF-16
//! command line; the parse result is a native buffer owned by an RAII guard
//! so that a failure partway through transcoding still releases it.

use crate::arguments::ProcessArguments;
use crate::error::Result;

/// Acquire the process arguments, exactly once at startup.
///
/// Unrepresentable units are transcoded to U+FFFD rather than rejected; the
/// only failure is the native parse itself reporting null, which the
/// dispatcher treats as fatal.
pub fn acquire_arguments() -> Result<ProcessArguments> {
    platform_acquire()
}

#[cfg(unix)]
fn platform_acquire() -> Result<ProcessArguments> {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    Ok(ProcessArguments::from_argv(argv))
}

#[cfg(windows)]
fn platform_acquire() -> Result<ProcessArguments> {
    use crate::error::VestibuleError;
    use winapi::shared::minwindef::HLOCAL;
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::processenv::GetCommandLineW;
    use winapi::um::shellapi::CommandLineToArgvW;
    use winapi::um::winbase::LocalFree;
    use winapi::um::winnt::LPWSTR;

    /// Owns the argv block returned by `CommandLineToArgvW`.
    ///
    /// `Drop` releases it on every exit path, so a panic mid-transcode
    /// cannot leak the native buffer.
    struct NativeArgvGuard {
        argv: *mut LPWSTR,
    }

    impl Drop for NativeArgvGuard {
        fn drop(&mut self) {
            unsafe {
                LocalFree(self.argv as HLOCAL);
            }
        }
    }

    fn wide_len(mut cursor: *const u16) -> usize {
        let mut len = 0;
        unsafe {
            while *cursor != 0 {
                len += 1;
                cursor = cursor.add(1);
            }
        }
        len
    }

    fn transcode(wide: *const u16) -> String {
        let units = unsafe { std::slice::from_raw_parts(wide, wide_len(wide)) };
        String::from_utf16_lossy(units)
    }

    let raw_command_line = unsafe { GetCommandLineW() };
    let raw = transcode(raw_command_line);

    let mut argc = 0;
    let argv = unsafe { CommandLineToArgvW(raw_command_line, &mut argc) };
    if argv.is_null() {
        let code = unsafe { GetLastError() };
        return Err(VestibuleError::ArgumentAcquisition(format!(
            "CommandLineToArgvW returned null (error {code})"
        )));
    }
    let guard = NativeArgvGuard { argv };

    let mut arguments = Vec::with_capacity(argc as usize);
    for index in 0..argc as isize {
        let entry = unsafe { *guard.argv.offset(index) };
        arguments.push(transcode(entry));
    }

    Ok(ProcessArguments::with_raw_command_line(arguments, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_reports_this_test_binary() {
        let arguments = acquire_arguments().unwrap();
        assert!(!arguments.is_empty(), "argv[0] must be present");
        assert!(!arguments.raw_command_line().is_empty());
    }

    #[test]
    fn test_acquired_argv_matches_std_view() {
        let arguments = acquire_arguments().unwrap();
        let std_argv: Vec<String> = std::env::args().collect();
        assert_eq!(arguments.len(), std_argv.len());
    }
}
