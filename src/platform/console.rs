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

//! Console attachment.
//!
//! GUI-subsystem processes on Windows start detached from any console, so
//! standard output silently vanishes unless the process attaches to the
//! parent's console and rebinds its standard handles. Unix processes inherit
//! usable standard streams and need nothing here.

use crate::error::Result;

/// Route standard I/O to an attached console.
///
/// Best-effort by contract: the caller logs a failure and continues, because
/// a missing parent console (double-clicked launch) is normal.
pub fn attach_console() -> Result<()> {
    platform_attach()
}

#[cfg(unix)]
fn platform_attach() -> Result<()> {
    log::trace!("Console attachment is a no-op on this platform");
    Ok(())
}

#[cfg(windows)]
fn platform_attach() -> Result<()> {
    use crate::error::VestibuleError;
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::fileapi::{CreateFileW, OPEN_EXISTING};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::SetStdHandle;
    use winapi::um::winbase::{STD_ERROR_HANDLE, STD_OUTPUT_HANDLE};
    use winapi::um::wincon::{ATTACH_PARENT_PROCESS, AttachConsole};
    use winapi::um::winnt::{
        FILE_SHARE_READ, FILE_SHARE_WRITE, GENERIC_READ, GENERIC_WRITE, HANDLE,
    };

    if unsafe { AttachConsole(ATTACH_PARENT_PROCESS) } == 0 {
        let code = unsafe { GetLastError() };
        return Err(VestibuleError::ConsoleAttach(format!(
            "AttachConsole(ATTACH_PARENT_PROCESS) failed (error {code})"
        )));
    }

    fn open_conout() -> HANDLE {
        let mut name: Vec<u16> = "CONOUT$".encode_utf16().collect();
        name.push(0);
        unsafe {
            CreateFileW(
                name.as_ptr(),
                GENERIC_READ | GENERIC_WRITE,
                FILE_SHARE_READ | FILE_SHARE_WRITE,
                std::ptr::null_mut(),
                OPEN_EXISTING,
                0,
                std::ptr::null_mut(),
            )
        }
    }

    let conout = open_conout();
    if conout == INVALID_HANDLE_VALUE {
        let code = unsafe { GetLastError() };
        return Err(VestibuleError::ConsoleAttach(format!(
            "opening CONOUT$ failed (error {code})"
        )));
    }

    unsafe {
        SetStdHandle(STD_OUTPUT_HANDLE, conout);
        SetStdHandle(STD_ERROR_HANDLE, conout);
    }

    log::debug!("Attached to parent console");
    Ok(())
}
