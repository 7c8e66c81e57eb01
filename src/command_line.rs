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

//! Process-wide command-line registration.
//!
//! The framework and embedded components query process-wide argument state
//! rather than receiving argv as a parameter, so the dispatcher registers
//! the normalized arguments here before either of those hand-offs.

use crate::arguments::ProcessArguments;
use crate::error::{Result, VestibuleError};
use std::sync::Mutex;

static REGISTERED: Mutex<Option<ProcessArguments>> = Mutex::new(None);

/// Register the process arguments, exactly once per process.
///
/// A second registration is a lifecycle bug in the host, reported as
/// [`VestibuleError::CommandLineRegistered`].
pub fn register(arguments: ProcessArguments) -> Result<()> {
    let mut slot = REGISTERED
        .lock()
        .map_err(|_| VestibuleError::LifecycleOrdering("command line registry poisoned".into()))?;
    if slot.is_some() {
        return Err(VestibuleError::CommandLineRegistered);
    }
    log::debug!("Registered process command line ({} args)", arguments.len());
    *slot = Some(arguments);
    Ok(())
}

/// Whether [`register`] has run in this process.
pub fn is_registered() -> bool {
    REGISTERED.lock().is_ok_and(|slot| slot.is_some())
}

/// Copy of the registered arguments, if any.
pub fn snapshot() -> Option<ProcessArguments> {
    REGISTERED.lock().ok().and_then(|slot| slot.clone())
}

/// Clear the registry so each test can exercise first registration.
#[cfg(test)]
pub fn reset_for_tests() {
    if let Ok(mut slot) = REGISTERED.lock() {
        *slot = None;
    }
}
