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

//! Lifecycle and teardown ordering.
//!
//! Two facilities live here. [`ShutdownScope`] is the exit-handling registry
//! for the modes that never enter the full framework, whose own lifecycle
//! manager would otherwise provide it. Process-exit hooks are a declarative
//! list evaluated in registration order at process exit through a single C
//! `atexit` trampoline.
//!
//! The trampoline carries the one ordering contract this crate depends on:
//! `atexit` handlers run while the allocator subsystem is still live, before
//! the loader delivers its own thread-exit callbacks to dynamically loaded
//! modules. Running a module's thread cleanup from here makes the later
//! OS-driven invocation a guaranteed no-op instead of a use-after-teardown.

use crate::error::{Result, VestibuleError};
use std::os::raw::c_int;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

type Hook = Box<dyn FnOnce() + Send>;

struct NamedHook {
    name: String,
    hook: Hook,
}

/// `Some` while a [`ShutdownScope`] is active; holds its pending hooks.
static SCOPE_HOOKS: Mutex<Option<Vec<NamedHook>>> = Mutex::new(None);

/// Hooks evaluated by the `atexit` trampoline, in registration order.
static EXIT_HOOKS: Mutex<Vec<NamedHook>> = Mutex::new(Vec::new());

static TRAMPOLINE_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Scoped process exit handling for framework-independent modes.
///
/// Construction activates the process-wide hook registry; dropping the scope
/// runs every registered hook in registration order, on every exit path
/// including unwinding. One scope may be active at a time.
pub struct ShutdownScope {
    _private: (),
}

impl ShutdownScope {
    pub fn new() -> Result<Self> {
        let mut slot = lock_scope()?;
        if slot.is_some() {
            return Err(VestibuleError::LifecycleOrdering(
                "a shutdown scope is already active".into(),
            ));
        }
        *slot = Some(Vec::new());
        log::debug!("Shutdown scope activated");
        Ok(Self { _private: () })
    }
}

impl Drop for ShutdownScope {
    fn drop(&mut self) {
        let hooks = match lock_scope() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        for entry in hooks.into_iter().flatten() {
            log::debug!("Running shutdown hook '{}'", entry.name);
            (entry.hook)();
        }
    }
}

/// Register a hook with the active [`ShutdownScope`].
///
/// Hooks run in registration order when the scope is dropped. Registering
/// without an active scope is an ordering violation.
pub fn register_shutdown_hook<F>(name: &str, hook: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    let mut slot = lock_scope()?;
    match slot.as_mut() {
        Some(hooks) => {
            hooks.push(NamedHook {
                name: name.to_string(),
                hook: Box::new(hook),
            });
            Ok(())
        }
        None => Err(VestibuleError::LifecycleOrdering(format!(
            "no active shutdown scope for hook '{name}'"
        ))),
    }
}

/// Register a hook to run at process exit, before OS-driven module cleanup.
///
/// All hooks share one `atexit` trampoline, installed on first use, and run
/// in registration order regardless of the C runtime's reverse-order rule
/// for separate handlers.
pub fn register_process_exit_hook<F>(name: &str, hook: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    install_trampoline()?;
    let mut hooks = EXIT_HOOKS
        .lock()
        .map_err(|_| VestibuleError::LifecycleOrdering("exit hook registry poisoned".into()))?;
    hooks.push(NamedHook {
        name: name.to_string(),
        hook: Box::new(hook),
    });
    log::debug!("Registered process exit hook '{name}'");
    Ok(())
}

fn lock_scope() -> Result<std::sync::MutexGuard<'static, Option<Vec<NamedHook>>>> {
    SCOPE_HOOKS
        .lock()
        .map_err(|_| VestibuleError::LifecycleOrdering("shutdown scope registry poisoned".into()))
}

fn install_trampoline() -> Result<()> {
    if TRAMPOLINE_INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let status = unsafe { atexit(run_process_exit_hooks) };
    if status != 0 {
        TRAMPOLINE_INSTALLED.store(false, Ordering::SeqCst);
        return Err(VestibuleError::LifecycleOrdering(
            "atexit registration failed".into(),
        ));
    }
    Ok(())
}

unsafe extern "C" {
    fn atexit(callback: extern "C" fn()) -> c_int;
}

extern "C" fn run_process_exit_hooks() {
    let drained = match EXIT_HOOKS.lock() {
        Ok(mut hooks) => std::mem::take(&mut *hooks),
        Err(_) => return,
    };
    for entry in drained {
        (entry.hook)();
    }
}
