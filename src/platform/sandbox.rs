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

//! Sandbox descriptor construction.

/// Opaque isolation token handed to the application framework.
///
/// Built once, only for the application-main mode, and consumed exactly once
/// by reference at the hand-off; it must outlive that single call. Sandbox
/// policy itself belongs to the framework, not to this crate.
#[derive(Debug)]
pub struct SandboxDescriptor {
    platform: &'static str,
    host_pid: u32,
}

impl SandboxDescriptor {
    /// Platform family the descriptor was built for.
    pub fn platform(&self) -> &'static str {
        self.platform
    }

    /// Process the descriptor belongs to.
    pub fn host_pid(&self) -> u32 {
        self.host_pid
    }
}

/// Build the descriptor for the current process.
pub fn build_sandbox_descriptor() -> SandboxDescriptor {
    let descriptor = SandboxDescriptor {
        platform: std::env::consts::OS,
        host_pid: std::process::id(),
    };
    log::debug!("Built sandbox descriptor for {}", descriptor.platform);
    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_names_the_running_platform() {
        let descriptor = build_sandbox_descriptor();
        assert_eq!(descriptor.platform(), std::env::consts::OS);
        assert_eq!(descriptor.host_pid(), std::process::id());
    }
}
