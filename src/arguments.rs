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

//! Normalized process arguments.

use serde::Serialize;

/// The process argument vector in normalized string form.
///
/// Acquired once at startup by the platform adapter and owned by the
/// dispatcher until handed to an entry point. On platforms whose native
/// argument form is not string-based, the vector comes from a transcoding
/// step with U+FFFD substitution for unrepresentable units, and the raw
/// command line preserves the untokenized original for the crash service
/// hand-off. Elsewhere the raw form is the space-joined vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessArguments {
    argv: Vec<String>,
    raw: String,
}

impl ProcessArguments {
    /// Build from an argv already in string form.
    pub fn from_argv(argv: Vec<String>) -> Self {
        let raw = argv.join(" ");
        Self { argv, raw }
    }

    /// Build from an argv plus the raw command line it was parsed out of.
    pub fn with_raw_command_line(argv: Vec<String>, raw: String) -> Self {
        Self { argv, raw }
    }

    pub fn len(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The command line as delivered by the platform, untokenized.
    pub fn raw_command_line(&self) -> &str {
        &self.raw
    }

    /// True when any argument equals `token`, ignoring ASCII case.
    pub fn contains_ignore_ascii_case(&self, token: &str) -> bool {
        self.argv.iter().any(|arg| arg.eq_ignore_ascii_case(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> ProcessArguments {
        ProcessArguments::from_argv(argv.iter().map(|a| a.to_string()).collect())
    }

    #[test]
    fn test_from_argv_joins_raw_form() {
        let arguments = args(&["host", "--flag", "value"]);
        assert_eq!(arguments.len(), 3);
        assert_eq!(arguments.raw_command_line(), "host --flag value");
    }

    #[test]
    fn test_with_raw_command_line_keeps_original() {
        let arguments = ProcessArguments::with_raw_command_line(
            vec!["host".to_string(), "a b".to_string()],
            "\"host\" \"a b\"".to_string(),
        );
        assert_eq!(arguments.argv(), ["host", "a b"]);
        assert_eq!(arguments.raw_command_line(), "\"host\" \"a b\"");
    }

    #[test]
    fn test_token_scan_ignores_ascii_case() {
        for spelling in ["--ci", "--CI", "--Ci", "--cI"] {
            let arguments = args(&["host", spelling]);
            assert!(
                arguments.contains_ignore_ascii_case("--ci"),
                "spelling {spelling} should match"
            );
        }
    }

    #[test]
    fn test_token_scan_requires_whole_argument() {
        let arguments = args(&["host", "--circus", "ci"]);
        assert!(!arguments.contains_ignore_ascii_case("--ci"));
    }

    #[test]
    fn test_empty_argv() {
        let arguments = args(&[]);
        assert!(arguments.is_empty());
        assert_eq!(arguments.raw_command_line(), "");
    }
}
