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

use crate::error::VestibuleError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a VestibuleError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a VestibuleError) -> Self {
        let (suggestion, details) = match error {
            VestibuleError::ArgumentAcquisition(msg) => {
                let suggestion = Some(
                    "The native command line could not be parsed. This is fatal; the process \
                     cannot start. Check how the process was launched and that the command line \
                     is well formed."
                        .to_string(),
                );
                let details = Some(format!("Argument acquisition failed: {msg}"));
                (suggestion, details)
            }
            VestibuleError::ConsoleAttach(msg) => {
                let suggestion = Some(
                    "Console attachment is best-effort. Set VESTIBULE_NO_ATTACH_CONSOLE=1 to \
                     suppress the attempt entirely."
                        .to_string(),
                );
                let details = Some(format!("Console routing failed: {msg}"));
                (suggestion, details)
            }
            VestibuleError::CommandLineRegistered => {
                let suggestion = Some(
                    "The process command line may be registered only once. Run a single \
                     dispatcher per process."
                        .to_string(),
                );
                (suggestion, None)
            }
            VestibuleError::LifecycleOrdering(msg) => {
                let suggestion = Some(
                    "Shutdown hooks require an active scope, and only one scope may be active \
                     at a time. Let the dispatcher establish the scope."
                        .to_string(),
                );
                let details = Some(format!("Lifecycle misuse: {msg}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
