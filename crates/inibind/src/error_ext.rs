// Dweve INIBIND - Typed INI Configuration Binding
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error context helpers.
//!
//! Extension methods for `Result<T, IniError>` (and I/O results) that
//! annotate errors as they propagate:
//!
//! ```rust
//! use inibind::{IniRecord, IniResultExt, IniSection};
//!
//! #[derive(Debug, Default, IniSection)]
//! struct Server {
//!     #[ini(name = "port")]
//!     port: i32,
//! }
//!
//! #[derive(Debug, Default, IniRecord)]
//! struct Config {
//!     #[ini(name = "server")]
//!     server: Server,
//! }
//!
//! fn load_service(name: &str, text: &str) -> Result<Config, inibind::IniError> {
//!     let mut config = Config::default();
//!     inibind::bind_str(text, &mut config)
//!         .with_context(|| format!("while configuring service {}", name))?;
//!     Ok(config)
//! }
//!
//! let err = load_service("api", "[server]\nport = eighty\n").unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("while configuring service api"));
//! ```

use crate::IniError;
use std::fmt;

/// Extension trait for adding context to fallible configuration steps.
///
/// Context added later is placed first, so a chain reads from the
/// outermost caller inwards. Empty context strings are ignored.
pub trait IniResultExt<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T, IniError>
    where
        C: fmt::Display;

    /// Add context to an error, computing it only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, IniError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> IniResultExt<T> for Result<T, IniError> {
    fn context<C>(self, context: C) -> Result<T, IniError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, IniError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }
}

// Callers that read configuration themselves (e.g. from a secrets mount)
// get the same error type as the loader.
impl<T> IniResultExt<T> for Result<T, std::io::Error> {
    fn context<C>(self, context: C) -> Result<T, IniError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(IniError::file_read(e.to_string()), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, IniError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(IniError::file_read(e.to_string()), f().to_string()))
    }
}

fn add_context_to_error(error: IniError, new_context: String) -> IniError {
    if new_context.is_empty() {
        return error;
    }
    error.with_context(new_context)
}
