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

//! # inibind - typed INI configuration
//!
//! Load a section-based `key = value` file straight into a typed record.
//! Sub-records and fields are matched to the file through `#[ini(name)]`
//! annotations, so the Rust names don't have to follow the file's.
//!
//! ## Quick Start
//!
//! ```rust
//! use inibind::{IniRecord, IniSection};
//!
//! #[derive(Debug, Default, IniSection)]
//! struct Database {
//!     #[ini(name = "host")]
//!     host: String,
//!     #[ini(name = "port")]
//!     port: i32,
//! }
//!
//! #[derive(Debug, Default, IniSection)]
//! struct Cache {
//!     #[ini(name = "host")]
//!     host: String,
//!     #[ini(name = "port")]
//!     port: i32,
//! }
//!
//! #[derive(Debug, Default, IniRecord)]
//! struct AppConfig {
//!     #[ini(name = "db")]
//!     database: Database,
//!     #[ini(name = "cache")]
//!     cache: Cache,
//! }
//!
//! let text = "
//! ## primary store
//! [db]
//! host = localhost
//! port = 5432
//!
//! [cache]
//! host = 10.0.0.7
//! port = 6379
//! ";
//!
//! let mut config = AppConfig::default();
//! inibind::bind_str(text, &mut config).expect("valid config");
//! assert_eq!(config.database.port, 5432);
//! assert_eq!(config.cache.host, "10.0.0.7");
//! ```
//!
//! Files are loaded with [`load`]; a [`Loader`] keeps the validated schema
//! around when the same type is loaded repeatedly.
//!
//! ## Format
//!
//! - `# comment` and `; comment` lines
//! - `[section]` headers
//! - `key = value` with exactly one `=`; no quoting, escaping,
//!   inline comments or continuation lines
//!
//! ## Errors
//!
//! Loading stops at the first problem and returns an [`IniError`] with
//! its [`IniErrorKind`] and 1-based line number. A record that failed to
//! load may be partially written and should be discarded.

pub use inibind_core::{
    bind_bytes, bind_str, load, load_with_options, FieldDescriptor, FieldKind, FieldSchema,
    FieldSlot, IniError, IniErrorKind, IniRecord, IniResult, IniSection, IntWidth, Limits, Line,
    Loader, ParseOptions, ParseOptionsBuilder, Scanner, Schema, SectionDescriptor, SectionSchema,
};

#[cfg(feature = "derive")]
pub use inibind_derive::{IniRecord, IniSection};

mod error_ext;
pub use error_ext::IniResultExt;

/// Line-level building blocks.
pub mod lex {
    pub use inibind_core::preprocess::preprocess;
    pub use inibind_core::scanner::classify;
    pub use inibind_core::validate::split_key_value;
}
