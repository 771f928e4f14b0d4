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

//! Core scanner, schema reflector and binder for INI configuration files.
//!
//! This crate reads a section-based `key = value` file and writes each
//! value into a typed field of a statically declared record:
//!
//! ```text
//! ; etc/app.ini
//! [db]
//! host = localhost
//! port = 5432
//! ```
//!
//! # Pipeline
//!
//! - [`preprocess`](preprocess::preprocess): size limit, UTF-8, BOM
//! - [`Scanner`]: classifies each trimmed line as blank, comment,
//!   section header or key-value candidate
//! - [`split_key_value`](validate::split_key_value): rejects malformed
//!   key-value lines
//! - [`Schema`]: maps section and key annotations to record fields, built
//!   once per destination type
//! - [`assign`](coerce::assign): converts the text to the field's type
//!
//! Every step fails fast; the first error is returned with its 1-based
//! line number.

mod binder;
pub mod coerce;
mod error;
mod limits;
pub mod preprocess;
pub mod scanner;
mod schema;
pub mod validate;

pub use binder::{
    bind_bytes, bind_str, load, load_with_options, Loader, ParseOptions, ParseOptionsBuilder,
};
pub use error::{IniError, IniErrorKind, IniResult};
pub use limits::Limits;
pub use scanner::{Line, Scanner};
pub use schema::{
    FieldDescriptor, FieldKind, FieldSchema, FieldSlot, IniRecord, IniSection, IntWidth,
    Schema, SectionDescriptor, SectionSchema,
};
