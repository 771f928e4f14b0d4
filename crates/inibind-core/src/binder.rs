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

//! Binder: drives the scanner and writes values into the destination.
//!
//! Binding is a single pass over the input. The only state carried from
//! one line to the next is the active section, held in a [`BindState`]
//! local to the call, so concurrent loads into distinct destinations are
//! independent.
//!
//! The first error aborts the pass. Fields assigned before the error keep
//! their new values; a destination that failed to load must be discarded.

use crate::coerce;
use crate::error::{IniError, IniResult};
use crate::limits::Limits;
use crate::preprocess::preprocess;
use crate::scanner::{Line, Scanner};
use crate::schema::{IniRecord, Schema, SectionDescriptor};
use crate::validate::split_key_value;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Options controlling how input is read and bound.
///
/// ```text
/// use inibind_core::ParseOptions;
///
/// // Defaults: 16MB files, 64KB lines
/// let opts = ParseOptions::default();
///
/// // Tighter limits for untrusted paths
/// let opts = ParseOptions::builder()
///     .max_file_size(64 * 1024)
///     .max_line_length(1024)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Size limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum file size in bytes (default: 16MB).
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum line length in bytes (default: 64KB).
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

/// Per-call binding state: which sub-record key-value lines target.
#[derive(Debug, Default)]
struct BindState<'s> {
    active: Option<&'s SectionDescriptor>,
    assigned: usize,
}

impl<'s> BindState<'s> {
    fn step<T: IniRecord>(
        &mut self,
        schema: &'s Schema<T>,
        dest: &mut T,
        line_num: usize,
        line: Line<'_>,
    ) -> IniResult<()> {
        match line {
            Line::Blank | Line::Comment => Ok(()),
            Line::Section(name) => {
                let section = schema.resolve_section(name, line_num)?;
                trace!(line = line_num, section = name, "entering section");
                self.active = Some(section);
                Ok(())
            }
            Line::KeyValue(content) => {
                let (key, value) = split_key_value(content, line_num)?;
                let section = self
                    .active
                    .ok_or_else(|| IniError::no_active_section(line_num))?;
                let field = schema.resolve_field(section, key, line_num)?;

                let slot = dest
                    .field_mut(section.index(), field.index)
                    .filter(|slot| slot.kind() == field.kind)
                    .ok_or_else(|| {
                        IniError::invalid_destination(format!(
                            "record has no {} slot for field '{}.{}'",
                            field.kind,
                            section.name(),
                            field.name
                        ))
                    })?;

                coerce::assign(slot, key, value, line_num)?;
                trace!(line = line_num, section = section.section(), key, "assigned");
                self.assigned += 1;
                Ok(())
            }
        }
    }
}

/// A reusable loader for one destination type.
///
/// The schema is built and validated once in [`Loader::new`]; each load
/// then only scans and binds. A loader is immutable and can be shared
/// between threads, each binding its own destination.
#[derive(Debug, Clone)]
pub struct Loader<T> {
    schema: Schema<T>,
    options: ParseOptions,
}

impl<T: IniRecord> Loader<T> {
    /// Create a loader with default options.
    pub fn new() -> IniResult<Self> {
        Self::with_options(ParseOptions::default())
    }

    /// Create a loader with custom options.
    pub fn with_options(options: ParseOptions) -> IniResult<Self> {
        Ok(Self {
            schema: Schema::build()?,
            options,
        })
    }

    /// The validated schema.
    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }

    /// The options in effect.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read the file at `path` and bind it into `dest`.
    ///
    /// Errors raised after the file was read carry the path as context.
    pub fn load(&self, path: impl AsRef<Path>, dest: &mut T) -> IniResult<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading ini file");

        let input = read_file(path, &self.options.limits)?;
        self.bind_bytes(&input, dest)
            .map_err(|e| e.with_context(format!("in file {}", path.display())))
    }

    /// Bind raw bytes into `dest`.
    pub fn bind_bytes(&self, input: &[u8], dest: &mut T) -> IniResult<()> {
        let text = preprocess(input, &self.options.limits)?;
        self.bind_text(text, dest)
    }

    /// Bind text into `dest`.
    pub fn bind_str(&self, text: &str, dest: &mut T) -> IniResult<()> {
        self.bind_bytes(text.as_bytes(), dest)
    }

    fn bind_text(&self, text: &str, dest: &mut T) -> IniResult<()> {
        let mut state = BindState::default();
        let scanner = Scanner::with_max_line_length(text, self.options.limits.max_line_length);

        for item in scanner {
            let (line_num, line) = item?;
            state.step(&self.schema, dest, line_num, line)?;
        }

        debug!(assigned = state.assigned, "bound ini input");
        Ok(())
    }
}

fn read_file(path: &Path, limits: &Limits) -> IniResult<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|e| {
        IniError::file_read(format!("failed to read '{}': {}", path.display(), e))
    })?;

    if metadata.len() > limits.max_file_size as u64 {
        return Err(IniError::security(
            format!(
                "file '{}' too large: exceeds limit of {} bytes",
                path.display(),
                limits.max_file_size
            ),
            0,
        ));
    }

    fs::read(path)
        .map_err(|e| IniError::file_read(format!("failed to read '{}': {}", path.display(), e)))
}

/// Load the INI file at `path` into `dest` with default options.
///
/// The destination's schema is validated before the file is opened.
pub fn load<T: IniRecord>(path: impl AsRef<Path>, dest: &mut T) -> IniResult<()> {
    load_with_options(path, dest, ParseOptions::default())
}

/// Load the INI file at `path` into `dest` with custom options.
pub fn load_with_options<T: IniRecord>(
    path: impl AsRef<Path>,
    dest: &mut T,
    options: ParseOptions,
) -> IniResult<()> {
    Loader::with_options(options)?.load(path, dest)
}

/// Bind INI text into `dest` with default options.
pub fn bind_str<T: IniRecord>(text: &str, dest: &mut T) -> IniResult<()> {
    Loader::new()?.bind_str(text, dest)
}

/// Bind raw INI bytes into `dest` with custom options.
pub fn bind_bytes<T: IniRecord>(input: &[u8], dest: &mut T, options: ParseOptions) -> IniResult<()> {
    Loader::with_options(options)?.bind_bytes(input, dest)
}
