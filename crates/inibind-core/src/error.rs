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

//! Error types for INI loading and binding.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while loading a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IniErrorKind {
    /// The destination type violates the record shape constraints.
    InvalidDestination,
    /// An annotated field has a type the coercer cannot produce.
    UnsupportedFieldType,
    /// The input file could not be read.
    FileRead,
    /// The input is not valid UTF-8.
    Encoding,
    /// A size limit was exceeded.
    Security,
    /// A section header has no name between the brackets.
    EmptySectionName,
    /// A key-value line contains a stray `[` or `]`.
    ForbiddenBracket,
    /// A key-value line has no `=`.
    MissingSeparator,
    /// A key-value line has more than one `=`.
    AmbiguousSeparator,
    /// Key or value is empty after trimming.
    EmptyKeyOrValue,
    /// No sub-record is annotated with the section name.
    UnknownSection,
    /// A key-value line appears before any section header.
    NoActiveSection,
    /// No field of the active sub-record is annotated with the key.
    UnknownKey,
    /// The value could not be converted to the field's type.
    TypeConversion,
}

impl fmt::Display for IniErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDestination => write!(f, "InvalidDestination"),
            Self::UnsupportedFieldType => write!(f, "UnsupportedFieldType"),
            Self::FileRead => write!(f, "FileReadError"),
            Self::Encoding => write!(f, "EncodingError"),
            Self::Security => write!(f, "SecurityError"),
            Self::EmptySectionName => write!(f, "EmptySectionName"),
            Self::ForbiddenBracket => write!(f, "ForbiddenBracketInValue"),
            Self::MissingSeparator => write!(f, "MissingSeparator"),
            Self::AmbiguousSeparator => write!(f, "AmbiguousSeparator"),
            Self::EmptyKeyOrValue => write!(f, "EmptyKeyOrValue"),
            Self::UnknownSection => write!(f, "UnknownSection"),
            Self::NoActiveSection => write!(f, "NoActiveSection"),
            Self::UnknownKey => write!(f, "UnknownKey"),
            Self::TypeConversion => write!(f, "TypeConversion"),
        }
    }
}

/// An error that occurred while loading or binding an INI file.
///
/// `line` is 1-based. Errors that are not tied to a line of input
/// (destination, file and size errors) carry line 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}: {message}{}", location(.line), suffix(.context))]
pub struct IniError {
    /// The kind of error.
    pub kind: IniErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when not applicable).
    pub line: usize,
    /// Additional context (e.g., "in file etc/app.ini").
    pub context: Option<String>,
}

fn location(line: &usize) -> String {
    if *line == 0 {
        String::new()
    } else {
        format!(" at line {}", line)
    }
}

fn suffix(context: &Option<String>) -> String {
    match context {
        Some(ctx) => format!(" ({})", ctx),
        None => String::new(),
    }
}

impl IniError {
    /// Create a new error.
    pub fn new(kind: IniErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Add context information.
    ///
    /// Context added later is prepended, so the outermost caller reads first.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = Some(match self.context.take() {
            Some(inner) => format!("{}: {}", context, inner),
            None => context,
        });
        self
    }

    // Convenience constructors for each error kind
    pub fn invalid_destination(message: impl Into<String>) -> Self {
        Self::new(IniErrorKind::InvalidDestination, message, 0)
    }

    pub fn unsupported_field_type(message: impl Into<String>) -> Self {
        Self::new(IniErrorKind::UnsupportedFieldType, message, 0)
    }

    pub fn file_read(message: impl Into<String>) -> Self {
        Self::new(IniErrorKind::FileRead, message, 0)
    }

    pub fn encoding(message: impl Into<String>, line: usize) -> Self {
        Self::new(IniErrorKind::Encoding, message, line)
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(IniErrorKind::Security, message, line)
    }

    pub fn empty_section_name(line: usize) -> Self {
        Self::new(IniErrorKind::EmptySectionName, "empty section name", line)
    }

    pub fn forbidden_bracket(line: usize) -> Self {
        Self::new(
            IniErrorKind::ForbiddenBracket,
            "key-value line contains '[' or ']'",
            line,
        )
    }

    pub fn missing_separator(line: usize) -> Self {
        Self::new(IniErrorKind::MissingSeparator, "missing separator '='", line)
    }

    pub fn ambiguous_separator(count: usize, line: usize) -> Self {
        Self::new(
            IniErrorKind::AmbiguousSeparator,
            format!("ambiguous separator: found {} '=' characters, expected 1", count),
            line,
        )
    }

    pub fn empty_key_or_value(line: usize) -> Self {
        Self::new(IniErrorKind::EmptyKeyOrValue, "empty key or value", line)
    }

    pub fn unknown_section(name: &str, line: usize) -> Self {
        Self::new(
            IniErrorKind::UnknownSection,
            format!("unknown section '{}'", name),
            line,
        )
    }

    pub fn no_active_section(line: usize) -> Self {
        Self::new(
            IniErrorKind::NoActiveSection,
            "key-value line before any section header",
            line,
        )
    }

    pub fn unknown_key(section: &str, key: &str, line: usize) -> Self {
        Self::new(
            IniErrorKind::UnknownKey,
            format!("unknown key '{}' in section '{}'", key, section),
            line,
        )
    }

    pub fn type_conversion(message: impl Into<String>, line: usize) -> Self {
        Self::new(IniErrorKind::TypeConversion, message, line)
    }
}

/// Result type for inibind operations.
pub type IniResult<T> = Result<T, IniError>;
