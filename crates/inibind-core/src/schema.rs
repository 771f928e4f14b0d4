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

//! Destination record shape and the schema reflector.
//!
//! A destination is an outer record ([`IniRecord`]) made of annotated
//! sub-records ([`IniSection`]), each holding annotated scalar fields.
//! The shape is static: both traits expose `const` tables describing
//! their members, and hand out typed mutable references ([`FieldSlot`])
//! by position.
//!
//! [`Schema`] turns those tables into lookup maps once, validating the
//! annotations on the way, so that binding a file only does hash lookups.
//!
//! The traits are normally derived:
//!
//! ```text
//! #[derive(Default, IniSection)]
//! struct Database {
//!     #[ini(name = "host")]
//!     host: String,
//!     #[ini(name = "port")]
//!     port: i32,
//! }
//!
//! #[derive(Default, IniRecord)]
//! struct AppConfig {
//!     #[ini(name = "db")]
//!     database: Database,
//! }
//! ```

use crate::error::{IniError, IniResult};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Bit width of a signed integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

impl IntWidth {
    /// The Rust type name for this width.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldKind {
    /// `String`, assigned verbatim.
    Text,
    /// Signed integer of the given width, parsed base-10.
    Integer(IntWidth),
    /// Any other type. Rejected when the schema is built.
    Unsupported {
        /// The type as written in the record definition.
        type_name: &'static str,
    },
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "String"),
            Self::Integer(width) => write!(f, "{}", width.type_name()),
            Self::Unsupported { type_name } => write!(f, "{}", type_name),
        }
    }
}

/// Static description of one annotated scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSchema {
    /// Internal (Rust) field name.
    pub name: &'static str,
    /// External key name, matched against the input.
    pub key: &'static str,
    /// Declared type.
    pub kind: FieldKind,
}

/// Static description of one annotated sub-record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SectionSchema {
    /// Internal (Rust) field name of the sub-record.
    pub name: &'static str,
    /// External section name, matched against `[...]` headers.
    pub section: &'static str,
    /// The sub-record's annotated fields.
    pub fields: &'static [FieldSchema],
}

/// Typed mutable reference to a destination field.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Text(&'a mut String),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
}

impl FieldSlot<'_> {
    /// The field kind this slot writes.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::I8(_) => FieldKind::Integer(IntWidth::I8),
            Self::I16(_) => FieldKind::Integer(IntWidth::I16),
            Self::I32(_) => FieldKind::Integer(IntWidth::I32),
            Self::I64(_) => FieldKind::Integer(IntWidth::I64),
            Self::I128(_) => FieldKind::Integer(IntWidth::I128),
            Self::Isize(_) => FieldKind::Integer(IntWidth::Isize),
        }
    }
}

macro_rules! impl_slot_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for FieldSlot<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    FieldSlot::$variant(value)
                }
            }
        )*
    };
}

impl_slot_from! {
    String => Text,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
}

/// A sub-record: a group of annotated scalar fields.
pub trait IniSection {
    /// Annotated fields, in declaration order.
    const FIELDS: &'static [FieldSchema];

    /// Mutable access to the field at `index` in [`Self::FIELDS`].
    ///
    /// Returns `None` for out-of-range indices and unsupported fields.
    fn field_mut(&mut self, index: usize) -> Option<FieldSlot<'_>>;
}

/// The outer destination record: a group of annotated sub-records.
pub trait IniRecord {
    /// Annotated sub-records, in declaration order.
    const SECTIONS: &'static [SectionSchema];

    /// Mutable access to field `field` of sub-record `section`, both
    /// indices referring to the static tables.
    fn field_mut(&mut self, section: usize, field: usize) -> Option<FieldSlot<'_>>;
}

/// A resolved field: where it lives and what it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position in the sub-record's field table.
    pub index: usize,
    /// Internal field name.
    pub name: &'static str,
    /// External key name.
    pub key: &'static str,
    /// Declared type, always supported.
    pub kind: FieldKind,
}

/// A resolved sub-record with its key lookup table.
#[derive(Debug, Clone)]
pub struct SectionDescriptor {
    index: usize,
    schema: &'static SectionSchema,
    fields: HashMap<&'static str, FieldDescriptor>,
}

impl SectionDescriptor {
    /// Position in the record's section table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// External section name.
    pub fn section(&self) -> &'static str {
        self.schema.section
    }

    /// Internal sub-record name.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Number of bindable fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the sub-record has no bindable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lookup tables for a destination type, built once and reused.
///
/// Building validates the static shape:
/// - annotations must be non-empty
/// - section annotations must be unique within the record
/// - key annotations must be unique within their sub-record
/// - every annotated field must be text or a signed integer
pub struct Schema<T> {
    sections: HashMap<&'static str, SectionDescriptor>,
    _record: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("record", &std::any::type_name::<T>())
            .field("sections", &self.sections)
            .finish()
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            sections: self.sections.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: IniRecord> Schema<T> {
    /// Build and validate the lookup tables for `T`.
    pub fn build() -> IniResult<Self> {
        let record = std::any::type_name::<T>();
        let mut sections: HashMap<&'static str, SectionDescriptor> =
            HashMap::with_capacity(T::SECTIONS.len());

        for (index, schema) in T::SECTIONS.iter().enumerate() {
            if schema.section.is_empty() {
                return Err(IniError::invalid_destination(format!(
                    "{}: sub-record '{}' has an empty section annotation",
                    record, schema.name
                )));
            }

            if let Some(prev) = sections.get(schema.section) {
                return Err(IniError::invalid_destination(format!(
                    "{}: section '{}' is declared by both '{}' and '{}'",
                    record,
                    schema.section,
                    prev.name(),
                    schema.name
                )));
            }

            let fields = build_fields(record, schema)?;
            sections.insert(
                schema.section,
                SectionDescriptor {
                    index,
                    schema,
                    fields,
                },
            );
        }

        debug!(record, sections = sections.len(), "built ini schema");

        Ok(Self {
            sections,
            _record: PhantomData,
        })
    }

    /// Resolve a section header name to its sub-record.
    pub fn resolve_section(&self, name: &str, line_num: usize) -> IniResult<&SectionDescriptor> {
        self.sections
            .get(name)
            .ok_or_else(|| IniError::unknown_section(name, line_num))
    }

    /// Resolve a key within a sub-record.
    pub fn resolve_field(
        &self,
        section: &SectionDescriptor,
        key: &str,
        line_num: usize,
    ) -> IniResult<FieldDescriptor> {
        section
            .fields
            .get(key)
            .copied()
            .ok_or_else(|| IniError::unknown_key(section.section(), key, line_num))
    }

    /// Number of sections the record declares.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the record declares no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn build_fields(
    record: &str,
    section: &'static SectionSchema,
) -> IniResult<HashMap<&'static str, FieldDescriptor>> {
    let mut fields: HashMap<&'static str, FieldDescriptor> =
        HashMap::with_capacity(section.fields.len());

    for (index, field) in section.fields.iter().enumerate() {
        if field.key.is_empty() {
            return Err(IniError::invalid_destination(format!(
                "{}: field '{}.{}' has an empty key annotation",
                record, section.name, field.name
            )));
        }

        if let FieldKind::Unsupported { type_name } = field.kind {
            return Err(IniError::unsupported_field_type(format!(
                "{}: field '{}.{}' has type '{}', expected String or a signed integer",
                record, section.name, field.name, type_name
            )));
        }

        if let Some(prev) = fields.get(field.key) {
            return Err(IniError::invalid_destination(format!(
                "{}: key '{}' in section '{}' is declared by both '{}' and '{}'",
                record, field.key, section.section, prev.name, field.name
            )));
        }

        fields.insert(
            field.key,
            FieldDescriptor {
                index,
                name: field.name,
                key: field.key,
                kind: field.kind,
            },
        );
    }

    Ok(fields)
}
