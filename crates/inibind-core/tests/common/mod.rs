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

//! Hand-written destination records shared by the integration tests.

#![allow(dead_code)]

use inibind_core::{FieldKind, FieldSchema, FieldSlot, IniRecord, IniSection, IntWidth, SectionSchema};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: i32,
    pub user: String,
    pub pass: String,
    pub name: String,
    pub charset: String,
}

impl IniSection for DbConfig {
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema { name: "host", key: "host", kind: FieldKind::Text },
        FieldSchema { name: "port", key: "port", kind: FieldKind::Integer(IntWidth::I32) },
        FieldSchema { name: "user", key: "user", kind: FieldKind::Text },
        FieldSchema { name: "pass", key: "pass", kind: FieldKind::Text },
        FieldSchema { name: "name", key: "name", kind: FieldKind::Text },
        FieldSchema { name: "charset", key: "charset", kind: FieldKind::Text },
    ];

    fn field_mut(&mut self, index: usize) -> Option<FieldSlot<'_>> {
        match index {
            0 => Some((&mut self.host).into()),
            1 => Some((&mut self.port).into()),
            2 => Some((&mut self.user).into()),
            3 => Some((&mut self.pass).into()),
            4 => Some((&mut self.name).into()),
            5 => Some((&mut self.charset).into()),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub host: String,
    pub port: i64,
    pub pass: String,
}

impl IniSection for CacheConfig {
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema { name: "host", key: "host", kind: FieldKind::Text },
        FieldSchema { name: "port", key: "port", kind: FieldKind::Integer(IntWidth::I64) },
        FieldSchema { name: "pass", key: "pass", kind: FieldKind::Text },
    ];

    fn field_mut(&mut self, index: usize) -> Option<FieldSlot<'_>> {
        match index {
            0 => Some((&mut self.host).into()),
            1 => Some((&mut self.port).into()),
            2 => Some((&mut self.pass).into()),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub cache: CacheConfig,
}

impl IniRecord for AppConfig {
    const SECTIONS: &'static [SectionSchema] = &[
        SectionSchema { name: "db", section: "db", fields: <DbConfig as IniSection>::FIELDS },
        SectionSchema { name: "cache", section: "cache", fields: <CacheConfig as IniSection>::FIELDS },
    ];

    fn field_mut(&mut self, section: usize, field: usize) -> Option<FieldSlot<'_>> {
        match section {
            0 => self.db.field_mut(field),
            1 => self.cache.field_mut(field),
            _ => None,
        }
    }
}

/// A complete, well-formed file for [`AppConfig`].
pub const APP_INI: &str = "\
# application settings
[db]
host = 127.0.0.1
port = 3306
user = root
pass = s3cret
name = app
charset = utf8mb4

; cache settings
[cache]
host = 127.0.0.1
port = 6379
pass = \"quoted stays\"
";
