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

//! Value coercion: text to the field's declared type, written in place.

use crate::error::{IniError, IniResult};
use crate::schema::FieldSlot;
use std::num::ParseIntError;
use std::str::FromStr;

/// Convert `value` to the slot's type and store it.
///
/// Text is stored verbatim. Integers are parsed base-10 at the slot's
/// exact width, so `300` into an `i8` is a conversion error rather than
/// a truncation.
pub fn assign(slot: FieldSlot<'_>, key: &str, value: &str, line_num: usize) -> IniResult<()> {
    match slot {
        FieldSlot::Text(target) => {
            target.clear();
            target.push_str(value);
        }
        FieldSlot::I8(target) => *target = parse_int(key, value, line_num)?,
        FieldSlot::I16(target) => *target = parse_int(key, value, line_num)?,
        FieldSlot::I32(target) => *target = parse_int(key, value, line_num)?,
        FieldSlot::I64(target) => *target = parse_int(key, value, line_num)?,
        FieldSlot::I128(target) => *target = parse_int(key, value, line_num)?,
        FieldSlot::Isize(target) => *target = parse_int(key, value, line_num)?,
    }
    Ok(())
}

fn parse_int<N>(key: &str, value: &str, line_num: usize) -> IniResult<N>
where
    N: FromStr<Err = ParseIntError>,
{
    value.parse::<N>().map_err(|e| {
        IniError::type_conversion(
            format!(
                "cannot convert '{}' for key '{}' to {}: {}",
                value,
                key,
                std::any::type_name::<N>(),
                e
            ),
            line_num,
        )
    })
}
