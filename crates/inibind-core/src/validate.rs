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

//! Key-value line validation.

use crate::error::{IniError, IniResult};

/// Split a trimmed key-value candidate into `(key, value)`.
///
/// Checks, in order:
/// 1. no `[` or `]` anywhere in the line
/// 2. at least one `=`
/// 3. at most one `=` (there is no escaping)
/// 4. key and value non-empty after trimming
pub fn split_key_value(content: &str, line_num: usize) -> IniResult<(&str, &str)> {
    let bytes = content.as_bytes();

    if memchr::memchr2(b'[', b']', bytes).is_some() {
        return Err(IniError::forbidden_bracket(line_num));
    }

    let eq_pos = memchr::memchr(b'=', bytes).ok_or_else(|| IniError::missing_separator(line_num))?;

    let separators = memchr::memchr_iter(b'=', bytes).count();
    if separators != 1 {
        return Err(IniError::ambiguous_separator(separators, line_num));
    }

    let key = content[..eq_pos].trim();
    let value = content[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return Err(IniError::empty_key_or_value(line_num));
    }

    Ok((key, value))
}
