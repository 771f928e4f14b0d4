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

//! Input preprocessing ahead of scanning.

use crate::error::{IniError, IniResult};
use crate::limits::Limits;

/// Validate raw input bytes and return the text to scan.
///
/// This handles:
/// - Size limit
/// - UTF-8 validation
/// - BOM skipping
///
/// Line endings are left alone: the scanner trims every line, which
/// removes the `\r` of CRLF files.
pub fn preprocess<'a>(input: &'a [u8], limits: &Limits) -> IniResult<&'a str> {
    if input.len() > limits.max_file_size {
        return Err(IniError::security(
            format!("input too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }

    let text = std::str::from_utf8(input).map_err(|e| {
        let valid = &input[..e.valid_up_to()];
        let line = memchr::memchr_iter(b'\n', valid).count() + 1;
        IniError::encoding(format!("invalid UTF-8 encoding: {}", e), line)
    })?;

    Ok(text.strip_prefix('\u{FEFF}').unwrap_or(text))
}
