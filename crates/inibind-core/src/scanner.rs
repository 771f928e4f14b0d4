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

//! Line scanner: splits text into classified logical lines.

use crate::error::{IniError, IniResult};
use std::str::Split;

/// A classified line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only.
    Blank,
    /// First non-whitespace character is `#` or `;`.
    Comment,
    /// `[name]`, holding the trimmed name.
    Section(&'a str),
    /// Anything else, trimmed. Not yet validated as `key=value`.
    KeyValue(&'a str),
}

/// Lazy iterator over `(line_number, Line)` pairs.
///
/// Line numbers are 1-based. An empty section name or an over-long line
/// yields an error item.
pub struct Scanner<'a> {
    lines: Split<'a, char>,
    line_num: usize,
    max_line_length: usize,
}

impl<'a> Scanner<'a> {
    /// Scan `text` with no line length limit.
    pub fn new(text: &'a str) -> Self {
        Self::with_max_line_length(text, usize::MAX)
    }

    /// Scan `text`, rejecting raw lines longer than `max_line_length` bytes.
    pub fn with_max_line_length(text: &'a str, max_line_length: usize) -> Self {
        Self {
            lines: text.split('\n'),
            line_num: 0,
            max_line_length,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = IniResult<(usize, Line<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        self.line_num += 1;

        // The CR of a CRLF line is not content
        let content = raw.strip_suffix('\r').unwrap_or(raw);
        if content.len() > self.max_line_length {
            return Some(Err(IniError::security(
                format!(
                    "line too long: exceeds limit of {} bytes",
                    self.max_line_length
                ),
                self.line_num,
            )));
        }

        Some(classify(raw, self.line_num).map(|line| (self.line_num, line)))
    }
}

/// Classify a single raw line.
pub fn classify(raw: &str, line_num: usize) -> IniResult<Line<'_>> {
    let line = raw.trim();

    if line.is_empty() {
        return Ok(Line::Blank);
    }

    if line.starts_with('#') || line.starts_with(';') {
        return Ok(Line::Comment);
    }

    // A lone "[" or "]" is one byte long and can't be both delimiters
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        let name = line[1..line.len() - 1].trim();
        if name.is_empty() {
            return Err(IniError::empty_section_name(line_num));
        }
        return Ok(Line::Section(name));
    }

    Ok(Line::KeyValue(line))
}
