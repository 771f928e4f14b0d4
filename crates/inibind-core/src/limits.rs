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

//! Size limits applied before and during scanning.

/// Configurable input limits.
///
/// Configuration files are expected to be small; these bounds keep a
/// misdirected path (a log file, a device) from being read and scanned
/// in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 16MB).
    pub max_file_size: usize,
    /// Maximum length of a single line in bytes (default: 64KB).
    pub max_line_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 16 * 1024 * 1024, // 16MB
            max_line_length: 64 * 1024,      // 64KB
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_line_length: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_file_size() {
        assert_eq!(Limits::default().max_file_size, 16 * 1024 * 1024);
    }

    #[test]
    fn test_default_max_line_length() {
        assert_eq!(Limits::default().max_line_length, 64 * 1024);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_file_size, usize::MAX);
        assert_eq!(limits.max_line_length, usize::MAX);
    }
}
