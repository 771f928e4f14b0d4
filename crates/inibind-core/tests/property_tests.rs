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

//! Property-based tests for line validation and binding.

mod common;

use common::AppConfig;
use inibind_core::validate::split_key_value;
use inibind_core::{bind_str, IniErrorKind};
use proptest::prelude::*;

/// Values with no structural characters and no surrounding whitespace.
fn plain_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:/@\"-]([a-zA-Z0-9_.:/@\" -]{0,30}[a-zA-Z0-9_.:/@\"-])?"
}

fn key() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a single '=' with non-empty sides is always accepted.
    #[test]
    fn prop_validator_accepts_well_formed(
        k in key(),
        v in plain_value(),
        lpad in "[ \t]{0,3}",
        rpad in "[ \t]{0,3}",
    ) {
        let line = format!("{}{}{}={}{}", k, lpad, rpad, rpad, v);
        let (got_key, got_value) = split_key_value(&line, 1).unwrap();
        prop_assert_eq!(got_key, k.as_str());
        prop_assert_eq!(got_value, v.as_str());
    }

    /// Property: two or more '=' are always ambiguous.
    #[test]
    fn prop_validator_rejects_extra_separators(
        k in key(),
        parts in prop::collection::vec("[a-z0-9]{0,5}", 2..5),
    ) {
        let line = format!("{}={}", k, parts.join("="));
        let err = split_key_value(&line, 7).unwrap_err();
        prop_assert_eq!(err.kind, IniErrorKind::AmbiguousSeparator);
        prop_assert_eq!(err.line, 7);
    }

    /// Property: no '=' is always a missing separator.
    #[test]
    fn prop_validator_rejects_missing_separator(line in "[a-z0-9 ]{1,20}") {
        let err = split_key_value(&line, 1).unwrap_err();
        prop_assert_eq!(err.kind, IniErrorKind::MissingSeparator);
    }

    /// Property: a bracket anywhere is rejected before separator checks.
    #[test]
    fn prop_validator_rejects_brackets(
        prefix in "[a-z=]{0,8}",
        bracket in prop::sample::select(vec!['[', ']']),
        suffix in "[a-z=]{0,8}",
    ) {
        let line = format!("{}{}{}", prefix, bracket, suffix);
        let err = split_key_value(&line, 1).unwrap_err();
        prop_assert_eq!(err.kind, IniErrorKind::ForbiddenBracket);
    }

    /// Property: every i32 survives binding unchanged.
    #[test]
    fn prop_integer_values_bind_exactly(port in any::<i32>()) {
        let mut config = AppConfig::default();
        bind_str(&format!("[db]\nport = {}\n", port), &mut config).unwrap();
        prop_assert_eq!(config.db.port, port);
    }

    /// Property: text values bind verbatim after trimming.
    #[test]
    fn prop_text_values_bind_verbatim(host in plain_value(), pass in plain_value()) {
        let mut config = AppConfig::default();
        bind_str(&format!("[cache]\n  host =  {}\npass={}  \n", host, pass), &mut config).unwrap();
        prop_assert_eq!(config.cache.host, host);
        prop_assert_eq!(config.cache.pass, pass);
    }

    /// Property: an unknown section fails at its own line wherever it appears.
    #[test]
    fn prop_unknown_section_reported_at_position(before in 0usize..10, after in 0usize..10) {
        let mut text = String::from("[db]\n");
        for i in 0..before {
            text.push_str(&format!("port = {}\n", i));
        }
        text.push_str("[unknown]\n");
        for _ in 0..after {
            text.push_str("host = x\n");
        }

        let mut config = AppConfig::default();
        let err = bind_str(&text, &mut config).unwrap_err();
        prop_assert_eq!(err.kind, IniErrorKind::UnknownSection);
        prop_assert_eq!(err.line, before + 2);
    }

    /// Property: binding the same text twice gives equal records.
    #[test]
    fn prop_binding_is_idempotent(host in plain_value(), port in any::<i64>()) {
        let text = format!("[cache]\nhost={}\nport={}\n", host, port);
        let mut first = AppConfig::default();
        let mut second = AppConfig::default();
        bind_str(&text, &mut first).unwrap();
        bind_str(&text, &mut second).unwrap();
        prop_assert_eq!(first, second);
    }
}
