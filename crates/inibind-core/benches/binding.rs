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

//! Binding throughput for growing files.
//!
//! Real configuration files are a few dozen lines; the larger sizes are
//! made of repeated sections to show that cost stays linear.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use inibind_core::{
    FieldKind, FieldSchema, FieldSlot, IniRecord, IniSection, IntWidth, Loader, Schema,
    SectionSchema,
};

#[derive(Default)]
struct Server {
    host: String,
    port: i32,
    workers: i64,
}

impl IniSection for Server {
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema { name: "host", key: "host", kind: FieldKind::Text },
        FieldSchema { name: "port", key: "port", kind: FieldKind::Integer(IntWidth::I32) },
        FieldSchema { name: "workers", key: "workers", kind: FieldKind::Integer(IntWidth::I64) },
    ];

    fn field_mut(&mut self, index: usize) -> Option<FieldSlot<'_>> {
        match index {
            0 => Some((&mut self.host).into()),
            1 => Some((&mut self.port).into()),
            2 => Some((&mut self.workers).into()),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Config {
    primary: Server,
    replica: Server,
}

impl IniRecord for Config {
    const SECTIONS: &'static [SectionSchema] = &[
        SectionSchema { name: "primary", section: "primary", fields: <Server as IniSection>::FIELDS },
        SectionSchema { name: "replica", section: "replica", fields: <Server as IniSection>::FIELDS },
    ];

    fn field_mut(&mut self, section: usize, field: usize) -> Option<FieldSlot<'_>> {
        match section {
            0 => self.primary.field_mut(field),
            1 => self.replica.field_mut(field),
            _ => None,
        }
    }
}

fn generate(repeats: usize) -> String {
    let mut text = String::from("# generated\n");
    for i in 0..repeats {
        let section = if i % 2 == 0 { "primary" } else { "replica" };
        text.push_str(&format!(
            "\n[{}]\nhost = node-{}.internal\nport = {}\n; tuning\nworkers = {}\n",
            section,
            i,
            8000 + i % 1000,
            i % 64
        ));
    }
    text
}

fn bench_bind(c: &mut Criterion) {
    let loader = Loader::<Config>::new().expect("valid schema");
    let mut group = c.benchmark_group("bind");

    for repeats in [1, 16, 256, 4096] {
        let text = generate(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| {
                let mut config = Config::default();
                loader.bind_str(black_box(text), &mut config).expect("valid input");
                config.replica.port
            })
        });
    }

    group.finish();
}

fn bench_schema_build(c: &mut Criterion) {
    c.bench_function("schema_build", |b| {
        b.iter(|| Schema::<Config>::build().expect("valid schema"))
    });
}

criterion_group!(benches, bench_bind, bench_schema_build);
criterion_main!(benches);
