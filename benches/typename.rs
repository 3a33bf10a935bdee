//! Benchmarks for type name parsing and rendering.
//!
//! Covers the shapes that dominate real metadata:
//! - Plain namespace-qualified names
//! - Fully assembly-qualified closed generics
//! - Nested generic chains with arrays
//! - Deep generic argument nesting
//! - Rendering a parsed tree back to text

extern crate dotname;

use criterion::{criterion_group, criterion_main, Criterion};
use dotname::{QualifiedTypeName, TypeNameBuilder, TypeNameNode};
use std::hint::black_box;

const SIMPLE: &str = "System.Collections.Generic.List";

const DICTIONARY: &str = "System.Collections.Generic.Dictionary`2[[System.String, mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089],[System.Int32, mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089]], mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

const NESTED: &str = "MyApp.Outer`1+Inner`2[[System.Int32[]],[System.String],[MyApp.Item, MyApp]][,][], MyApp";

/// ``A`1[[A`1[[...]]]]`` nested `depth` times
fn deep_generic(depth: usize) -> String {
    let mut text = "Leaf".to_string();
    for _ in 0..depth {
        text = format!("Node`1[[{}]]", text);
    }
    text
}

/// Benchmark parsing a name without generics, arrays or assembly.
fn bench_parse_simple(c: &mut Criterion) {
    c.bench_function("typename_parse_simple", |b| {
        b.iter(|| {
            let name = QualifiedTypeName::parse(black_box(SIMPLE)).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing a fully qualified two-argument generic.
fn bench_parse_dictionary(c: &mut Criterion) {
    c.bench_function("typename_parse_dictionary", |b| {
        b.iter(|| {
            let name = QualifiedTypeName::parse(black_box(DICTIONARY)).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing a nested generic chain sharing one argument list.
fn bench_parse_nested(c: &mut Criterion) {
    c.bench_function("typename_parse_nested", |b| {
        b.iter(|| {
            let name = QualifiedTypeName::parse(black_box(NESTED)).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark parsing 32 levels of generic nesting.
fn bench_parse_deep(c: &mut Criterion) {
    let text = deep_generic(32);

    c.bench_function("typename_parse_deep_32", |b| {
        b.iter(|| {
            let name = QualifiedTypeName::parse(black_box(&text)).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark rendering a parsed fully qualified generic.
fn bench_build_dictionary(c: &mut Criterion) {
    let name = QualifiedTypeName::parse(DICTIONARY).unwrap();

    c.bench_function("typename_build_dictionary", |b| {
        b.iter(|| {
            let text = TypeNameBuilder::new(black_box(&name))
                .include_assembly_name(true)
                .build()
                .unwrap();
            black_box(text)
        });
    });
}

/// Benchmark rewriting every assembly qualifier of a parsed tree.
fn bench_transform_assemblies(c: &mut Criterion) {
    let name = QualifiedTypeName::parse(DICTIONARY).unwrap();

    c.bench_function("typename_transform_assemblies", |b| {
        b.iter(|| {
            let mut name = name.clone();
            name.transform(|node| {
                if let TypeNameNode::Qualified(qualified) = node {
                    qualified.assembly_name = Some("System.Runtime".to_string());
                }
            });
            black_box(name)
        });
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_dictionary,
    bench_parse_nested,
    bench_parse_deep,
    bench_build_dictionary,
    bench_transform_assemblies,
);
criterion_main!(benches);
