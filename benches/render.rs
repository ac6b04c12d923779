//! Benchmarks for document construction and rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use rubric::{Document, Section, SectionBuilder};

/// A chain of sections nested to the deepest representable level.
fn deep_section() -> Section {
    let mut builder = Section::builder("Level 0");
    for level in 1..=17 {
        builder.open_sub_section(format!("Level {}", level));
        builder.add_paragraph("Some body text at this depth.");
    }
    for _ in 1..=17 {
        builder.close_sub_section().unwrap();
    }
    builder.build().unwrap()
}

/// A flat document with many sibling sections and paragraphs.
fn wide_document(sections: usize, paragraphs: usize) -> Document {
    let mut doc = Document::builder("bench");
    for i in 0..sections {
        let mut section = Section::builder(format!("Section {}", i));
        for j in 0..paragraphs {
            section.add_paragraph(format!("Paragraph {} of section {}.", j, i));
        }
        doc.add_section(&section.build().unwrap());
    }
    doc.build()
}

/// A loaded builder, for measuring snapshot (deep copy) cost.
fn loaded_builder() -> SectionBuilder {
    let mut builder = Section::builder("Root");
    for i in 0..64 {
        builder.open_sub_section(format!("Child {}", i));
        builder.add_paragraph("body");
        builder.close_sub_section().unwrap();
    }
    builder
}

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_render_deep(c: &mut Criterion) {
    let section = deep_section();
    c.bench_function("render_deep", |b| {
        b.iter(|| section.write().unwrap());
    });
}

fn bench_render_wide(c: &mut Criterion) {
    let doc = wide_document(100, 10);
    c.bench_function("render_wide", |b| {
        b.iter(|| doc.write().unwrap());
    });
}

// ============================================================================
// Snapshot Benchmarks
// ============================================================================

fn bench_build_snapshot(c: &mut Criterion) {
    let builder = loaded_builder();
    c.bench_function("build_snapshot", |b| {
        b.iter(|| builder.build().unwrap());
    });
}

criterion_group!(
    benches,
    bench_render_deep,
    bench_render_wide,
    bench_build_snapshot
);
criterion_main!(benches);
