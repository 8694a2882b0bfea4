//! Benchmarks for docsight analysis performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks analyze synthetic documents of growing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docsight::{AnalysisOptions, Analyzer, AnalyzerConfig, Document, ListInfo, Paragraph, Table};

const SENTENCES: &[&str] = &[
    "Ownership rules let the compiler prove memory safety without a garbage collector.",
    "The borrow checker rejects programs that would create dangling references.",
    "See https://doc.rust-lang.org/book/ for a longer introduction to the language.",
    "Traits describe shared behavior and enable zero-cost generic code.",
    "Iterators compose lazily and usually compile down to tight loops.",
];

/// Creates a synthetic document with the given number of sections.
fn create_test_document(sections: usize) -> Document {
    let mut elements = Vec::new();
    for i in 0..sections {
        elements.push(Paragraph::heading(format!("Section {}", i + 1), 2).into());
        for sentence in SENTENCES {
            elements.push(Paragraph::normal(*sentence).into());
        }
        elements.push(Paragraph::list_item("A bullet point", ListInfo::bullet(0)).into());
        elements.push(
            Table::from_rows(vec![vec!["name", "value", "unit"], vec!["size", "42"]]).into(),
        );
    }
    Document::from_elements(elements)
}

/// Benchmark full analysis at various sizes.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let analyzer = Analyzer::default();
    let options = AnalysisOptions::all();

    for sections in [1, 10, 100].iter() {
        let doc = create_test_document(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| analyzer.analyze(black_box(&doc), &options));
        });
    }

    group.finish();
}

/// Benchmark parallel against sequential stage execution.
fn bench_stage_scheduling(c: &mut Criterion) {
    let doc = create_test_document(50);
    let options = AnalysisOptions::all();
    let parallel = Analyzer::default();
    let sequential = Analyzer::new(AnalyzerConfig::new().sequential()).unwrap();

    c.bench_function("stages_parallel", |b| {
        b.iter(|| parallel.analyze(black_box(&doc), &options));
    });

    c.bench_function("stages_sequential", |b| {
        b.iter(|| sequential.analyze(black_box(&doc), &options));
    });
}

/// Benchmark format detection and decoding.
fn bench_source_decoding(c: &mut Criterion) {
    let text = SENTENCES.join(" ").repeat(20);
    let json = serde_json::to_vec(&create_test_document(10)).unwrap();

    c.bench_function("decode_plain_text", |b| {
        b.iter(|| docsight::source::from_bytes(black_box(text.as_bytes())).unwrap());
    });

    c.bench_function("decode_document_json", |b| {
        b.iter(|| docsight::source::from_bytes(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_analysis,
    bench_stage_scheduling,
    bench_source_decoding,
);
criterion_main!(benches);
