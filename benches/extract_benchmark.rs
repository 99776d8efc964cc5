//! Benchmarks for the extraction pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use outliner::model::{Document, Page, StyleSpan, TextLine};
use outliner::{extract_document, LineScorer};

/// A synthetic document: one heading plus thirty body lines per page.
fn synthetic_document(pages: u32) -> Document {
    let mut doc = Document::new();
    for number in 1..=pages {
        let mut page = Page::new(number);
        page.add_line(TextLine::from_spans(vec![StyleSpan::new(
            format!("{}. Section heading", number),
            16.0,
            "Helvetica-Bold",
        )]));
        for i in 0..30 {
            page.add_line(TextLine::from_spans(vec![StyleSpan::new(
                format!("Body paragraph line {} with typical sentence length.", i),
                10.0,
                "Helvetica",
            )]));
        }
        doc.add_page(page);
    }
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_document(100);
    c.bench_function("extract_structure_100_pages", |b| {
        b.iter(|| extract_document(black_box(&doc)))
    });
}

fn bench_score(c: &mut Criterion) {
    let scorer = LineScorer::with_body_size(10);
    c.bench_function("score_line", |b| {
        b.iter(|| {
            scorer.score(
                black_box("1.2.3 Heading text sample"),
                black_box(16),
                black_box("Helvetica-Bold"),
            )
        })
    });
}

criterion_group!(benches, bench_extract, bench_score);
criterion_main!(benches);
