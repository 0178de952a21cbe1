//! Segmentation and removal benchmarks.
//!
//! Measures throughput on synthetic documents of different sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use blablatex::annotate::wrap;
use blablatex::{remove_markers, segment, Annotator, Language, MockScorer};

/// Generate a synthetic LaTeX document with the given number of sections.
fn generate_document(sections: usize) -> String {
    let mut doc = String::from("\\documentclass{article}\n\\begin{document}\n\n");

    for i in 0..sections {
        doc.push_str(&format!("\\section{{Section {}}}\n", i + 1));
        for p in 0..4 {
            doc.push_str(&format!(
                "Paragraph {} of section {} goes on about frameworks, synergies\n\
                 and the strategic alignment of cross-functional deliverables.\n\n",
                p + 1,
                i + 1
            ));
        }
        if i % 3 == 0 {
            doc.push_str("\\begin{figure}\n\\centering\n\\end{figure}\n\n");
        }
    }

    doc.push_str("\\end{document}\n");
    doc
}

/// Wrap every paragraph of a document as if it had been scored.
fn generate_annotated(sections: usize) -> String {
    generate_document(sections)
        .split("\n\n")
        .map(|chunk| wrap(&format!("{}\n", chunk), 0.42))
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for sections in [10, 100, 1_000].iter() {
        let doc = generate_document(*sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &doc, |b, doc| {
            b.iter(|| segment(black_box(doc)).count())
        });
    }

    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate_mock");
    let scorer = MockScorer::new(0.5);

    for sections in [10, 100].iter() {
        let doc = generate_document(*sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &doc, |b, doc| {
            let annotator = Annotator::new(&scorer, Language::En);
            b.iter(|| annotator.annotate_str(black_box(doc)).unwrap())
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for sections in [10, 100, 1_000].iter() {
        let doc = generate_annotated(*sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &doc, |b, doc| {
            b.iter(|| remove_markers(black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment, bench_annotate, bench_remove);
criterion_main!(benches);
