//! Criterion benchmarks for the lexstat text analyzer.
//!
//! Covers the two tokenization strategies and the full analysis pipeline
//! over inputs of increasing size.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexstat::analysis::analyzer::TextAnalyzer;
use lexstat::analysis::tokenizer::Tokenizer;
use lexstat::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use lexstat::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
use std::hint::black_box;

/// Generate test text for benchmarking.
fn generate_test_text(words: usize) -> String {
    let vocabulary = [
        "the", "quick", "brown", "fox", "jumps", "over", "a", "lazy", "dog", "while", "we",
        "watch", "from", "behind", "an", "old", "fence", "near", "them", "during", "sunset,",
        "it", "runs", "through", "fields", "beyond", "our", "small", "town.",
    ];

    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(if i % 12 == 0 { '\n' } else { ' ' });
        }
        text.push_str(vocabulary[i % vocabulary.len()]);
    }
    text
}

fn bench_tokenizers(c: &mut Criterion) {
    let text = generate_test_text(1000);

    let mut group = c.benchmark_group("tokenizers");
    group.throughput(Throughput::Bytes(text.len() as u64));

    let whitespace = WhitespaceTokenizer::new();
    group.bench_function("whitespace", |b| {
        b.iter(|| {
            let count = whitespace.tokenize(black_box(&text)).unwrap().count();
            black_box(count)
        })
    });

    let word_boundary = WordBoundaryTokenizer::new().unwrap();
    group.bench_function("word_boundary", |b| {
        b.iter(|| {
            let count = word_boundary.tokenize(black_box(&text)).unwrap().count();
            black_box(count)
        })
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = TextAnalyzer::new().unwrap();

    let mut group = c.benchmark_group("analyze");
    for words in [100, 1000, 10000] {
        let text = generate_test_text(words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{words}_words"), |b| {
            b.iter(|| {
                let report = analyzer.analyze(black_box(&text)).unwrap();
                black_box(report)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenizers, bench_analyze);
criterion_main!(benches);
