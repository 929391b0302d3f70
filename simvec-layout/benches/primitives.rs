use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use simvec_layout::{clean_word, locate_word, word_mask, words_for};

fn bench_sizing(c: &mut Criterion) {
    c.bench_function("words_for/1..4096", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for bits in 1..4096usize {
                total += words_for(black_box(bits));
            }
            total
        })
    });
}

fn bench_masking(c: &mut Criterion) {
    c.bench_function("word_mask/1..4096", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for bits in 1..4096usize {
                acc ^= word_mask(black_box(bits));
            }
            acc
        })
    });

    let words = vec![0xA5A5_A5A5u32; 1024];
    c.bench_function("clean_word/top-of-1024", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for (i, &w) in words.iter().enumerate() {
                acc ^= clean_word(black_box(w), i * 32 + 7);
            }
            acc
        })
    });
}

fn bench_addressing(c: &mut Criterion) {
    c.bench_function("locate_word/0..4096", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for bit in 0..4096usize {
                let addr = locate_word(black_box(bit));
                acc += addr.unit + addr.bit as usize;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_sizing, bench_masking, bench_addressing);
criterion_main!(benches);
