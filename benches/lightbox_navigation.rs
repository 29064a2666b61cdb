// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox open and navigation.
//!
//! Opening resolves an id through the list's lookup map; navigation is a
//! wrapping index step. Both run on direct user input, so they must stay
//! trivially cheap even against a large portfolio.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::content::{ImageId, ImageList, ImageRecord};
use iced_folio::lightbox::{Lightbox, ScrollLock};
use std::hint::black_box;

fn synthetic_list(len: usize) -> ImageList {
    let records = (0..len)
        .map(|index| {
            ImageRecord::new(
                ImageId::new(format!("img-{index:05}")),
                format!("https://cdn.example.com/img-{index:05}"),
                3000,
                2000,
                None,
            )
        })
        .collect();
    ImageList::new(records).expect("unique synthetic ids")
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    let list = synthetic_list(2400);
    let id = ImageId::new("img-02399");

    group.bench_function("open_by_id", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new(ScrollLock::new());
            let index = lightbox.open(black_box(&list), &id).unwrap();
            black_box(index);
        });
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    let list = synthetic_list(2400);
    let mut lightbox = Lightbox::new(ScrollLock::new());
    lightbox.open(&list, &ImageId::new("img-00000")).unwrap();

    group.bench_function("full_wraparound_sweep", |b| {
        b.iter(|| {
            for _ in 0..list.len() {
                black_box(lightbox.next(&list));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_navigate);
criterion_main!(benches);
