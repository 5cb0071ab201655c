//! Benchmarks for the scroll-path hot code
//!
//! Run with: cargo bench -p vitrine-core
//!
//! These benchmarks establish performance baselines for:
//! - Visibility ratio computation
//! - Highlighter observation passes
//! - Viewer navigation
//! - Gallery flattening

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitrine_core::visibility::{visibility_ratio, Band, ElementRect};
use vitrine_core::{
    FrameGate, Gallery, GalleryImage, Lightbox, PortfolioContent, RevealLatch, Section,
    SectionHighlighter, SectionId, Tilt, VisibilitySample,
};

fn synthetic_content(sections: usize, images_per_section: usize) -> PortfolioContent {
    PortfolioContent {
        name: "Bench".to_string(),
        tagline: String::new(),
        nav: (0..sections)
            .map(|i| vitrine_core::NavLink::new(format!("Section {}", i), format!("s{}", i)))
            .collect(),
        sections: (0..sections)
            .map(|i| {
                let mut section = Section::new(format!("s{}", i), format!("Section {}", i));
                section.images = (0..images_per_section)
                    .map(|j| GalleryImage::new(format!("img-{}-{}.png", i, j)))
                    .collect();
                section
            })
            .collect(),
    }
}

fn sample_batch(sections: usize) -> Vec<VisibilitySample> {
    (0..sections)
        .map(|i| VisibilitySample::new(format!("s{}", i), (i as f64 * 0.13) % 1.0))
        .collect()
}

// ============================================================================
// Geometry Benchmarks
// ============================================================================

fn bench_visibility_ratio(c: &mut Criterion) {
    let band = Band::section(900.0);
    let rect = ElementRect::new(340.0, 520.0);

    c.bench_function("visibility_ratio", |b| {
        b.iter(|| black_box(visibility_ratio(rect, band)))
    });
}

fn bench_measure_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_pass");

    for size in [4, 16, 64].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let band = Band::section(900.0);
            let rects: Vec<ElementRect> = (0..size)
                .map(|i| ElementRect::new(i as f64 * 700.0 - 1200.0, 650.0))
                .collect();

            b.iter(|| {
                let total: f64 = rects.iter().map(|r| visibility_ratio(*r, band)).sum();
                black_box(total)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Highlighter Benchmarks
// ============================================================================

fn bench_highlighter_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlighter_observe");

    for size in [4, 16, 64].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let sections: Vec<SectionId> =
                (0..size).map(|i| SectionId::new(format!("s{}", i))).collect();
            let batch = sample_batch(size);
            let now = Instant::now();

            b.iter_batched(
                || SectionHighlighter::new(sections.clone()),
                |mut h| black_box(h.observe(&batch, now)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Viewer Benchmarks
// ============================================================================

fn bench_viewer_navigation(c: &mut Criterion) {
    c.bench_function("viewer_full_cycle", |b| {
        b.iter_batched(
            || {
                let mut lb = Lightbox::new(24);
                lb.open(0);
                lb
            },
            |mut lb| {
                for _ in 0..24 {
                    lb.next();
                }
                black_box(lb.current())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

// ============================================================================
// Reveal and Motion Benchmarks
// ============================================================================

fn bench_reveal_latch(c: &mut Criterion) {
    c.bench_function("reveal_latch_50_targets", |b| {
        let keys: Vec<String> = (0..50).map(|i| format!("item-{}", i)).collect();

        b.iter_batched(
            RevealLatch::new,
            |mut latch| {
                for (i, key) in keys.iter().enumerate() {
                    latch.observe(key, (i % 10) as f64 / 10.0);
                }
                black_box(latch.revealed_count())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_frame_gate(c: &mut Criterion) {
    c.bench_function("frame_gate_event_burst", |b| {
        let t0 = Instant::now();

        b.iter_batched(
            FrameGate::new,
            |mut gate| {
                let mut passed = 0u32;
                for ms in 0..100u64 {
                    if gate.try_pass(t0 + Duration::from_millis(ms)) {
                        passed += 1;
                    }
                }
                black_box(passed)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_tilt_transform(c: &mut Criterion) {
    c.bench_function("tilt_transform", |b| {
        b.iter(|| black_box(Tilt::at(123.0, 87.0, 420.0, 280.0).transform()))
    });
}

// ============================================================================
// Gallery Benchmarks
// ============================================================================

fn bench_gallery_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_flatten");

    for size in [4, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::new("sections", size), size, |b, &size| {
            let content = synthetic_content(size, 3);

            b.iter(|| black_box(Gallery::from_content(&content)))
        });
    }

    group.finish();
}

fn bench_gallery_index_of(c: &mut Criterion) {
    c.bench_function("gallery_index_of", |b| {
        let content = synthetic_content(16, 3);
        let gallery = Gallery::from_content(&content);
        let last_section = SectionId::new("s15");

        b.iter(|| black_box(gallery.index_of(&last_section, 2)))
    });
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(geometry_benches, bench_visibility_ratio, bench_measure_pass,);

criterion_group!(state_benches, bench_highlighter_observe, bench_viewer_navigation,);

criterion_group!(
    motion_benches,
    bench_reveal_latch,
    bench_frame_gate,
    bench_tilt_transform,
);

criterion_group!(gallery_benches, bench_gallery_flatten, bench_gallery_index_of,);

criterion_main!(geometry_benches, state_benches, motion_benches, gallery_benches,);
