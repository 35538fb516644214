// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use seatmap_imaging_ref::RefBackend;
use seatmap_layout::{NodeKind, VenueNode};
use seatmap_selection::{SelectionMode, SelectionRequest};
use seatmap_viewer::{InputEvent, SeatMapViewer, ViewerConfig};

fn venue(len: usize) -> Vec<VenueNode> {
    (0..len)
        .map(|i| {
            let kind = NodeKind::ALL[i % NodeKind::ALL.len()];
            VenueNode::new(
                format!("n{i}"),
                (i % 64) as f64 * 25.0,
                (i / 64) as f64 * 25.0,
                kind,
                format!("{} {i}", kind.name()),
            )
        })
        .collect()
}

fn viewer(len: usize) -> SeatMapViewer {
    let mut viewer = SeatMapViewer::new(ViewerConfig::default());
    viewer.resize(1280.0, 720.0, 2.0);
    viewer.finish_load(Ok(venue(len)));
    viewer.set_selection(SelectionRequest::new([1, 2, 3, 11], SelectionMode::Unrestricted));
    viewer.set_route((0..len).step_by(9).map(|i| format!("n{i}")));
    viewer
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/render");

    for len in [256_usize, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        let mut fitted = viewer(len);
        let mut backend = RefBackend::default();
        group.bench_function(BenchmarkId::new("fitted", len), |b| {
            b.iter(|| {
                backend.clear_events();
                black_box(fitted.render(&mut backend));
            });
        });

        // Zoomed into a corner so most glyphs are culled.
        let mut zoomed = viewer(len);
        for _ in 0..32 {
            zoomed.handle_input(&InputEvent::wheel(-1.0, (0.0, 0.0)));
        }
        let mut backend = RefBackend::default();
        group.bench_function(BenchmarkId::new("zoomed", len), |b| {
            b.iter(|| {
                backend.clear_events();
                black_box(zoomed.render(&mut backend));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
