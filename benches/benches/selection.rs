// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use seatmap_layout::{NodeKind, VenueNode};
use seatmap_selection::{SelectionMode, SelectionRequest, resolve};

fn venue(tables: usize) -> Vec<VenueNode> {
    (0..tables)
        .map(|i| {
            let (kind, label) = if i % 5 == 0 {
                (NodeKind::VipTable, format!("VIP Table {}", i / 5))
            } else if i % 7 == 0 {
                (NodeKind::Waypoint, format!("{i}"))
            } else {
                (NodeKind::Table, format!("Table {i}"))
            };
            VenueNode::new(format!("n{i}"), (i % 40) as f64 * 30.0, (i / 40) as f64 * 30.0, kind, label)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/resolve");

    for len in [64_usize, 512, 4_096] {
        let nodes = venue(len);
        group.throughput(Throughput::Elements(len as u64));

        let single = SelectionRequest::new([3], SelectionMode::Unrestricted);
        group.bench_with_input(BenchmarkId::new("single", len), &nodes, |b, nodes| {
            b.iter(|| black_box(resolve(nodes, &single)));
        });

        // A whole-party request: every tenth number, half of them missing.
        let ids: Vec<u32> = (0..(len as u32)).step_by(10).collect();
        let party = SelectionRequest::new(ids, SelectionMode::RegularOnly);
        group.bench_with_input(BenchmarkId::new("party", len), &nodes, |b, nodes| {
            b.iter(|| black_box(resolve(nodes, &party)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
