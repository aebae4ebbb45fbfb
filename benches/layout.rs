use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sankey_layout::{Diagram, EdgeRecord, LayoutConfig, compute_layout};
use std::hint::black_box;

/// Dense layered flow: `columns` ranks with `per_column` nodes each, every
/// node feeding every node of the next rank.
fn layered_flow(columns: usize, per_column: usize) -> Diagram {
    let mut edges = Vec::new();
    for column in 0..columns.saturating_sub(1) {
        for i in 0..per_column {
            for j in 0..per_column {
                edges.push(EdgeRecord::new(
                    &format!("N{}_{}", column, i),
                    &format!("N{}_{}", column + 1, j),
                    1.0 + ((i + j) % 5) as f32,
                ));
            }
        }
    }
    Diagram::from_edges(edges)
}

/// Long chain with a handful of backward links mixed in.
fn chain_with_loops(length: usize) -> Diagram {
    let mut edges = Vec::new();
    for i in 0..length.saturating_sub(1) {
        edges.push(EdgeRecord::new(&format!("C{i}"), &format!("C{}", i + 1), 3.0));
        if i % 16 == 0 && i >= 8 {
            edges.push(EdgeRecord::new(&format!("C{i}"), &format!("C{}", i - 8), 1.0));
        }
    }
    Diagram::from_edges(edges)
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();

    let mut group = c.benchmark_group("layered");
    for (columns, per_column) in [(4, 4), (8, 8), (12, 16)] {
        let diagram = layered_flow(columns, per_column);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{columns}x{per_column}")),
            &diagram,
            |b, diagram| b.iter(|| black_box(compute_layout(black_box(diagram), &config))),
        );
    }
    group.finish();

    let mut group = c.benchmark_group("chain_with_loops");
    for length in [64usize, 256, 1024] {
        let diagram = chain_with_loops(length);
        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &diagram,
            |b, diagram| b.iter(|| black_box(compute_layout(black_box(diagram), &config))),
        );
    }
    group.finish();

    c.bench_function("inverted_layered_8x8", |b| {
        let diagram = layered_flow(8, 8);
        let inverted = LayoutConfig {
            inverted: true,
            ..LayoutConfig::default()
        };
        b.iter(|| black_box(compute_layout(black_box(&diagram), &inverted)));
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
