use criterion::{criterion_group, criterion_main, Criterion};

use prism_core::config::MergerConfig;
use prism_core::models::{GraphView, NodeData, ScoredNode, ViewSource};
use prism_fusion::Merger;
use test_fixtures::builders::entity;

/// Four views of 50 nodes each, with a third of the ids shared across views.
fn build_views() -> Vec<GraphView> {
    ViewSource::ALL
        .iter()
        .enumerate()
        .map(|(v, source)| {
            let nodes = (0..50)
                .map(|i| {
                    let id = if i % 3 == 0 {
                        format!("shared{i}")
                    } else {
                        format!("v{v}n{i}")
                    };
                    let score = 1.0 - i as f64 / 50.0;
                    ScoredNode::new(id.clone(), NodeData::Entity(entity(&id)), score)
                })
                .collect();
            GraphView::new(*source, nodes)
        })
        .collect()
}

fn bench_merge_four_views(c: &mut Criterion) {
    let views = build_views();
    let merger = Merger::new(MergerConfig::default()).unwrap();

    c.bench_function("merge_4x50_views", |b| {
        b.iter(|| {
            merger.merge(&views).unwrap();
        });
    });
}

fn bench_filters(c: &mut Criterion) {
    let merger = Merger::new(MergerConfig::default()).unwrap();
    let merged = merger.merge(&build_views()).unwrap();

    c.bench_function("filter_by_view_count_2", |b| {
        b.iter(|| {
            merger.filter_by_view_count(&merged, 2).unwrap();
        });
    });
}

criterion_group!(benches, bench_merge_four_views, bench_filters);
criterion_main!(benches);
