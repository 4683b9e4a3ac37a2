//! Benchmarks for index building, querying and markup rendering

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use supdash_core::{ContentNode, ContentTree, SearchIndex, SearchOptions, render};

const TOPICS: &[&str] = &[
    "escalation ~bowners~b and weekend coverage",
    "dealership ~iaccounts~i handled by senior agents",
    "chat queue ~u~bpriority~b~u routing",
    "billing disputes~nrefund approvals",
    "onboarding checklists for new agents",
];

// Synthetic tree: `modules` modules of 4 sections with 6 subsections each.
fn create_tree(modules: usize) -> ContentTree {
    let modules = (0..modules)
        .map(|m| {
            let sections = (0..4)
                .map(|s| {
                    let subsections = (0..6)
                        .map(|sub| {
                            ContentNode::subsection(&format!("Agent {m}-{s}-{sub}"))
                                .with_info(TOPICS[(m + s + sub) % TOPICS.len()])
                        })
                        .collect();
                    ContentNode::section(&format!("Tier {s}"))
                        .with_notes(TOPICS[s % TOPICS.len()])
                        .with_children(subsections)
                })
                .collect();
            ContentNode::module(&format!("Department {m}")).with_children(sections)
        })
        .collect();
    ContentTree::new(modules)
}

fn bench_index_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_building");

    for count in [1, 10, 50] {
        let tree = create_tree(count);
        group.bench_with_input(BenchmarkId::new("modules", count), &tree, |b, tree| {
            b.iter(|| SearchIndex::build(black_box(tree)));
        });
    }

    group.finish();
}

fn bench_query_complexity(c: &mut Criterion) {
    let index = SearchIndex::build(&create_tree(50));
    let options = SearchOptions::default();
    let mut group = c.benchmark_group("query_complexity");

    let queries = [
        ("single_term", "agents"),
        ("two_terms", "tier agents"),
        ("selective", "department 42 tier 3"),
        ("no_match", "nonexistent phrase"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::new("query", name), query, |b, query| {
            b.iter(|| index.query(black_box(query), &options));
        });
    }

    group.finish();
}

fn bench_result_limits(c: &mut Criterion) {
    let index = SearchIndex::build(&create_tree(50));
    let mut group = c.benchmark_group("result_limits");

    for limit in [1, 10, 100, 1000] {
        let options = SearchOptions {
            limit,
            ..SearchOptions::default()
        };
        group.bench_with_input(BenchmarkId::new("limit", limit), &options, |b, options| {
            b.iter(|| index.query(black_box("agent"), options));
        });
    }

    group.finish();
}

fn bench_markup_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_rendering");

    for repeat in [1, 10, 100] {
        let text = TOPICS.join(" ").repeat(repeat);
        group.bench_with_input(BenchmarkId::new("repeat", repeat), &text, |b, text| {
            b.iter(|| render(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_index_building,
    bench_query_complexity,
    bench_result_limits,
    bench_markup_rendering
);
criterion_main!(benches);
