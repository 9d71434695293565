//! Benchmarks for the full analysis pipeline.
//!
//! Run with: cargo bench -p ivr-insights-analysis
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ivr_insights_analysis::analyze;

const MENU_SENTENCES: [&str; 6] = [
    "Press 1 for billing",
    "Press 2 for technical support",
    "For new accounts, press 3",
    "Option 4 to hear your balance",
    "To speak to a representative press 0",
    "Please listen carefully as our options have changed",
];

/// A transcript with `menus` menu blocks, each followed by a closing sentence.
fn synthetic_transcript(menus: usize) -> String {
    let mut text = String::from("Thank you for calling Acme. ");
    for _ in 0..menus {
        for sentence in MENU_SENTENCES {
            text.push_str(sentence);
            text.push_str(". ");
        }
        text.push_str("Your call is important to us. ");
    }
    text
}

/// A branching flowchart with `width` options per level and `depth` levels.
fn synthetic_flowchart(width: usize, depth: usize) -> String {
    let mut text = String::from("flowchart TD\n    N0[Start]\n");
    let mut level = vec![0usize];
    let mut next_id = 1;
    for _ in 0..depth {
        let mut next_level = Vec::new();
        for &parent in &level {
            for _ in 0..width {
                text.push_str(&format!("    N{next_id}[Option {next_id}]\n    N{parent} --> N{next_id}\n"));
                next_level.push(next_id);
                next_id += 1;
            }
        }
        level = next_level;
    }
    text.push_str("    End[End]\n");
    text
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for (menus, width, depth) in [(1, 3, 2), (5, 4, 3), (20, 5, 4)] {
        let transcript = synthetic_transcript(menus);
        let flowchart = synthetic_flowchart(width, depth);
        group.throughput(Throughput::Bytes((transcript.len() + flowchart.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{menus}menus_{width}x{depth}")),
            &(transcript, flowchart),
            |b, (transcript, flowchart)| b.iter(|| analyze(black_box(transcript), black_box(flowchart))),
        );
    }

    group.finish();
}

fn bench_empty_input(c: &mut Criterion) {
    c.bench_function("analyze_empty", |b| b.iter(|| analyze(black_box(""), black_box(""))));
}

criterion_group!(benches, bench_pipeline, bench_empty_input);
criterion_main!(benches);
