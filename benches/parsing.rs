//! Benchmarks for transcript parsing.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use zoomchat::ZoomChatParser;

// =============================================================================
// Test Data Generator
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "09:{:02}:{:02} From {} to Everyone:",
            (i / 60) % 60,
            i % 60,
            sender
        ));
        // Every fifth message reacts to a recent one, keeping the resolver busy.
        if i % 5 == 4 {
            lines.push(format!(
                "\tReacted to \"message number {}\" with 👍",
                i.saturating_sub(3)
            ));
        } else {
            lines.push(format!("\tmessage number {i}"));
        }
    }
    lines.join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [100, 1_000, 10_000] {
        let transcript = generate_transcript(count);
        group.throughput(Throughput::Bytes(transcript.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &transcript,
            |b, transcript| {
                let parser = ZoomChatParser::new();
                b.iter(|| parser.parse_str(black_box(transcript)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
