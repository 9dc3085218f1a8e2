use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use nus_compiler::{aggregate, build_list, sanitize_text};

fn sample_list(lines: usize) -> String {
    let mut text = String::from("# generated list\n\n");
    for i in 0..lines {
        match i % 6 {
            0 => text.push_str(&format!("https://host{}.example.com/path/{}\n", i, i)),
            1 => text.push_str(&format!("*.zone{}.example.org\n", i)),
            2 => text.push_str(&format!("site{}.net/some path/{}\n", i % 50, i)),
            3 => text.push_str(&format!("user{}@example.com\n", i)),
            4 => text.push_str(&format!("dup{}.example.com/\n", i % 100)),
            _ => text.push_str("; comment\n"),
        }
    }
    text
}

fn bench_sanitize(c: &mut Criterion) {
    let text = sample_list(10_000);
    let mut group = c.benchmark_group("sanitize");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("sanitize_text", |b| {
        b.iter(|| sanitize_text(black_box(&text)))
    });

    let outcomes = sanitize_text(&text);
    group.bench_function("aggregate", |b| b.iter(|| aggregate(black_box(&outcomes))));

    group.bench_function("end_to_end", |b| {
        b.iter(|| build_list(&aggregate(&sanitize_text(black_box(&text)))))
    });

    group.finish();
}

criterion_group!(benches, bench_sanitize);
criterion_main!(benches);
