use brane_bench::{sanitize::sanitize_lines, Extractor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn profile_output(containers: usize) -> String {
    let mut output = String::from("Workflow timing results\n - Total: 3s\n");

    for i in 0..containers {
        output.push_str(&format!(
            "  - Container creation timing results: {}ms\n\
             \x20 - Container launching timing results: {}ms\n\
             \x20 - Container runtime timing results: {}us\n\n",
            i % 7,
            100 + i,
            250 * i
        ));
    }

    output
}

fn bench_extract(c: &mut Criterion) {
    let output = profile_output(100);
    let extractor = Extractor::default().require_all(true);

    c.bench_function("sanitize", |b| b.iter(|| sanitize_lines(black_box(&output))));

    let lines = sanitize_lines(&output);
    c.bench_function("extract", |b| {
        b.iter(|| extractor.extract(black_box(&lines)).unwrap())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
