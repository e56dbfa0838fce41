use criterion::{criterion_group, criterion_main, Criterion};
use packed_path::algorithm::Sparsify;
use packed_path::Path2D;

fn create_data() -> Path2D {
    // 1000 closed rings of 256 points each
    let n = 256;
    let mut path = Path2D::new();
    for ring in 0..1000 {
        let r = 1.0 + ring as f64;
        let mut x: Vec<f64> = (0..n)
            .map(|i| r * (i as f64 / n as f64 * std::f64::consts::TAU).cos())
            .collect();
        let mut y: Vec<f64> = (0..n)
            .map(|i| r * (i as f64 / n as f64 * std::f64::consts::TAU).sin())
            .collect();
        x.push(x[0]);
        y.push(y[0]);
        path.add_loop(&x, &y).unwrap();
    }
    path
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    c.bench_function("sparsify Path2D", |b| {
        b.iter(|| {
            let _ = data.sparsified(7).unwrap();
        })
    });

    c.bench_function("iterate Path2D subpaths", |b| {
        b.iter(|| data.iter().map(|p| p.packed_len()).sum::<usize>())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
