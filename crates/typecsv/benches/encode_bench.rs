use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::distr::{Alphanumeric, SampleString};
use rand::{SeedableRng, rngs::StdRng};
use typecsv::{Value, Writer, record};

fn gen_records(n: usize) -> Vec<Vec<Value>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n)
        .map(|i| {
            let text = Alphanumeric.sample_string(&mut rng, 12);
            record![text, i, i as f64 / 3.0, i % 2 == 0, "quote \" inside", Value::Null]
        })
        .collect()
}

pub fn encode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_records");
    for &n in &[100, 1_000, 10_000] {
        let records = gen_records(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("write_record::{n}"), |b| {
            b.iter_batched(
                || records.clone(),
                |rs| {
                    let mut w = Writer::new(Vec::with_capacity(n * 64));
                    for r in rs {
                        w.write_record(r).unwrap();
                    }
                    black_box(w.into_inner().unwrap())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
