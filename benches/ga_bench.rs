use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use stringforge::fitness::cost;
use stringforge::genome::{Alphabet, KnownAlphabet};
use stringforge::optimizer::{Evolution, EvolutionOptions};
use stringforge::trace::TraceRecord;

const TARGET: &str = "the quick brown fox jumps over the lazy dog";

fn criterion_benchmark(c: &mut Criterion) {
    let alphabet = Alphabet::new(KnownAlphabet::Ascii64.get_str()).expect("ascii64 preset");
    let target = alphabet.encode_string(TARGET).expect("encodable target");
    let candidate = alphabet
        .encode_string("eht kciuq nworb xof spmuj revo eht yzal god")
        .expect("encodable candidate");

    c.bench_function("cost (43 genes)", |b| {
        b.iter(|| cost(black_box(&candidate), black_box(&target)))
    });

    // Each sample steps a fresh generation-1 population.
    let options = EvolutionOptions {
        population_size: 250,
        ..EvolutionOptions::default()
    };
    let always = |_: &TraceRecord| true;

    c.bench_function("step (population 250)", |b| {
        b.iter_batched(
            || {
                Evolution::new(alphabet.clone(), TARGET, options.clone(), Some(1))
                    .expect("valid evolution")
            },
            |mut evolution| evolution.step(black_box(&always)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
