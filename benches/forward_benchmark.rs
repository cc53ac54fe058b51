use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nn_chain::{
    data::{Sample, StaticSampleSource},
    init::WeightInitializer,
    neural::{trainer::Trainer, Layer, LayerChain},
};

fn small_chain() -> LayerChain {
    LayerChain::new(vec![
        Layer::passthrough(3),
        Layer::fully_connected(3, 10),
        Layer::fully_connected_output(10, 2),
    ])
}

fn medium_chain() -> LayerChain {
    LayerChain::new(vec![
        Layer::passthrough(3),
        Layer::fully_connected(3, 20),
        Layer::fully_connected(20, 20),
        Layer::fully_connected(20, 20),
        Layer::fully_connected_output(20, 2),
    ])
}

fn samples(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let x = (i % 10) as f64 / 10.0;
            Sample::new(vec![x, 1.0 - x, 0.5], vec![x, 1.0 - x])
        })
        .collect()
}

fn trained(chain: LayerChain) -> Trainer<StaticSampleSource> {
    let source = StaticSampleSource::new(samples(1)).unwrap();
    let mut trainer = Trainer::new(chain, source)
        .unwrap()
        .with_initializer(WeightInitializer::from_seed(42));
    trainer.train().unwrap();
    trainer
}

fn forward(trainer: &Trainer<StaticSampleSource>, samples: &[Sample]) {
    for sample in samples {
        assert!(trainer.forward_prop(sample).is_ok());
    }
}

fn sweep(chain: LayerChain, samples: Vec<Sample>) {
    let source = StaticSampleSource::new(samples).unwrap();
    let mut trainer = Trainer::new(chain, source)
        .unwrap()
        .with_initializer(WeightInitializer::from_seed(42));
    assert!(trainer.train().is_ok());
}

fn bench_forward(c: &mut Criterion) {
    let small = trained(small_chain());
    let medium = trained(medium_chain());

    let input_small = samples(10);
    let input_medium = samples(1_000);

    c.bench_function("forward small 10 samples", |b| {
        b.iter(|| forward(black_box(&small), black_box(&input_small)))
    });
    c.bench_function("forward small 1,000 samples", |b| {
        b.iter(|| forward(black_box(&small), black_box(&input_medium)))
    });

    c.bench_function("forward medium 10 samples", |b| {
        b.iter(|| forward(black_box(&medium), black_box(&input_small)))
    });
    c.bench_function("forward medium 1,000 samples", |b| {
        b.iter(|| forward(black_box(&medium), black_box(&input_medium)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep small 1,000 samples", |b| {
        b.iter(|| sweep(black_box(small_chain()), black_box(samples(1_000))))
    });
    c.bench_function("sweep medium 1,000 samples", |b| {
        b.iter(|| sweep(black_box(medium_chain()), black_box(samples(1_000))))
    });
}

criterion_group!(benches, bench_forward, bench_sweep);
criterion_main!(benches);
