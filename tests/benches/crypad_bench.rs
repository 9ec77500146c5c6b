use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crypad_random::FortunaRng;
use crypad_symmetric::{AeadConfig, AeadMode, KdfScheme, PasswordBox};
use crypad_tests::fixtures::seeded_generator;
use rand::RngCore;

fn bench_password_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("PasswordBox");
    group.sample_size(20);

    for mode in [AeadMode::Ocb, AeadMode::Ccm] {
        let pad = PasswordBox::new(AeadConfig::new(mode), KdfScheme::Legacy);
        let (mut generator, _) = seeded_generator(1);
        let note = vec![0x61u8; 1024];
        let blob = pad
            .seal("password", &note, b"", &mut FortunaRng::new(&mut generator))
            .unwrap();

        group.bench_function(BenchmarkId::new("seal", mode.name()), |b| {
            b.iter(|| {
                let mut rng = FortunaRng::new(&mut generator);
                pad.seal("password", &note, b"", &mut rng).unwrap()
            });
        });
        group.bench_function(BenchmarkId::new("open", mode.name()), |b| {
            b.iter(|| pad.open("password", &blob, b"").unwrap());
        });
    }

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fortuna");

    for size in [16usize, 1024, 65536] {
        let (mut generator, _) = seeded_generator(2);
        let mut buf = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("fill_bytes", size), &size, |b, _| {
            b.iter(|| FortunaRng::new(&mut generator).fill_bytes(&mut buf));
        });
    }

    let (mut generator, _) = seeded_generator(3);
    group.bench_function("add_entropy", |b| {
        let mut tick = 0u32;
        b.iter(|| {
            tick = tick.wrapping_add(1);
            generator.add_entropy(tick, Some(2), Some("bench"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_password_box, bench_generator);
criterion_main!(benches);
