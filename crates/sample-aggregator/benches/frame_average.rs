use adc_continuous::{AdcChannel, Frame, SampleRecord};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn frame_of(channel: u8, records: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(records * 2);
    for i in 0..records {
        let raw = ((i * 37) & 0x0FFF) as u16;
        bytes.extend_from_slice(&SampleRecord::encode(channel, raw));
    }
    bytes
}

fn bench_frame_average(c: &mut Criterion) {
    let matching = frame_of(7, 64);
    c.bench_function("frame_average_64_matching", |b| {
        b.iter(|| {
            sample_aggregator::frame_average(Frame::new(black_box(&matching)), AdcChannel(7))
        })
    });

    let foreign = frame_of(3, 64);
    c.bench_function("frame_average_64_foreign", |b| {
        b.iter(|| sample_aggregator::frame_average(Frame::new(black_box(&foreign)), AdcChannel(7)))
    });

    let large = frame_of(7, 2048);
    c.bench_function("frame_average_2048_matching", |b| {
        b.iter(|| sample_aggregator::frame_average(Frame::new(black_box(&large)), AdcChannel(7)))
    });
}

criterion_group!(benches, bench_frame_average);
criterion_main!(benches);
