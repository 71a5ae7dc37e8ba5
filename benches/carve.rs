use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use seamcarve::{compute_energy, remove_one_seam};

fn noise(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2_654_435_761).wrapping_add(y.wrapping_mul(40_503));
        Rgba([v as u8, (v >> 8) as u8, (v >> 16) as u8, 255])
    })
}

fn bench_carving(c: &mut Criterion) {
    let image = noise(320, 240);
    c.bench_function("energy 320x240", |b| b.iter(|| compute_energy(black_box(&image))));
    c.bench_function("one seam 320x240", |b| b.iter(|| remove_one_seam(black_box(&image))));
}

criterion_group!(benches, bench_carving);
criterion_main!(benches);
