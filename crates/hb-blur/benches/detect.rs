use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hb_blur::{BlurConfig, analyze};
use hb_core::Image;

fn textured_u8(width: usize, height: usize) -> Image<u8> {
    let mut data = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        data.push(((i * 31) % 251) as u8);
    }
    Image::from_vec(width, height, data).expect("valid image")
}

fn bench_analyze_u8(c: &mut Criterion) {
    let img = textured_u8(1280, 1024);
    let view = img.as_view();
    let cfg = BlurConfig::default();

    c.bench_function("haar_blur_analyze_u8_1280x1024", |b| {
        b.iter(|| {
            let report = analyze(black_box(&view), black_box(&cfg));
            black_box(report.is_ok());
        });
    });
}

criterion_group!(benches, bench_analyze_u8);
criterion_main!(benches);
