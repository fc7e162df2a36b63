use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use detpost_dnn::{ModelVariant, PostProcessorBuilder};
use detpost_geometry::ImageSize;

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    let num_classes = 80;
    let row_width = num_classes + 4;
    let image_size = ImageSize {
        width: 1920,
        height: 1080,
    };

    let mut rng = rand::rng();

    for num_candidates in [840usize, 8400].iter() {
        // channel-major buffer the way a YOLO head emits it
        let output: Vec<f32> = (0..row_width * num_candidates)
            .map(|_| rng.random_range(0.0f32..1.0))
            .collect();

        let labels = (0..num_classes).map(|i| format!("class_{i}")).collect();
        let processor = PostProcessorBuilder::new(ModelVariant::Yolo, labels)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("yolo", num_candidates),
            &output,
            |b, output| {
                b.iter(|| {
                    let detections = processor
                        .detect(
                            black_box(output),
                            [row_width, *num_candidates],
                            image_size,
                            0.25,
                            0.5,
                        )
                        .unwrap();
                    black_box(detections)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
