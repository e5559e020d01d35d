use std::hint::black_box;

use art_synth::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_render_to_string(c: &mut Criterion) {
    c.bench_function("render_to_string/DOT_FIELD", |b| {
        let request = RenderRequest::new("DOT_FIELD", "NORDIC_FROST", 36787);
        b.iter(|| black_box(render_to_string(&request)));
    });

    c.bench_function("render_animated_schedule", |b| {
        let request = RenderRequest::new("FREE_FORM", "CLASSIC_BAUHAUS", 99);
        b.iter(|| {
            let mut controller = render_animated(&request).expect("renders");
            controller.play();
            black_box(controller.steps().len())
        });
    });
}

criterion_group!(benches, bench_render_to_string);
criterion_main!(benches);
