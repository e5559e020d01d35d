use std::hint::black_box;

use art_synth::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_composers(c: &mut Criterion) {
    let palette = art_synth::palette::resolve("CLASSIC_BAUHAUS");
    let mut group = c.benchmark_group("compose");
    for archetype in Archetype::ALL {
        group.bench_function(archetype.tag(), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut ctx = RenderContext::new(seed);
                black_box(art_synth::compose::compose(
                    archetype,
                    &mut ctx,
                    palette,
                    0.5,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_composers);
criterion_main!(benches);
