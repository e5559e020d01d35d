use art_synth::prelude::*;
use art_synth_examples::{init_tracing, write_svg_file};

/// Render every archetype at two seeds into `gallery-out/`.
fn main() -> anyhow::Result<()> {
    init_tracing();

    for archetype in Archetype::ALL {
        for seed in [36787, 90210] {
            let request = RenderRequest::new(archetype.tag(), "CLASSIC_BAUHAUS", seed);
            let markup = render_to_string(&request)
                .ok_or_else(|| anyhow::anyhow!("archetype {} did not render", archetype))?;
            let path = format!("gallery-out/{}-{}.svg", archetype.tag().to_lowercase(), seed);
            write_svg_file(path, &markup)?;
        }
    }

    Ok(())
}
