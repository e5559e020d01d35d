use art_synth::palette;
use art_synth::prelude::*;
use art_synth_examples::{init_tracing, write_svg_file};

/// Sweep one GRID composition across every shipped palette.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let seed = 4711;
    for entry in palette::ALL {
        let request = RenderRequest::new("GRID", entry.id, seed).with_density(0.65);
        let markup = render_to_string(&request)
            .ok_or_else(|| anyhow::anyhow!("GRID did not render"))?;
        write_svg_file(
            format!("palette-out/grid-{}.svg", entry.id.to_lowercase()),
            &markup,
        )?;
    }

    Ok(())
}
