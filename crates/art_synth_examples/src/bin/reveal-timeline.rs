use art_synth::prelude::*;
use art_synth_examples::init_tracing;
use tracing::info;

/// Drive the staged-reveal timeline tick by tick and log the reveal order.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let request = RenderRequest::new("CONSTRUCTIVIST", "RIVIERA_SUMMER", 1905);
    let mut controller =
        render_animated(&request).ok_or_else(|| anyhow::anyhow!("request did not render"))?;

    info!("animating {} elements", controller.element_count());
    controller.play();

    let tick_ms = 16.0;
    let mut elapsed = 0.0;
    let mut revealed = 0;
    while controller.is_playing() {
        controller.tick(tick_ms);
        elapsed += tick_ms;
        let now_visible = controller
            .scene()
            .revealable()
            .filter(|&i| controller.visible(i))
            .count();
        if now_visible > revealed {
            revealed = now_visible;
            info!("t={elapsed:6.0}ms revealed {revealed} elements");
        }
    }

    for step in controller.steps().iter().take(8) {
        info!(
            "element {} enters via {:?} at {:.0}ms over {:.0}ms",
            step.element, step.entrance, step.at_ms, step.duration_ms
        );
    }

    Ok(())
}
