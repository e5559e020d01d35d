//! Top-level render pipeline: request in, scene (or SVG string, or reveal
//! controller) out.
//!
//! The pipeline owns the per-render lifecycle: resolve palette and
//! archetype, build the [`RenderContext`], run the composer, then append the
//! fixed atmospheric overlay sequence. Re-rendering the same request is
//! idempotent; concurrent renders share nothing mutable.
use glam::Vec2;
use tracing::{info, warn};

use crate::compose::{compose, Archetype, RenderContext};
use crate::palette;
use crate::reveal::RevealController;
use crate::scene::{EffectDef, GradientStop, Paint, Scene};
use crate::shape;

/// Default density when a request leaves it unspecified.
pub const DEFAULT_DENSITY: f32 = 0.5;

/// Immutable render input.
///
/// `archetype` is a catalog tag (see [`Archetype`]); an unknown tag is the
/// engine's only reportable failure. An unknown `palette_id` silently
/// resolves to the default palette. `density` is expected in [0, 1] but is
/// never rejected: out-of-range values simply flow into clamped formulas.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRequest {
    pub archetype: String,
    pub palette_id: String,
    pub seed: i32,
    pub density: f32,
}

impl RenderRequest {
    pub fn new(archetype: impl Into<String>, palette_id: impl Into<String>, seed: i32) -> Self {
        Self {
            archetype: archetype.into(),
            palette_id: palette_id.into(),
            seed,
            density: DEFAULT_DENSITY,
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }
}

/// Render a request into a [`Scene`].
///
/// Returns `None` (with a diagnostic) only for an unknown archetype tag;
/// callers treat that as "nothing to mount".
pub fn render(request: &RenderRequest) -> Option<Scene> {
    let Some(archetype) = Archetype::parse(&request.archetype) else {
        warn!(tag = %request.archetype, "unknown archetype; nothing to render");
        return None;
    };
    let palette = palette::resolve(&request.palette_id);

    let mut ctx = RenderContext::new(request.seed);
    info!(
        archetype = %archetype,
        palette = palette.id,
        seed = request.seed,
        density = request.density,
        "composing scene"
    );

    let elements = compose(archetype, &mut ctx, palette, request.density);

    let mut scene = Scene::new(ctx.extent);
    push_effect_defs(&mut scene, &ctx, palette);
    for element in elements {
        scene.push(element);
    }
    scene.seal_body();
    push_overlays(&mut scene, &ctx);

    Some(scene)
}

/// Render a request straight to SVG markup.
pub fn render_to_string(request: &RenderRequest) -> Option<String> {
    render(request).map(|scene| scene.to_svg_string())
}

/// Render a request into a staged-reveal controller wrapping the scene.
pub fn render_animated(request: &RenderRequest) -> Option<RevealController> {
    render(request).map(|scene| RevealController::new(scene, request.seed))
}

/// Shared filters and gradients, defined once and referenced by id.
fn push_effect_defs(scene: &mut Scene, ctx: &RenderContext, palette: &palette::Palette) {
    scene.push_def(EffectDef::SoftShadow {
        id: ctx.ids.soft_shadow.clone(),
        dx: 0.0,
        dy: 2.0,
        blur: 3.0,
        color: palette.ink,
        opacity: 0.25,
    });
    scene.push_def(EffectDef::SoftShadow {
        id: ctx.ids.accent_shadow.clone(),
        dx: 0.0,
        dy: 3.0,
        blur: 5.0,
        color: palette.ink,
        opacity: 0.45,
    });
    scene.push_def(EffectDef::LinearGradient {
        id: ctx.ids.depth.clone(),
        from: GradientStop {
            color: palette::Rgb::WHITE,
            opacity: 0.1,
        },
        to: GradientStop {
            color: palette.ink,
            opacity: 0.16,
        },
        vertical: true,
    });
    scene.push_def(EffectDef::RadialGradient {
        id: ctx.ids.vignette.clone(),
        inner: GradientStop {
            color: palette.ink,
            opacity: 0.0,
        },
        outer: GradientStop {
            color: palette.ink,
            opacity: 0.2,
        },
    });
    scene.push_def(EffectDef::Grain {
        id: ctx.ids.grain.clone(),
        frequency: 0.9,
        octaves: 2,
    });
}

/// The fixed atmospheric overlay sequence: depth gradient, vignette, grain.
fn push_overlays(scene: &mut Scene, ctx: &RenderContext) {
    let full = |paint: Paint| shape::rect(Vec2::ZERO, ctx.extent, paint);
    scene.push(full(Paint::fill_def(ctx.ids.depth.clone())));
    scene.push(full(Paint::fill_def(ctx.ids.vignette.clone())));
    scene.push(full(
        Paint::fill(palette::Rgb::WHITE)
            .with_opacity(0.05)
            .with_filter(ctx.ids.grain.clone()),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::SIGNAL;
    use crate::scene::{Fill, Shape};

    #[test]
    fn identical_requests_render_byte_identical_documents() {
        let request = RenderRequest::new("FREE_FORM", "CLASSIC_BAUHAUS", 36787);
        let a = render_to_string(&request).expect("renders");
        let b = render_to_string(&request).expect("renders");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_seeds_render_distinct_documents() {
        for archetype in Archetype::ALL {
            let a = render_to_string(
                &RenderRequest::new(archetype.tag(), "CLASSIC_BAUHAUS", 1),
            )
            .expect("renders");
            let b = render_to_string(
                &RenderRequest::new(archetype.tag(), "CLASSIC_BAUHAUS", 2),
            )
            .expect("renders");
            assert_ne!(a, b, "{archetype}");
        }
    }

    #[test]
    fn unknown_archetype_returns_none() {
        let request = RenderRequest::new("NOT_REAL", "CLASSIC_BAUHAUS", 1);
        assert!(render(&request).is_none());
        assert!(render_to_string(&request).is_none());
        assert!(render_animated(&request).is_none());
    }

    #[test]
    fn unknown_palette_falls_back_to_default() {
        let request = RenderRequest::new("GRID", "NOT_A_PALETTE", 1);
        let scene = render(&request).expect("renders with default palette");
        let default = palette::resolve(palette::DEFAULT_PALETTE_ID);
        match &scene.elements[0].shape {
            Shape::Rect { size, .. } => assert_eq!(*size, scene.extent),
            other => panic!("background is {other:?}"),
        }
        assert_eq!(
            scene.elements[0].paint.fill,
            Some(Fill::Solid(default.background))
        );
    }

    #[test]
    fn overlays_are_appended_in_fixed_order() {
        let request = RenderRequest::new("DOT_FIELD", "RIVIERA_SUMMER", 5);
        let scene = render(&request).expect("renders");
        let overlays = &scene.elements[scene.overlay_from()..];
        assert_eq!(overlays.len(), 3);
        assert!(matches!(&overlays[0].paint.fill, Some(Fill::Def(id)) if id.ends_with("-depth")));
        assert!(
            matches!(&overlays[1].paint.fill, Some(Fill::Def(id)) if id.ends_with("-vignette"))
        );
        assert!(matches!(&overlays[2].paint.filter, Some(id) if id.ends_with("-grain")));
    }

    #[test]
    fn defs_are_defined_once_and_referenced() {
        let request = RenderRequest::new("CONSTRUCTIVIST", "WEIMAR_PRINT", 9);
        let scene = render(&request).expect("renders");
        assert_eq!(scene.defs.len(), 5);
        let mut ids: Vec<&str> = scene.defs.iter().map(|d| d.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        let markup = scene.to_svg_string();
        for id in ids {
            assert!(markup.contains(&format!("id=\"{id}\"")), "{id} defined");
        }
    }

    #[test]
    fn every_archetype_renders_with_one_signal_accent() {
        for archetype in Archetype::ALL {
            let request = RenderRequest::new(archetype.tag(), "GALLERY_NOIR", 77).with_density(0.8);
            let scene = render(&request).expect("renders");
            let accents = scene
                .elements
                .iter()
                .filter(|e| matches!(&e.paint.fill, Some(Fill::Solid(c)) if *c == SIGNAL))
                .count();
            // Halo plus accent dot.
            assert_eq!(accents, 2, "{archetype}");
        }
    }

    #[test]
    fn negative_seed_renders() {
        let request = RenderRequest::new("REPETITION", "TERRACOTTA_FIELD", -2_000_000_000);
        assert!(render(&request).is_some());
    }

    #[test]
    fn color_study_scenario_nests_decreasing_regions() {
        let request =
            RenderRequest::new("COLOR_STUDY", "CLASSIC_BAUHAUS", 36787).with_density(0.5);
        let scene = render(&request).expect("renders");

        let mut sizes = Vec::new();
        for element in &scene.elements[1..scene.overlay_from()] {
            let Some(Fill::Solid(color)) = &element.paint.fill else {
                continue;
            };
            if *color == SIGNAL {
                continue;
            }
            match &element.shape {
                Shape::Rect { size, .. } => sizes.push(size.x),
                Shape::Circle { radius, .. } => sizes.push(radius * 2.0),
                Shape::Polygon { points } => {
                    let center = scene.extent * 0.5;
                    let r = points
                        .iter()
                        .map(|p| p.distance(center))
                        .fold(0.0_f32, f32::max);
                    sizes.push(r * 2.0);
                }
                _ => {}
            }
        }
        assert!(sizes.len() >= 4);
        for pair in sizes.windows(2) {
            assert!(pair[0] > pair[1], "{pair:?} not strictly decreasing");
        }

        // The accent closes the body.
        let last = &scene.elements[scene.overlay_from() - 1];
        assert!(matches!(&last.paint.fill, Some(Fill::Solid(c)) if *c == SIGNAL));
    }
}
