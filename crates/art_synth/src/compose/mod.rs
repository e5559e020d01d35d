//! Archetype composers and their shared per-render context.
//!
//! One composer per archetype. Each is a pure function of the context,
//! palette and density: background first, then one draw picks an internal
//! strategy (macro-structure), then a bounded number of major shapes placed
//! via golden anchors or the sparse-region heuristic, then exactly one
//! signal accent, then density-gated fine details.
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::RngCore;

use crate::error::Error;
use crate::geometry::{canvas_extent, GoldenAnchors};
use crate::noise::NoiseField;
use crate::palette::{Palette, SIGNAL};
use crate::rng::{pick, rand01, uniform, SeedRng};
use crate::scene::{DefIds, Element, Paint};
use crate::shape;
use crate::spatial::{Bounds, SpatialHashGrid};

mod arabian;
mod color_study;
mod constructivist;
mod dot_field;
mod free_form;
mod grid;
mod repetition;

/// The seven composition archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    FreeForm,
    Grid,
    Repetition,
    Constructivist,
    ColorStudy,
    DotField,
    ArabianGeometric,
}

impl Archetype {
    pub const ALL: [Archetype; 7] = [
        Archetype::FreeForm,
        Archetype::Grid,
        Archetype::Repetition,
        Archetype::Constructivist,
        Archetype::ColorStudy,
        Archetype::DotField,
        Archetype::ArabianGeometric,
    ];

    /// Catalog tag for this archetype.
    pub fn tag(&self) -> &'static str {
        match self {
            Archetype::FreeForm => "FREE_FORM",
            Archetype::Grid => "GRID",
            Archetype::Repetition => "REPETITION",
            Archetype::Constructivist => "CONSTRUCTIVIST",
            Archetype::ColorStudy => "COLOR_STUDY",
            Archetype::DotField => "DOT_FIELD",
            Archetype::ArabianGeometric => "ARABIAN_GEOMETRIC",
        }
    }

    /// Parse a catalog tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Archetype> {
        Self::ALL.into_iter().find(|a| a.tag() == tag)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Archetype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownArchetype { tag: s.to_owned() })
    }
}

/// Per-render state passed by reference into composers and factories.
///
/// Arena-style ownership: one context per render call, owned exclusively for
/// its duration, discarded afterwards. Nothing here outlives the render.
pub struct RenderContext {
    pub rng: SeedRng,
    pub noise: NoiseField,
    pub index: SpatialHashGrid,
    pub extent: Vec2,
    pub ids: DefIds,
}

impl RenderContext {
    /// Initialize per-render state from a seed.
    ///
    /// The noise permutation table consumes the first 256 draws of the
    /// stream; everything after that belongs to the composer.
    pub fn new(seed: i32) -> Self {
        let mut rng = SeedRng::new(seed);
        let noise = NoiseField::build(&mut rng);
        Self {
            rng,
            noise,
            index: SpatialHashGrid::default(),
            extent: canvas_extent(),
            ids: DefIds::for_seed(seed),
        }
    }
}

/// Compose the full scene body for `archetype`.
pub fn compose(
    archetype: Archetype,
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
) -> Vec<Element> {
    match archetype {
        Archetype::FreeForm => free_form::compose(ctx, palette, density),
        Archetype::Grid => grid::compose(ctx, palette, density),
        Archetype::Repetition => repetition::compose(ctx, palette, density),
        Archetype::Constructivist => constructivist::compose(ctx, palette, density),
        Archetype::ColorStudy => color_study::compose(ctx, palette, density),
        Archetype::DotField => dot_field::compose(ctx, palette, density),
        Archetype::ArabianGeometric => arabian::compose(ctx, palette, density),
    }
}

/// Full-canvas background rectangle in the palette background color.
pub(crate) fn background(extent: Vec2, palette: &Palette) -> Element {
    shape::rect(Vec2::ZERO, extent, Paint::fill(palette.background))
}

/// The cross-archetype signature: one small signal-colored circular accent
/// near `anchor`, soft halo underneath, stronger drop shadow than ordinary
/// shapes.
pub(crate) fn signal_accent(ctx: &mut RenderContext, anchor: Vec2) -> Vec<Element> {
    let radius = uniform(&mut ctx.rng, 6.0, 11.0);
    let jitter = Vec2::new(
        uniform(&mut ctx.rng, -14.0, 14.0),
        uniform(&mut ctx.rng, -14.0, 14.0),
    );
    let margin = Vec2::splat(radius * 3.0);
    let center = (anchor + jitter).clamp(margin, ctx.extent - margin);
    ctx.index.insert(Bounds::of_circle(center, radius * 2.4));
    vec![
        shape::circle(center, radius * 2.4, Paint::fill(SIGNAL).with_opacity(0.16)),
        shape::circle(
            center,
            radius,
            Paint::fill(SIGNAL).with_filter(ctx.ids.accent_shadow.clone()),
        ),
    ]
}

/// One of the five golden anchors, picked at random.
pub(crate) fn random_anchor(ctx: &mut RenderContext) -> Vec2 {
    let anchors = GoldenAnchors::of(ctx.extent);
    let all = anchors.all();
    pick(&mut ctx.rng, &all).copied().unwrap_or(anchors.center)
}

/// Element count scaled by density: `base` plus up to `extra`, monotonic in
/// density.
pub(crate) fn scaled_count(density: f32, base: usize, extra: usize) -> usize {
    base + (density.clamp(0.0, 1.0) * extra as f32).round() as usize
}

/// Pre-roll `n` gate values before any dependent construction.
///
/// Gating every candidate against values drawn up front keeps gated counts
/// monotonic in density for a fixed seed: the rolls cannot shift when a
/// passing candidate consumes extra draws during construction.
pub(crate) fn roll_gates<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Vec<f32> {
    (0..n).map(|_| rand01(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn every_tag_roundtrips() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::parse(archetype.tag()), Some(archetype));
            assert_eq!(archetype.tag().parse::<Archetype>().ok(), Some(archetype));
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert_eq!(Archetype::parse("NOT_REAL"), None);
        let err = "NOT_REAL".parse::<Archetype>().unwrap_err();
        assert!(matches!(err, Error::UnknownArchetype { ref tag } if tag == "NOT_REAL"));
    }

    #[test]
    fn every_composer_places_exactly_one_accent() {
        let palette = palette::resolve(palette::DEFAULT_PALETTE_ID);
        for archetype in Archetype::ALL {
            for seed in [1, 77, -36787] {
                let mut ctx = RenderContext::new(seed);
                let elements = compose(archetype, &mut ctx, palette, 0.5);
                let accents = elements
                    .iter()
                    .filter(|e| e.paint.filter.as_deref() == Some(ctx.ids.accent_shadow.as_str()))
                    .count();
                assert_eq!(accents, 1, "{archetype} seed {seed}");
            }
        }
    }

    #[test]
    fn composers_are_deterministic() {
        let palette = palette::resolve("NORDIC_FROST");
        for archetype in Archetype::ALL {
            let mut ctx_a = RenderContext::new(4242);
            let mut ctx_b = RenderContext::new(4242);
            let a = compose(archetype, &mut ctx_a, palette, 0.6);
            let b = compose(archetype, &mut ctx_b, palette, 0.6);
            assert_eq!(a, b, "{archetype}");
        }
    }

    #[test]
    fn background_is_first_and_fills_canvas() {
        let palette = palette::resolve("WEIMAR_PRINT");
        for archetype in Archetype::ALL {
            let mut ctx = RenderContext::new(9);
            let elements = compose(archetype, &mut ctx, palette, 0.5);
            let first = &elements[0];
            match &first.shape {
                crate::scene::Shape::Rect { pos, size, .. } => {
                    assert_eq!(*pos, Vec2::ZERO);
                    assert_eq!(*size, ctx.extent);
                }
                other => panic!("{archetype}: background is {other:?}"),
            }
        }
    }

    #[test]
    fn out_of_range_density_still_composes() {
        let palette = palette::resolve(palette::DEFAULT_PALETTE_ID);
        for archetype in Archetype::ALL {
            for density in [-1.0, 0.0, 1.0, 3.5] {
                let mut ctx = RenderContext::new(11);
                let elements = compose(archetype, &mut ctx, palette, density);
                assert!(elements.len() > 2, "{archetype} density {density}");
            }
        }
    }
}
