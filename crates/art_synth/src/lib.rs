#![forbid(unsafe_code)]
//! art_synth: deterministic procedural vector-art composition.
//!
//! Modules:
//! - rng, noise: seeded randomness and gradient-noise perturbation
//! - palette, color: static palette table and color-selection strategies
//! - geometry, spatial: golden-section anchors and the placement hash grid
//! - shape: exact and organic vector primitives
//! - compose: the seven archetype composers
//! - render, reveal: request -> scene -> SVG, plus the staged-reveal timeline
//!
//! The same `{archetype, palette, seed, density}` request always produces a
//! byte-identical output document.
pub mod color;
pub mod compose;
pub mod error;
pub mod geometry;
pub mod noise;
pub mod palette;
pub mod render;
pub mod reveal;
pub mod rng;
pub mod scene;
pub mod shape;
pub mod spatial;

/// Convenient re-exports for common types. Import with `use art_synth::prelude::*;`.
pub mod prelude {
    pub use crate::compose::{Archetype, RenderContext};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{canvas_extent, GoldenAnchors, CANVAS};
    pub use crate::noise::NoiseField;
    pub use crate::palette::{Palette, Rgb, SIGNAL};
    pub use crate::render::{
        render, render_animated, render_to_string, RenderRequest, DEFAULT_DENSITY,
    };
    pub use crate::reveal::{Entrance, RevealController, RevealStep};
    pub use crate::rng::{pick, rand01, shuffle, uniform, uniform_int, SeedRng};
    pub use crate::scene::{Element, Paint, Scene, Shape};
    pub use crate::spatial::{Bounds, SpatialHashGrid};
}
