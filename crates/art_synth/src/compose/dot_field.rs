//! DOT_FIELD archetype: lattices of dots thinned or modulated by the noise
//! field.
//!
//! Gating here is either a pure function of density (lattice pitch, row
//! count) or evaluated against the noise field / pre-rolled gate values, so
//! for a fixed seed the kept-dot count never decreases as density rises.
use glam::Vec2;
use tracing::debug;

use super::{background, random_anchor, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::color::{pick_spatial, pick_weighted};
use crate::palette::Palette;
use crate::rng::uniform_int;
use crate::scene::Element;
use crate::shape;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 3);
    debug!(strategy, "dot-field strategy");

    match strategy {
        0 => uniform_lattice(ctx, palette, density, &mut out),
        1 => noise_thinned(ctx, palette, density, &mut out),
        2 => radial_falloff(ctx, palette, density, &mut out),
        _ => drifted_rows(ctx, palette, density, &mut out),
    }

    let anchor = random_anchor(ctx);
    out.extend(signal_accent(ctx, anchor));
    out
}

/// Full lattice; density tightens the pitch.
fn uniform_lattice(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let d = density.clamp(0.0, 1.0);
    let pitch = 64.0 - 36.0 * d;
    let cols = (ctx.extent.x / pitch) as usize;
    let rows = (ctx.extent.y / pitch) as usize;
    let origin = (ctx.extent - Vec2::splat(pitch) * (cols.max(1) - 1) as f32) * 0.5;

    for row in 0..rows {
        for col in 0..cols {
            let base = origin + Vec2::new(col as f32, row as f32) * pitch;
            let jitter = Vec2::new(
                ctx.noise.sample(base.x * 0.02, base.y * 0.02),
                ctx.noise.sample(base.x * 0.02 + 51.3, base.y * 0.02 + 17.7),
            ) * pitch
                * 0.1;
            let center = base + jitter;
            let radius = pitch * (0.13 + 0.1 * ctx.noise.sample01(base.x * 0.008, base.y * 0.008));
            let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
            out.push(shape::dot(center, radius, color));
        }
    }
}

/// Fixed lattice thinned by the noise field alone: the kept set at a lower
/// density is a subset of the kept set at a higher one.
fn noise_thinned(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let pitch = 34.0;
    let threshold = 0.22 + 0.62 * density.clamp(0.0, 1.0);
    let cols = (ctx.extent.x / pitch) as usize;
    let rows = (ctx.extent.y / pitch) as usize;
    let origin = Vec2::splat(pitch * 0.5);

    for row in 0..rows {
        for col in 0..cols {
            let center = origin + Vec2::new(col as f32, row as f32) * pitch;
            let sample = ctx.noise.sample01(center.x * 0.02, center.y * 0.02);
            if sample >= threshold {
                continue;
            }
            let radius = pitch * (0.1 + 0.16 * (1.0 - sample));
            let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
            out.push(shape::dot(center, radius, color));
        }
    }
}

/// Dots thinning with distance from a golden focus; gates pre-rolled so the
/// kept set grows monotonically with density.
fn radial_falloff(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let focus = random_anchor(ctx);
    let pitch = 36.0;
    let cols = (ctx.extent.x / pitch) as usize;
    let rows = (ctx.extent.y / pitch) as usize;
    let origin = Vec2::splat(pitch * 0.5);
    let reach = ctx.extent.x * 0.75;
    let strength = 0.3 + 0.65 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, cols * rows);

    for row in 0..rows {
        for col in 0..cols {
            let center = origin + Vec2::new(col as f32, row as f32) * pitch;
            let falloff = (1.0 - center.distance(focus) / reach).clamp(0.0, 1.0);
            if gates[row * cols + col] >= falloff * strength {
                continue;
            }
            let radius = 2.6 + falloff * 8.0;
            let color = pick_spatial(&mut ctx.rng, palette.foreground, center, ctx.extent);
            out.push(shape::dot(center, radius, color));
        }
    }
}

/// Rows of dots drifting horizontally with the noise field.
fn drifted_rows(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let rows = scaled_count(density, 10, 8);
    let per_row = scaled_count(density, 10, 6);
    let pitch_y = ctx.extent.y / (rows + 1) as f32;
    let pitch_x = ctx.extent.x / (per_row + 1) as f32;

    for row in 0..rows {
        let y = pitch_y * (row + 1) as f32;
        for i in 0..per_row {
            let x = pitch_x * (i + 1) as f32;
            let drift = ctx.noise.sample(x * 0.015, y * 0.015) * pitch_x * 0.8;
            let center = Vec2::new(x + drift, y);
            let radius = 2.4 + ctx.noise.sample01(x * 0.01, y * 0.01) * 3.2;
            let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
            out.push(shape::dot(center, radius, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{self, SIGNAL};
    use crate::scene::{Fill, Shape};

    fn dot_count(elements: &[Element]) -> usize {
        elements
            .iter()
            .filter(|e| {
                matches!(e.shape, Shape::Circle { .. })
                    && !matches!(e.paint.fill, Some(Fill::Solid(c)) if c == SIGNAL)
            })
            .count()
    }

    #[test]
    fn dot_count_never_decreases_with_density() {
        let palette = palette::resolve(palette::DEFAULT_PALETTE_ID);
        // Cover every strategy across seeds; all four are monotone by
        // construction.
        for seed in 0..24 {
            let mut previous = 0;
            for density in [0.1, 0.4, 0.7, 1.0] {
                let mut ctx = RenderContext::new(seed);
                let elements = compose(&mut ctx, palette, density);
                let count = dot_count(&elements);
                assert!(
                    count >= previous,
                    "seed {seed} density {density}: {count} < {previous}"
                );
                previous = count;
            }
        }
    }

    #[test]
    fn fields_contain_many_dots_at_mid_density() {
        let palette = palette::resolve("NORDIC_FROST");
        for seed in [5, 15, 25, 35] {
            let mut ctx = RenderContext::new(seed);
            let elements = compose(&mut ctx, palette, 0.5);
            assert!(dot_count(&elements) > 20, "seed {seed}");
        }
    }
}
