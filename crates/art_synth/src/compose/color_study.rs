//! COLOR_STUDY archetype: nested concentric regions in strictly decreasing
//! sizes.
//!
//! Every strategy is a nested sequence (squares, circles, or diamonds), so a
//! color study always reads as regions shrinking toward the center, closed
//! by the signal accent at the composition centroid.
use glam::Vec2;
use tracing::debug;

use super::{background, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::geometry::GoldenAnchors;
use crate::palette::{Palette, Rgb};
use crate::rng::{rand01, shuffle, uniform, uniform_int};
use crate::scene::{Element, Paint};
use crate::shape;
use crate::spatial::Bounds;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 2);
    debug!(strategy, "color-study strategy");

    let center = GoldenAnchors::of(ctx.extent).center;
    let rings = scaled_count(density, 4, 3);
    let shrink = uniform(&mut ctx.rng, 0.68, 0.78);
    let mut size = ctx.extent.x * uniform(&mut ctx.rng, 0.78, 0.86);

    let mut order: Vec<Rgb> = palette.foreground.to_vec();
    shuffle(&mut ctx.rng, &mut order);

    for ring in 0..rings {
        let color = order[ring % order.len()];
        let paint = Paint::fill(color).with_opacity(0.94);
        let element = match strategy {
            0 => shape::rect(center - Vec2::splat(size * 0.5), Vec2::splat(size), paint),
            1 => shape::circle(center, size * 0.5, paint),
            _ => shape::regular_polygon(center, 4, size * 0.5, 0.0, paint),
        };
        out.push(element);
        ctx.index.insert(Bounds::of_circle(center, size * 0.5));
        size *= shrink;
    }

    ring_outline_detail(ctx, palette, density, strategy, center, size, &mut out);
    corner_tick_detail(ctx, palette, density, &mut out);

    out.extend(signal_accent(ctx, center));
    out
}

/// One thin outline echoing the innermost region. Stroke-only, so it never
/// reads as another nested fill. Gated by density and a boolean.
fn ring_outline_detail(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    strategy: i32,
    center: Vec2,
    inner_size: f32,
    out: &mut Vec<Element>,
) {
    let gate = rand01(&mut ctx.rng);
    if density.clamp(0.0, 1.0) < 0.4 || gate >= 0.6 {
        return;
    }
    let size = inner_size * 0.72;
    let width = 1.4;
    let element = match strategy {
        0 => shape::rect_outline(
            center - Vec2::splat(size * 0.5),
            Vec2::splat(size),
            palette.ink,
            width,
        ),
        1 => shape::circle_outline(center, size * 0.5, palette.ink, width),
        _ => shape::regular_polygon(center, 4, size * 0.5, 0.0, Paint::stroke(palette.ink, width)),
    };
    out.push(element);
}

/// Ink ticks near the canvas corners, gated per corner.
fn corner_tick_detail(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
) {
    let threshold = 0.2 + 0.4 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, 4);
    let inset = 26.0;
    let corners = [
        Vec2::splat(inset),
        Vec2::new(ctx.extent.x - inset, inset),
        Vec2::new(inset, ctx.extent.y - inset),
        Vec2::new(ctx.extent.x - inset, ctx.extent.y - inset),
    ];
    for (corner, gate) in corners.into_iter().zip(gates) {
        if gate < threshold {
            let length = uniform(&mut ctx.rng, 8.0, 16.0);
            let toward = (GoldenAnchors::of(ctx.extent).center - corner).normalize_or_zero();
            let mut tick = shape::line(corner, corner + toward * length, palette.ink, 1.6);
            tick.paint.opacity = 0.7;
            out.push(tick);
        }
    }
}
