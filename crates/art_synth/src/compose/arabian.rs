//! ARABIAN_GEOMETRIC archetype: star lattices, triangle tilings, medallions.
use glam::Vec2;
use tracing::debug;

use super::{background, random_anchor, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::color::pick_weighted;
use crate::palette::Palette;
use crate::rng::{rand01, uniform, uniform_int};
use crate::scene::{Element, Paint};
use crate::shape;
use crate::spatial::Bounds;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 2);
    debug!(strategy, "arabian-geometric strategy");

    match strategy {
        0 => star_lattice(ctx, palette, density, &mut out),
        1 => tiling_bands(ctx, palette, density, &mut out),
        _ => medallion(ctx, palette, density, &mut out),
    }

    lattice_line_detail(ctx, palette, density, &mut out);
    corner_dot_detail(ctx, palette, density, &mut out);

    let anchor = random_anchor(ctx);
    out.extend(signal_accent(ctx, anchor));
    out
}

/// Checkerboard of eight-point stars and hexagon counters.
fn star_lattice(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let per_side = 3 + scaled_count(density, 0, 2);
    let cell = ctx.extent / per_side as f32;
    let outer = cell.min_element() * 0.36;
    let inner = outer * uniform(&mut ctx.rng, 0.38, 0.5);

    for row in 0..per_side {
        for col in 0..per_side {
            let center = Vec2::new(
                (col as f32 + 0.5) * cell.x,
                (row as f32 + 0.5) * cell.y,
            );
            let color = palette.foreground[(row + col) % palette.foreground.len()];
            if (row + col) % 2 == 0 {
                let turn = if (row / 2 + col / 2) % 2 == 0 { 0.0 } else { 22.5 };
                out.push(shape::star(
                    center,
                    8,
                    outer,
                    inner,
                    turn,
                    Paint::fill(color).with_opacity(0.92),
                ));
            } else {
                out.push(shape::regular_polygon(
                    center,
                    6,
                    outer * 0.55,
                    0.0,
                    Paint::fill(color).with_opacity(0.85),
                ));
            }
            ctx.index.insert(Bounds::of_circle(center, outer));
        }
    }
}

/// Horizontal bands of alternating up/down triangles.
fn tiling_bands(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let bands = scaled_count(density, 4, 3);
    let band_height = ctx.extent.y / (bands as f32 + 1.0);
    let tri_width = uniform(&mut ctx.rng, 34.0, 56.0);
    let columns = (ctx.extent.x / tri_width) as usize;
    let radius = band_height.min(tri_width) * 0.52;

    for band in 0..bands {
        let y = band_height * (band as f32 + 1.0);
        let color = palette.foreground[band % palette.foreground.len()];
        for col in 0..columns {
            let x = tri_width * (col as f32 + 0.5);
            let up = (band + col) % 2 == 0;
            out.push(shape::triangle(
                Vec2::new(x, y),
                radius,
                if up { 0.0 } else { 180.0 },
                Paint::fill(color).with_opacity(0.9),
            ));
        }
        let mut separator = shape::line(
            Vec2::new(0.0, y + band_height * 0.5),
            Vec2::new(ctx.extent.x, y + band_height * 0.5),
            palette.ink,
            1.6,
        );
        separator.paint.opacity = 0.6;
        out.push(separator);
        ctx.index.insert(Bounds::of_rect(
            Vec2::new(0.0, y - radius),
            Vec2::new(ctx.extent.x, radius * 2.0),
        ));
    }
}

/// Central star medallion with concentric rings and orbiting dots.
fn medallion(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let center = ctx.extent * 0.5;
    let outer = ctx.extent.x * uniform(&mut ctx.rng, 0.26, 0.32);

    out.push(shape::star(
        center,
        12,
        outer,
        outer * 0.55,
        0.0,
        Paint::fill(palette.foreground[0]).with_opacity(0.94),
    ));
    out.push(shape::star(
        center,
        12,
        outer * 0.62,
        outer * 0.32,
        15.0,
        Paint::fill(palette.foreground[1 % palette.foreground.len()]).with_opacity(0.92),
    ));
    ctx.index.insert(Bounds::of_circle(center, outer));

    let rings = scaled_count(density, 2, 3);
    for ring in 0..rings {
        out.push(shape::circle_outline(
            center,
            outer * (1.12 + 0.14 * ring as f32),
            palette.ink,
            uniform(&mut ctx.rng, 1.4, 2.6),
        ));
    }

    let orbit = outer * (1.12 + 0.14 * rings as f32);
    let satellites = scaled_count(density, 8, 8);
    for i in 0..satellites {
        let angle = std::f32::consts::TAU * i as f32 / satellites as f32;
        let pos = center + Vec2::from_angle(angle) * orbit;
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        out.push(shape::dot(pos, uniform(&mut ctx.rng, 3.0, 6.0), color));
    }

    // Quarter-disc corner ornaments, legs hugging the canvas edges.
    let corner_radius = ctx.extent.x * 0.12;
    let corner_color = palette.foreground[palette.foreground.len() - 1];
    let corners = [
        (Vec2::ZERO, 0.0),
        (Vec2::new(ctx.extent.x, 0.0), 90.0),
        (ctx.extent, 180.0),
        (Vec2::new(0.0, ctx.extent.y), 270.0),
    ];
    for (corner, turn) in corners {
        out.push(shape::quarter_circle(
            corner,
            corner_radius,
            turn,
            Paint::fill(corner_color).with_opacity(0.8),
        ));
    }
}

/// Fine diagonal lattice lines across the canvas. Gated by density and a
/// boolean.
fn lattice_line_detail(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
) {
    let gate = rand01(&mut ctx.rng);
    if density.clamp(0.0, 1.0) < 0.5 || gate >= 0.5 {
        return;
    }
    let step = ctx.extent.x / 4.0;
    for i in 1..4 {
        let x = step * i as f32;
        let mut a = shape::line(
            Vec2::new(x, 0.0),
            Vec2::new(0.0, x),
            palette.ink,
            1.0,
        );
        a.paint.opacity = 0.4;
        out.push(a);
        let mut b = shape::line(
            Vec2::new(ctx.extent.x - x, ctx.extent.y),
            Vec2::new(ctx.extent.x, ctx.extent.y - x),
            palette.ink,
            1.0,
        );
        b.paint.opacity = 0.4;
        out.push(b);
    }
}

/// Small ink dots tucked into corners, gated per corner.
fn corner_dot_detail(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
) {
    let threshold = 0.15 + 0.4 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, 4);
    let inset = 18.0;
    let corners = [
        Vec2::splat(inset),
        Vec2::new(ctx.extent.x - inset, inset),
        Vec2::new(inset, ctx.extent.y - inset),
        Vec2::new(ctx.extent.x - inset, ctx.extent.y - inset),
    ];
    for (corner, gate) in corners.into_iter().zip(gates) {
        if gate < threshold {
            out.push(shape::dot(corner, 2.4, palette.ink));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::scene::Shape;

    #[test]
    fn lattice_or_tiling_fills_the_canvas() {
        let palette = palette::resolve("DESERT_DUSK");
        for seed in 0..12 {
            let mut ctx = RenderContext::new(seed);
            let elements = compose(&mut ctx, palette, 0.5);
            let polygons = elements
                .iter()
                .filter(|e| matches!(e.shape, Shape::Polygon { .. } | Shape::Path { .. }))
                .count();
            assert!(polygons >= 2, "seed {seed}: {polygons} polygons");
        }
    }

    #[test]
    fn medallion_strategy_rings_are_concentric() {
        let palette = palette::resolve(palette::DEFAULT_PALETTE_ID);
        for seed in 0..48 {
            let mut ctx = RenderContext::new(seed);
            let center = ctx.extent * 0.5;
            let elements = compose(&mut ctx, palette, 0.5);
            let ring_centers: Vec<Vec2> = elements
                .iter()
                .filter_map(|e| match (&e.shape, &e.paint.stroke) {
                    (Shape::Circle { center, .. }, Some(_)) => Some(*center),
                    _ => None,
                })
                .collect();
            if ring_centers.len() >= 2 && ring_centers.iter().all(|c| *c == center) {
                return;
            }
        }
        panic!("no seed produced the medallion strategy in 48 tries");
    }
}
