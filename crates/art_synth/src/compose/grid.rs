//! GRID archetype: ruled cells, floating panels, systematic cell fills.
use glam::Vec2;
use tracing::debug;

use super::{background, random_anchor, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::color::pick_spatial;
use crate::geometry::GoldenAnchors;
use crate::palette::Palette;
use crate::rng::{rand01, uniform, uniform_int};
use crate::scene::{Element, Paint};
use crate::shape;
use crate::spatial::Bounds;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 2);
    debug!(strategy, "grid strategy");

    match strategy {
        0 => ruled_cells(ctx, palette, density, &mut out),
        1 => floating_panels(ctx, palette, density, &mut out),
        _ => shape_per_cell(ctx, palette, density, &mut out),
    }

    hatch_detail(ctx, palette, density, &mut out);

    let anchor = random_anchor(ctx);
    out.extend(signal_accent(ctx, anchor));
    out
}

/// Asymmetric cells ruled by the golden lines, some cells filled.
fn ruled_cells(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let anchors = GoldenAnchors::of(ctx.extent);
    let xs = [0.0, anchors.left_x, anchors.right_x, ctx.extent.x];
    let ys = [0.0, anchors.top_y, anchors.bottom_y, ctx.extent.y];

    let threshold = 0.25 + 0.5 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, 9);
    for row in 0..3 {
        for col in 0..3 {
            if gates[row * 3 + col] >= threshold {
                continue;
            }
            let pos = Vec2::new(xs[col], ys[row]);
            let size = Vec2::new(xs[col + 1] - xs[col], ys[row + 1] - ys[row]);
            let inset = uniform(&mut ctx.rng, 0.0, 7.0);
            let color = pick_spatial(
                &mut ctx.rng,
                palette.foreground,
                pos + size * 0.5,
                ctx.extent,
            );
            let opacity = uniform(&mut ctx.rng, 0.8, 0.95);
            out.push(shape::rect(
                pos + Vec2::splat(inset),
                size - Vec2::splat(inset * 2.0),
                Paint::fill(color).with_opacity(opacity),
            ));
            ctx.index.insert(Bounds::of_rect(pos, size));
        }
    }

    let rule_width = uniform(&mut ctx.rng, 2.0, 4.0);
    for &x in &xs[1..3] {
        out.push(shape::line(
            Vec2::new(x, 0.0),
            Vec2::new(x, ctx.extent.y),
            palette.ink,
            rule_width,
        ));
    }
    for &y in &ys[1..3] {
        out.push(shape::line(
            Vec2::new(0.0, y),
            Vec2::new(ctx.extent.x, y),
            palette.ink,
            rule_width,
        ));
    }
}

/// Tilted rectangles floating over the canvas, placed into sparse regions.
fn floating_panels(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
) {
    let count = scaled_count(density, 5, 6);
    let margin = Vec2::splat(64.0);
    for _ in 0..count {
        let center = ctx
            .index
            .sparsest_position(&mut ctx.rng, margin, ctx.extent - margin, 72.0, 8);
        if ctx.index.density(center, 56.0) > 4 {
            continue;
        }
        let size = Vec2::new(
            uniform(&mut ctx.rng, 42.0, 118.0),
            uniform(&mut ctx.rng, 42.0, 118.0),
        );
        let tilt = uniform(&mut ctx.rng, -18.0, 18.0);
        let color = pick_spatial(&mut ctx.rng, palette.foreground, center, ctx.extent);
        let opacity = uniform(&mut ctx.rng, 0.8, 0.95);
        let mut panel =
            shape::rotated_rect(center, size, tilt, Paint::fill(color).with_opacity(opacity));
        if rand01(&mut ctx.rng) < 0.5 {
            panel.paint.filter = Some(ctx.ids.soft_shadow.clone());
        }
        out.push(panel);
        ctx.index
            .insert(Bounds::of_rect(center - size * 0.5, size));
    }
}

/// Regular lattice with one inscribed shape per filled cell.
fn shape_per_cell(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let per_side = 3 + scaled_count(density, 0, 2);
    let cell = ctx.extent / per_side as f32;
    let threshold = 0.35 + 0.55 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, per_side * per_side);

    for row in 0..per_side {
        for col in 0..per_side {
            if gates[row * per_side + col] >= threshold {
                continue;
            }
            let center = Vec2::new(
                (col as f32 + 0.5) * cell.x,
                (row as f32 + 0.5) * cell.y,
            );
            let radius = cell.min_element() * 0.3;
            let color = pick_spatial(&mut ctx.rng, palette.foreground, center, ctx.extent);
            let paint = Paint::fill(color).with_opacity(0.9);
            let element = match uniform_int(&mut ctx.rng, 0, 3) {
                0 => shape::circle(center, radius, paint),
                1 => shape::rect(center - Vec2::splat(radius), Vec2::splat(radius * 2.0), paint),
                2 => shape::triangle(center, radius, 0.0, paint),
                _ => {
                    let quadrant = uniform_int(&mut ctx.rng, 0, 3) as f32 * 90.0;
                    shape::quarter_circle(center - Vec2::splat(radius), radius * 2.0, quadrant, paint)
                }
            };
            out.push(element);
            ctx.index.insert(Bounds::of_circle(center, radius));
        }
    }
}

/// Thin hatching over one golden cell. Composable detail, gated by density
/// and an independent boolean.
fn hatch_detail(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let gate = rand01(&mut ctx.rng);
    if density.clamp(0.0, 1.0) < 0.45 || gate >= 0.5 {
        return;
    }
    let anchors = GoldenAnchors::of(ctx.extent);
    let pos = Vec2::new(anchors.left_x, anchors.top_y);
    let size = Vec2::new(
        anchors.right_x - anchors.left_x,
        anchors.bottom_y - anchors.top_y,
    );
    let stripes = shape::stripe_block(
        pos,
        size,
        uniform_int(&mut ctx.rng, 6, 10) as u32,
        false,
        palette.ink,
        0.3,
    );
    out.extend(stripes);
}
