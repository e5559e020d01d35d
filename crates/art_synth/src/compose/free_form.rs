//! FREE_FORM archetype: loose organic arrangements.
//!
//! Strategies: scattered organics across sparse regions, a single anchored
//! focal mass with counterweights, or stacked horizon bands.
use glam::Vec2;
use tracing::debug;

use super::{background, random_anchor, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::color::{pick_spatial, pick_weighted};
use crate::geometry::GoldenAnchors;
use crate::palette::Palette;
use crate::rng::{rand01, uniform, uniform_int};
use crate::scene::{Element, Paint};
use crate::shape;
use crate::shape::organic;
use crate::spatial::Bounds;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 2);
    debug!(strategy, "free-form strategy");

    let mut centers = Vec::new();
    match strategy {
        0 => scattered_organics(ctx, palette, density, &mut out, &mut centers),
        1 => anchored_composition(ctx, palette, density, &mut out, &mut centers),
        _ => horizon_bands(ctx, palette, density, &mut out, &mut centers),
    }

    connectors(ctx, palette, density, &centers, &mut out);
    micro_dots(ctx, palette, density, &mut out);

    let anchor = random_anchor(ctx);
    out.extend(signal_accent(ctx, anchor));
    out
}

fn scattered_organics(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
    centers: &mut Vec<Vec2>,
) {
    let count = scaled_count(density, 6, 8);
    let margin = Vec2::splat(70.0);
    for _ in 0..count {
        let pos = ctx
            .index
            .sparsest_position(&mut ctx.rng, margin, ctx.extent - margin, 80.0, 8);
        // Even the sparsest candidate can sit in a crowd late in the run.
        if ctx.index.density(pos, 60.0) > 3 {
            continue;
        }
        let swell = 0.7 + ctx.noise.sample01(pos.x * 0.01, pos.y * 0.01) * 0.6;
        let size = uniform(&mut ctx.rng, 34.0, 104.0) * swell;
        let color = pick_spatial(&mut ctx.rng, palette.foreground, pos, ctx.extent);
        let opacity = uniform(&mut ctx.rng, 0.72, 0.94);
        let kind = uniform_int(&mut ctx.rng, 0, 2);
        let elements = match kind {
            0 => organic::organic_rect(
                &mut ctx.rng,
                &ctx.noise,
                pos - Vec2::splat(size * 0.5),
                Vec2::splat(size),
                color,
                opacity,
            ),
            1 => organic::organic_circle(&mut ctx.rng, &ctx.noise, pos, size * 0.5, color, opacity),
            _ => {
                let tilt = uniform(&mut ctx.rng, -30.0, 30.0);
                organic::organic_triangle(
                    &mut ctx.rng,
                    &ctx.noise,
                    pos,
                    size * 0.55,
                    tilt,
                    color,
                    opacity,
                )
            }
        };
        ctx.index.insert(Bounds::of_circle(pos, size * 0.5));
        centers.push(pos);
        out.extend(elements);
    }
}

fn anchored_composition(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
    centers: &mut Vec<Vec2>,
) {
    let anchors = GoldenAnchors::of(ctx.extent);
    let corners = anchors.corners();
    let focal_index = uniform_int(&mut ctx.rng, 0, 3) as usize;
    let focal = corners[focal_index];

    let focal_radius = uniform(&mut ctx.rng, 64.0, 96.0);
    let focal_color = pick_weighted(&mut ctx.rng, palette.foreground, None);
    out.extend(organic::organic_circle(
        &mut ctx.rng,
        &ctx.noise,
        focal,
        focal_radius,
        focal_color,
        0.92,
    ));
    ctx.index.insert(Bounds::of_circle(focal, focal_radius));
    centers.push(focal);

    let supports = scaled_count(density, 2, 2).min(3);
    for i in 0..supports {
        let corner = corners[(focal_index + 1 + i) % 4];
        let size = uniform(&mut ctx.rng, 44.0, 96.0);
        let color = pick_spatial(&mut ctx.rng, palette.foreground, corner, ctx.extent);
        let opacity = uniform(&mut ctx.rng, 0.75, 0.92);
        let elements = if uniform_int(&mut ctx.rng, 0, 1) == 0 {
            organic::organic_rect(
                &mut ctx.rng,
                &ctx.noise,
                corner - Vec2::splat(size * 0.5),
                Vec2::splat(size),
                color,
                opacity,
            )
        } else {
            let facing = uniform(&mut ctx.rng, 0.0, 360.0);
            organic::organic_semicircle(
                &mut ctx.rng,
                &ctx.noise,
                corner,
                size * 0.5,
                facing,
                color,
                opacity,
            )
        };
        ctx.index.insert(Bounds::of_circle(corner, size * 0.5));
        centers.push(corner);
        out.extend(elements);
    }

    if rand01(&mut ctx.rng) < 0.6 {
        let tip = corners[(focal_index + 2) % 4];
        let heading = (anchors.center - tip).to_angle().to_degrees();
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        out.push(shape::wedge(
            tip,
            uniform(&mut ctx.rng, 70.0, 130.0),
            uniform(&mut ctx.rng, 14.0, 26.0),
            heading,
            Paint::fill(color).with_opacity(0.85),
        ));
    }
}

fn horizon_bands(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    out: &mut Vec<Element>,
    centers: &mut Vec<Vec2>,
) {
    let bands = scaled_count(density, 3, 3);
    let mut y = ctx.extent.y * 0.22;
    for _ in 0..bands {
        if y > ctx.extent.y * 0.88 {
            break;
        }
        let height = uniform(&mut ctx.rng, 26.0, 64.0);
        let left = uniform(&mut ctx.rng, 0.0, 42.0);
        let right = uniform(&mut ctx.rng, 0.0, 42.0);
        let width = (ctx.extent.x - left - right).max(80.0);
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        let opacity = uniform(&mut ctx.rng, 0.78, 0.95);
        out.extend(organic::organic_bar(
            &mut ctx.rng,
            &ctx.noise,
            Vec2::new(left, y),
            width,
            height,
            false,
            color,
            opacity,
        ));
        ctx.index
            .insert(Bounds::of_rect(Vec2::new(left, y), Vec2::new(width, height)));
        centers.push(Vec2::new(left + width * 0.5, y + height * 0.5));
        y += height + uniform(&mut ctx.rng, 18.0, 56.0);
    }

    let anchors = GoldenAnchors::of(ctx.extent);
    let sun = Vec2::new(anchors.right_x, ctx.extent.y * 0.17);
    let sun_radius = uniform(&mut ctx.rng, 28.0, 52.0);
    let sun_color = pick_weighted(&mut ctx.rng, palette.foreground, None);
    out.extend(organic::organic_circle(
        &mut ctx.rng,
        &ctx.noise,
        sun,
        sun_radius,
        sun_color,
        0.9,
    ));
    ctx.index.insert(Bounds::of_circle(sun, sun_radius));
}

/// Connector lines between consecutive major shapes. A composable detail:
/// gated by a density threshold and an independent random boolean.
fn connectors(
    ctx: &mut RenderContext,
    palette: &Palette,
    density: f32,
    centers: &[Vec2],
    out: &mut Vec<Element>,
) {
    let gate = rand01(&mut ctx.rng);
    if centers.len() < 2 || density.clamp(0.0, 1.0) < 0.35 || gate >= 0.65 {
        return;
    }
    for pair in centers.windows(2) {
        let mut element = shape::line(pair[0], pair[1], palette.ink, 1.2);
        element.paint.opacity = 0.5;
        out.push(element);
    }
}

/// Scattered micro dots, each gated against a pre-rolled value.
fn micro_dots(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let threshold = 0.15 + 0.55 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, 5);
    let margin = Vec2::splat(30.0);
    for gate in gates {
        if gate < threshold {
            let pos = ctx
                .index
                .sparsest_position(&mut ctx.rng, margin, ctx.extent - margin, 50.0, 4);
            let radius = uniform(&mut ctx.rng, 2.0, 4.5);
            let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
            out.push(shape::dot(pos, radius, color));
        }
    }
}
