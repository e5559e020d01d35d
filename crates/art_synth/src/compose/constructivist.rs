//! CONSTRUCTIVIST archetype: diagonal thrusts, stacked planes, radial bursts.
use glam::Vec2;
use tracing::debug;

use super::{background, random_anchor, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::color::{pick_spatial, pick_weighted};
use crate::geometry::GoldenAnchors;
use crate::palette::Palette;
use crate::rng::{rand01, uniform, uniform_int};
use crate::scene::{Element, Paint};
use crate::shape;
use crate::spatial::Bounds;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 2);
    debug!(strategy, "constructivist strategy");

    match strategy {
        0 => diagonal_thrust(ctx, palette, density, &mut out),
        1 => stacked_planes(ctx, palette, density, &mut out),
        _ => radial_burst(ctx, palette, density, &mut out),
    }

    hatch_detail(ctx, palette, density, &mut out);
    cross_detail(ctx, palette, density, &mut out);

    let anchor = random_anchor(ctx);
    out.extend(signal_accent(ctx, anchor));
    out
}

/// One dominant diagonal bar with parallel supports and aligned wedges.
fn diagonal_thrust(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let anchors = GoldenAnchors::of(ctx.extent);
    let angle = uniform(&mut ctx.rng, -38.0, -22.0);
    let thickness = uniform(&mut ctx.rng, 26.0, 48.0);
    let length = ctx.extent.x * 1.25;

    let mut main = shape::rotated_rect(
        anchors.center,
        Vec2::new(length, thickness),
        angle,
        Paint::fill(palette.foreground[0]).with_opacity(0.95),
    );
    main.paint.filter = Some(ctx.ids.soft_shadow.clone());
    out.push(main);
    ctx.index.insert(Bounds::of_circle(anchors.center, length * 0.5));

    let across = Vec2::from_angle((angle + 90.0).to_radians());
    let along = Vec2::from_angle(angle.to_radians());
    let supports = scaled_count(density, 1, 3);
    for i in 0..supports {
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let offset = across * side * uniform(&mut ctx.rng, 60.0, 130.0);
        let support_len = uniform(&mut ctx.rng, 160.0, 360.0);
        let support_thick = uniform(&mut ctx.rng, 6.0, 18.0);
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        out.push(shape::rotated_rect(
            anchors.center + offset,
            Vec2::new(support_len, support_thick),
            angle,
            Paint::fill(color).with_opacity(0.88),
        ));
    }

    let wedges = scaled_count(density, 1, 2);
    for _ in 0..wedges {
        let station = uniform(&mut ctx.rng, -0.35, 0.35);
        let tip = anchors.center + along * (length * station);
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        out.push(shape::wedge(
            tip,
            uniform(&mut ctx.rng, 60.0, 120.0),
            uniform(&mut ctx.rng, 12.0, 24.0),
            angle + 90.0,
            Paint::fill(color).with_opacity(0.85),
        ));
    }

    let counter = anchors.top_right;
    let counter_radius = uniform(&mut ctx.rng, 30.0, 56.0);
    let counter_color = palette.foreground[1 % palette.foreground.len()];
    out.push(shape::circle(
        counter,
        counter_radius,
        Paint::fill(counter_color).with_opacity(0.9),
    ));
    ctx.index.insert(Bounds::of_circle(counter, counter_radius));
}

/// Overlapping trapezoid planes climbing from a low baseline, with a mast.
fn stacked_planes(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let planes = scaled_count(density, 4, 4);
    let mut y = ctx.extent.y * 0.82;
    for _ in 0..planes {
        let width = uniform(&mut ctx.rng, 110.0, 240.0);
        let height = uniform(&mut ctx.rng, 36.0, 74.0);
        let x = uniform(&mut ctx.rng, 30.0, ctx.extent.x - width - 30.0);
        let inset = uniform(&mut ctx.rng, 8.0, 30.0);
        let pos = Vec2::new(x, y - height);
        let color = pick_spatial(
            &mut ctx.rng,
            palette.foreground,
            pos + Vec2::new(width, height) * 0.5,
            ctx.extent,
        );
        out.push(shape::trapezoid(
            pos,
            Vec2::new(width, height),
            inset,
            Paint::fill(color).with_opacity(0.85),
        ));
        ctx.index
            .insert(Bounds::of_rect(pos, Vec2::new(width, height)));
        y -= uniform(&mut ctx.rng, 34.0, 64.0);
        if y < ctx.extent.y * 0.2 {
            break;
        }
    }

    let anchors = GoldenAnchors::of(ctx.extent);
    let mast_x = anchors.left_x;
    let mast_top = uniform(&mut ctx.rng, 40.0, 90.0);
    out.push(shape::bar(
        Vec2::new(mast_x, mast_top),
        ctx.extent.y * 0.74 - mast_top,
        uniform(&mut ctx.rng, 8.0, 16.0),
        true,
        Paint::fill(palette.ink).with_opacity(0.9),
    ));
}

/// Rays bursting from an anchor, every third one a wedge.
fn radial_burst(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let center = random_anchor(ctx);
    let rays = scaled_count(density, 8, 8);
    for i in 0..rays {
        let angle = 360.0 * i as f32 / rays as f32 + uniform(&mut ctx.rng, -4.0, 4.0);
        let length = uniform(&mut ctx.rng, 70.0, 220.0);
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        if i % 3 == 2 {
            out.push(shape::wedge(
                center,
                length * 0.8,
                uniform(&mut ctx.rng, 8.0, 16.0),
                angle,
                Paint::fill(color).with_opacity(0.85),
            ));
        } else {
            let to = center + Vec2::from_angle(angle.to_radians()) * length;
            out.push(shape::line(center, to, color, uniform(&mut ctx.rng, 2.0, 6.0)));
        }
    }

    let hub_radius = uniform(&mut ctx.rng, 18.0, 34.0);
    out.push(shape::circle(
        center,
        hub_radius,
        Paint::fill(palette.foreground[0]).with_opacity(0.95),
    ));
    out.push(shape::circle_outline(
        center,
        hub_radius + uniform(&mut ctx.rng, 10.0, 22.0),
        palette.ink,
        2.0,
    ));
    ctx.index.insert(Bounds::of_circle(center, hub_radius));
}

/// Stripe hatching in a corner field. Gated by density and a boolean.
fn hatch_detail(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let gate = rand01(&mut ctx.rng);
    if density.clamp(0.0, 1.0) < 0.4 || gate >= 0.45 {
        return;
    }
    let size = Vec2::new(
        uniform(&mut ctx.rng, 70.0, 130.0),
        uniform(&mut ctx.rng, 70.0, 130.0),
    );
    let pos = Vec2::new(ctx.extent.x - size.x - 24.0, ctx.extent.y - size.y - 24.0);
    out.extend(shape::stripe_block(
        pos,
        size,
        uniform_int(&mut ctx.rng, 5, 9) as u32,
        uniform_int(&mut ctx.rng, 0, 1) == 0,
        palette.ink,
        0.35,
    ));
}

/// A few small crosses in open space. Gated per cross.
fn cross_detail(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let threshold = 0.15 + 0.45 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, 3);
    let margin = Vec2::splat(40.0);
    for gate in gates {
        if gate < threshold {
            let pos = ctx
                .index
                .sparsest_position(&mut ctx.rng, margin, ctx.extent - margin, 60.0, 4);
            let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
            out.push(shape::cross(
                pos,
                uniform(&mut ctx.rng, 6.0, 12.0),
                3.0,
                uniform(&mut ctx.rng, 0.0, 45.0),
                Paint::fill(color).with_opacity(0.8),
            ));
        }
    }
}
