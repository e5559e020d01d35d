//! REPETITION archetype: rhythmic repeats with deliberate variation.
use glam::Vec2;
use tracing::debug;

use super::{background, random_anchor, roll_gates, scaled_count, signal_accent, RenderContext};
use crate::color::pick_weighted;
use crate::palette::Palette;
use crate::rng::{uniform, uniform_int};
use crate::scene::{Element, Paint};
use crate::shape;
use crate::spatial::Bounds;

pub(crate) fn compose(ctx: &mut RenderContext, palette: &Palette, density: f32) -> Vec<Element> {
    let mut out = vec![background(ctx.extent, palette)];
    let strategy = uniform_int(&mut ctx.rng, 0, 3);
    debug!(strategy, "repetition strategy");

    match strategy {
        0 => row_rhythm(ctx, palette, density, &mut out),
        1 => concentric_echo(ctx, palette, density, &mut out),
        2 => modular_stamp(ctx, palette, density, &mut out),
        _ => interval_break(ctx, palette, density, &mut out),
    }

    column_dots(ctx, palette, density, &mut out);

    let anchor = random_anchor(ctx);
    out.extend(signal_accent(ctx, anchor));
    out
}

/// Rows of one repeated shape each, phase-shifted per row.
fn row_rhythm(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let rows = scaled_count(density, 4, 4);
    let per_row = scaled_count(density, 6, 6);
    let pitch_y = ctx.extent.y / (rows + 1) as f32;
    let pitch_x = ctx.extent.x / (per_row + 1) as f32;

    for row in 0..rows {
        let y = pitch_y * (row + 1) as f32;
        let kind = uniform_int(&mut ctx.rng, 0, 2);
        let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
        let phase = uniform(&mut ctx.rng, -pitch_x * 0.25, pitch_x * 0.25);
        let size = uniform(&mut ctx.rng, 8.0, pitch_y.min(pitch_x) * 0.4);
        for i in 0..per_row {
            let center = Vec2::new(pitch_x * (i + 1) as f32 + phase, y);
            let paint = Paint::fill(color).with_opacity(0.9);
            let element = match kind {
                0 => shape::circle(center, size * 0.5, paint),
                1 => shape::rect(center - Vec2::splat(size * 0.5), Vec2::splat(size), paint),
                _ => {
                    let facing = if row % 2 == 0 { 0.0 } else { 180.0 };
                    shape::semicircle(center, size * 0.55, facing, paint)
                }
            };
            out.push(element);
            ctx.index.insert(Bounds::of_circle(center, size * 0.5));
        }
    }
}

/// Concentric outline echoes around one golden anchor.
fn concentric_echo(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let center = random_anchor(ctx);
    let rings = scaled_count(density, 4, 5);
    let base = uniform(&mut ctx.rng, 18.0, 30.0);
    let step = uniform(&mut ctx.rng, 16.0, 30.0);
    let fill_threshold = 0.2 + 0.35 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, rings);

    for ring in 0..rings {
        let radius = base + step * ring as f32;
        let color = palette.foreground[ring % palette.foreground.len()];
        if gates[ring] < fill_threshold {
            out.push(shape::circle(
                center,
                radius,
                Paint::fill(color).with_opacity(0.22),
            ));
        }
        let width = uniform(&mut ctx.rng, 2.0, 5.0);
        out.push(shape::circle_outline(center, radius, color, width));
    }
    ctx.index
        .insert(Bounds::of_circle(center, base + step * rings as f32));
}

/// One motif stamped over a lattice with quarter-turn rotation per cell.
fn modular_stamp(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let per_side = 3 + scaled_count(density, 0, 2);
    let cell = ctx.extent / per_side as f32;
    let radius = cell.min_element() * uniform(&mut ctx.rng, 0.22, 0.3);
    let dot_radius = radius * 0.3;

    for row in 0..per_side {
        for col in 0..per_side {
            let center = Vec2::new(
                (col as f32 + 0.5) * cell.x,
                (row as f32 + 0.5) * cell.y,
            );
            let turn = ((row + col) % 4) as f32 * 90.0;
            let color = palette.foreground[(row + col) % palette.foreground.len()];
            out.push(shape::semicircle(
                center,
                radius,
                turn,
                Paint::fill(color).with_opacity(0.9),
            ));
            out.push(shape::dot(center, dot_radius, palette.ink));
            ctx.index.insert(Bounds::of_circle(center, radius));
        }
    }
}

/// Evenly pitched bars with one syncopated break.
fn interval_break(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let bars = scaled_count(density, 5, 5);
    let pitch = ctx.extent.y / (bars + 1) as f32;
    let margin = uniform(&mut ctx.rng, 36.0, 64.0);
    let break_index = uniform_int(&mut ctx.rng, 0, bars as i32 - 1) as usize;
    let thickness = pitch * uniform(&mut ctx.rng, 0.3, 0.42);

    for i in 0..bars {
        let y = pitch * (i + 1) as f32 - thickness * 0.5;
        let offset = if i == break_index {
            uniform(&mut ctx.rng, 34.0, 72.0)
        } else {
            0.0
        };
        let color = if i == break_index {
            palette.foreground[1 % palette.foreground.len()]
        } else {
            palette.foreground[0]
        };
        let pos = Vec2::new(margin + offset, y);
        let length = ctx.extent.x - margin * 2.0 - offset;
        out.push(shape::bar(
            pos,
            length,
            thickness,
            false,
            Paint::fill(color).with_opacity(0.92),
        ));
        ctx.index
            .insert(Bounds::of_rect(pos, Vec2::new(length, thickness)));
    }
}

/// A sparse column of micro dots along one edge, gated per dot.
fn column_dots(ctx: &mut RenderContext, palette: &Palette, density: f32, out: &mut Vec<Element>) {
    let threshold = 0.2 + 0.4 * density.clamp(0.0, 1.0);
    let gates = roll_gates(&mut ctx.rng, 6);
    let x = ctx.extent.x * 0.94;
    for (i, gate) in gates.iter().enumerate() {
        if *gate < threshold {
            let y = ctx.extent.y * (0.2 + 0.12 * i as f32);
            let color = pick_weighted(&mut ctx.rng, palette.foreground, None);
            out.push(shape::dot(Vec2::new(x, y), 2.6, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::scene::Shape;

    #[test]
    fn compositions_repeat_a_motif() {
        let palette = palette::resolve(palette::DEFAULT_PALETTE_ID);
        for seed in [1, 2, 3, 4, 5, 6, 7, 8] {
            let mut ctx = RenderContext::new(seed);
            let elements = compose(&mut ctx, palette, 0.5);
            // Repetition always yields a substantial element count.
            assert!(elements.len() > 8, "seed {seed}: {}", elements.len());
        }
    }

    #[test]
    fn interval_break_keeps_bars_inside_canvas() {
        let palette = palette::resolve(palette::DEFAULT_PALETTE_ID);
        for seed in 0..32 {
            let mut ctx = RenderContext::new(seed);
            let extent = ctx.extent;
            let elements = compose(&mut ctx, palette, 0.5);
            for element in &elements {
                if let Shape::Rect { pos, size, .. } = &element.shape {
                    assert!(pos.x >= -1.0 && pos.x + size.x <= extent.x + 1.0);
                }
            }
        }
    }
}
