//! Color-selection strategies built on the seeded generator.
//!
//! Two pure strategies: a weighted pick with a decreasing default profile,
//! and a position-biased pick that keeps neighboring shapes chromatically
//! coherent across the canvas.
use glam::Vec2;
use rand::RngCore;

use crate::palette::Rgb;
use crate::rng::{pick, rand01};

/// Default decreasing weight profile: first ~35%, second ~25%, third ~20%,
/// remainder split evenly.
fn default_weights(n: usize) -> Vec<f32> {
    let mut weights = Vec::with_capacity(n);
    let heads = [0.35_f32, 0.25, 0.20];
    for (i, &w) in heads.iter().enumerate() {
        if i < n {
            weights.push(w);
        }
    }
    if n > heads.len() {
        let rest = 0.20 / (n - heads.len()) as f32;
        weights.resize(n, rest);
    }
    weights
}

/// Weighted pick over `colors` using cumulative-weight selection.
///
/// `weights` must match `colors` in length; otherwise the default profile is
/// used. Any negative weight or a non-positive total falls back to a uniform
/// pick rather than failing.
pub fn pick_weighted<R: RngCore + ?Sized>(
    rng: &mut R,
    colors: &[Rgb],
    weights: Option<&[f32]>,
) -> Rgb {
    if colors.is_empty() {
        return Rgb::BLACK;
    }

    let defaults;
    let weights: &[f32] = match weights {
        Some(w) if w.len() == colors.len() => w,
        _ => {
            defaults = default_weights(colors.len());
            &defaults
        }
    };

    let total: f32 = weights.iter().sum();
    if total <= 0.0 || weights.iter().any(|&w| w < 0.0) {
        return pick(rng, colors).copied().unwrap_or(colors[0]);
    }

    let mut roll = rand01(rng) * total;
    for (color, &weight) in colors.iter().zip(weights) {
        roll -= weight;
        if roll <= 0.0 {
            return *color;
        }
    }
    colors[colors.len() - 1]
}

/// Position-biased pick over `colors`.
///
/// Bilinear bias on the normalized axes: `colors[0]` dominates the top-left
/// corner, `colors[1]` the bottom-right; remaining colors receive a small
/// random weight. Produces a coherent gradient across a composition without
/// neighboring shapes disagreeing.
pub fn pick_spatial<R: RngCore + ?Sized>(
    rng: &mut R,
    colors: &[Rgb],
    position: Vec2,
    extent: Vec2,
) -> Rgb {
    if colors.len() < 2 {
        return colors.first().copied().unwrap_or(Rgb::BLACK);
    }

    let nx = if extent.x > 0.0 {
        (position.x / extent.x).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let ny = if extent.y > 0.0 {
        (position.y / extent.y).clamp(0.0, 1.0)
    } else {
        0.5
    };

    let mut weights = vec![0.0_f32; colors.len()];
    weights[0] = (1.0 - nx) * (1.0 - ny) + 0.15;
    weights[1] = nx * ny + 0.15;
    for weight in weights.iter_mut().skip(2) {
        *weight = 0.06 + rand01(rng) * 0.10;
    }

    pick_weighted(rng, colors, Some(&weights))
}
