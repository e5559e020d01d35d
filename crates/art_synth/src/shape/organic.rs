//! Organic primitive variants.
//!
//! Each wraps an exact primitive with a faint halo polygon whose outline is
//! the exact boundary perturbed per-vertex by the noise field, then draws
//! the crisp shape on top — a hand-finished edge quality that is still
//! reproducible per seed. Amplitude is clamped to 2.5% of the shape's
//! smallest dimension, and every call draws a random sampling offset so
//! repeated shapes of the same size do not share identical wobble.
use glam::Vec2;
use rand::RngCore;

use super::{bar, circle, rect, semicircle, triangle};
use crate::noise::NoiseField;
use crate::palette::Rgb;
use crate::rng::uniform;
use crate::scene::{Element, Paint, Shape};

/// Fraction of the smallest dimension bounding wobble amplitude.
const AMPLITUDE_FRACTION: f32 = 0.025;
/// Noise-space frequency of the wobble.
const WOBBLE_FREQUENCY: f32 = 0.045;
/// Halo opacity relative to the crisp shape.
const HALO_OPACITY: f32 = 0.35;

/// Organic rectangle: halo polygon under the crisp rect.
pub fn organic_rect<R: RngCore + ?Sized>(
    rng: &mut R,
    noise: &NoiseField,
    pos: Vec2,
    size: Vec2,
    color: Rgb,
    opacity: f32,
) -> Vec<Element> {
    let size = size.max(Vec2::ZERO);
    let amplitude = size.min_element() * AMPLITUDE_FRACTION;
    let loop_points = rect_loop(pos, size);
    let halo = halo_polygon(rng, noise, loop_points, pos + size * 0.5, amplitude, color, opacity);
    vec![halo, rect(pos, size, Paint::fill(color).with_opacity(opacity))]
}

/// Organic bar: the rectangle wobble applied to a long thin rect.
pub fn organic_bar<R: RngCore + ?Sized>(
    rng: &mut R,
    noise: &NoiseField,
    pos: Vec2,
    length: f32,
    thickness: f32,
    vertical: bool,
    color: Rgb,
    opacity: f32,
) -> Vec<Element> {
    let size = if vertical {
        Vec2::new(thickness, length)
    } else {
        Vec2::new(length, thickness)
    };
    let size = size.max(Vec2::ZERO);
    let amplitude = size.min_element() * AMPLITUDE_FRACTION;
    let loop_points = rect_loop(pos, size);
    let halo = halo_polygon(rng, noise, loop_points, pos + size * 0.5, amplitude, color, opacity);
    vec![
        halo,
        bar(pos, length, thickness, vertical, Paint::fill(color).with_opacity(opacity)),
    ]
}

/// Organic circle.
pub fn organic_circle<R: RngCore + ?Sized>(
    rng: &mut R,
    noise: &NoiseField,
    center: Vec2,
    radius: f32,
    color: Rgb,
    opacity: f32,
) -> Vec<Element> {
    let radius = radius.max(0.0);
    let amplitude = radius * 2.0 * AMPLITUDE_FRACTION;
    let segments = arc_segments(radius, std::f32::consts::TAU);
    let loop_points = (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            center + Vec2::from_angle(angle) * radius
        })
        .collect();
    let halo = halo_polygon(rng, noise, loop_points, center, amplitude, color, opacity);
    vec![halo, circle(center, radius, Paint::fill(color).with_opacity(opacity))]
}

/// Organic triangle, apex up before rotation.
pub fn organic_triangle<R: RngCore + ?Sized>(
    rng: &mut R,
    noise: &NoiseField,
    center: Vec2,
    radius: f32,
    degrees: f32,
    color: Rgb,
    opacity: f32,
) -> Vec<Element> {
    let radius = radius.max(0.0);
    let amplitude = radius * 2.0 * AMPLITUDE_FRACTION;
    let crisp = triangle(center, radius, degrees, Paint::fill(color).with_opacity(opacity));
    let corners = match &crisp.shape {
        Shape::Polygon { points } => points.clone(),
        _ => Vec::new(),
    };
    let loop_points = subdivide_loop(&corners, 6);
    let halo = halo_polygon(rng, noise, loop_points, center, amplitude, color, opacity);
    vec![halo, crisp]
}

/// Organic semicircle, dome up before rotation.
pub fn organic_semicircle<R: RngCore + ?Sized>(
    rng: &mut R,
    noise: &NoiseField,
    center: Vec2,
    radius: f32,
    degrees: f32,
    color: Rgb,
    opacity: f32,
) -> Vec<Element> {
    let radius = radius.max(0.0);
    let amplitude = radius * AMPLITUDE_FRACTION * 2.0;
    let segments = arc_segments(radius, std::f32::consts::PI);
    let rotation = degrees.to_radians();
    // Dome sweeps from the +x end through -y; flat edge closes the loop.
    let mut loop_points: Vec<Vec2> = (0..=segments)
        .map(|i| {
            let angle = -std::f32::consts::PI * i as f32 / segments as f32;
            center + rotate(Vec2::from_angle(angle) * radius, rotation)
        })
        .collect();
    for i in 1..6 {
        let t = i as f32 / 6.0;
        loop_points.push(center + rotate(Vec2::new(-radius + 2.0 * radius * t, 0.0), rotation));
    }
    let halo = halo_polygon(rng, noise, loop_points, center, amplitude, color, opacity);
    vec![
        halo,
        semicircle(center, radius, degrees, Paint::fill(color).with_opacity(opacity)),
    ]
}

fn rotate(v: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Segment count for an arc, proportional to its length but bounded.
fn arc_segments(radius: f32, sweep: f32) -> u32 {
    ((radius * sweep / 6.0) as u32).clamp(12, 72)
}

/// Boundary loop of a rectangle, each edge subdivided.
fn rect_loop(pos: Vec2, size: Vec2) -> Vec<Vec2> {
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
    ];
    subdivide_loop(&corners, 5)
}

/// Insert `per_edge` intermediate points along each edge of a closed loop.
fn subdivide_loop(corners: &[Vec2], per_edge: u32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(corners.len() * (per_edge as usize + 1));
    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        for step in 0..=per_edge {
            let t = step as f32 / (per_edge + 1) as f32;
            points.push(a.lerp(b, t));
        }
    }
    points
}

/// Displace each loop vertex radially by the noise field and wrap the result
/// in a faint polygon.
fn halo_polygon<R: RngCore + ?Sized>(
    rng: &mut R,
    noise: &NoiseField,
    points: Vec<Vec2>,
    centroid: Vec2,
    amplitude: f32,
    color: Rgb,
    opacity: f32,
) -> Element {
    let offset = Vec2::new(uniform(rng, 0.0, 1000.0), uniform(rng, 0.0, 1000.0));
    let perturbed = points
        .into_iter()
        .map(|p| {
            let wobble = noise
                .sample(
                    (p.x + offset.x) * WOBBLE_FREQUENCY,
                    (p.y + offset.y) * WOBBLE_FREQUENCY,
                )
                .clamp(-1.0, 1.0);
            let direction = (p - centroid).normalize_or_zero();
            p + direction * (wobble * amplitude)
        })
        .collect();
    Element::new(
        Shape::Polygon { points: perturbed },
        Paint::fill(color).with_opacity((opacity * HALO_OPACITY).clamp(0.0, 1.0)),
    )
}
