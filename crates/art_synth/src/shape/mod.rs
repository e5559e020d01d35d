//! Shape-primitive factory.
//!
//! Pure functions from geometric parameters to single [`Element`]s. The
//! organic variants in [`organic`] wrap a subset of these with noise-driven
//! edge perturbation. All numeric inputs are clamped here, so composers can
//! pass raw randomized values without range checks.
use glam::Vec2;

use crate::palette::Rgb;
use crate::scene::svg::num;
use crate::scene::{Element, Paint, Shape};

pub mod organic;

/// Filled rectangle from its top-left corner.
pub fn rect(pos: Vec2, size: Vec2, paint: Paint) -> Element {
    Element::new(
        Shape::Rect {
            pos,
            size: size.max(Vec2::ZERO),
            corner_radius: 0.0,
        },
        paint,
    )
}

/// Rectangle outline.
pub fn rect_outline(pos: Vec2, size: Vec2, color: Rgb, width: f32) -> Element {
    Element::new(
        Shape::Rect {
            pos,
            size: size.max(Vec2::ZERO),
            corner_radius: 0.0,
        },
        Paint::stroke(color, width.max(0.1)),
    )
}

/// Rectangle rotated about its own center.
pub fn rotated_rect(center: Vec2, size: Vec2, degrees: f32, paint: Paint) -> Element {
    let size = size.max(Vec2::ZERO);
    rect(center - size * 0.5, size, paint).rotated(degrees, center)
}

/// A bar: a long thin rectangle from its top-left corner.
pub fn bar(pos: Vec2, length: f32, thickness: f32, vertical: bool, paint: Paint) -> Element {
    let size = if vertical {
        Vec2::new(thickness, length)
    } else {
        Vec2::new(length, thickness)
    };
    rect(pos, size, paint)
}

/// Filled circle.
pub fn circle(center: Vec2, radius: f32, paint: Paint) -> Element {
    Element::new(
        Shape::Circle {
            center,
            radius: radius.max(0.0),
        },
        paint,
    )
}

/// Circle outline.
pub fn circle_outline(center: Vec2, radius: f32, color: Rgb, width: f32) -> Element {
    Element::new(
        Shape::Circle {
            center,
            radius: radius.max(0.0),
        },
        Paint::stroke(color, width.max(0.1)),
    )
}

/// Small solid dot.
pub fn dot(center: Vec2, radius: f32, color: Rgb) -> Element {
    circle(center, radius, Paint::fill(color))
}

/// Half-disc with its flat edge through `center`, dome pointing up before
/// rotation.
pub fn semicircle(center: Vec2, radius: f32, degrees: f32, paint: Paint) -> Element {
    let r = radius.max(0.0);
    let d = format!(
        "M {} {} A {} {} 0 0 1 {} {} Z",
        num(center.x - r),
        num(center.y),
        num(r),
        num(r),
        num(center.x + r),
        num(center.y)
    );
    let element = Element::new(Shape::Path { d }, paint);
    if degrees != 0.0 {
        element.rotated(degrees, center)
    } else {
        element
    }
}

/// Quarter-disc anchored at `corner`, legs along +x and +y before rotation.
pub fn quarter_circle(corner: Vec2, radius: f32, degrees: f32, paint: Paint) -> Element {
    let r = radius.max(0.0);
    let d = format!(
        "M {} {} L {} {} A {} {} 0 0 1 {} {} Z",
        num(corner.x),
        num(corner.y),
        num(corner.x + r),
        num(corner.y),
        num(r),
        num(r),
        num(corner.x),
        num(corner.y + r)
    );
    let element = Element::new(Shape::Path { d }, paint);
    if degrees != 0.0 {
        element.rotated(degrees, corner)
    } else {
        element
    }
}

/// Sharp isosceles wedge: tip at `tip`, opening `spread_degrees` wide,
/// pointing along `degrees`.
pub fn wedge(tip: Vec2, length: f32, spread_degrees: f32, degrees: f32, paint: Paint) -> Element {
    let length = length.max(0.0);
    let spread = spread_degrees.clamp(1.0, 120.0).to_radians();
    let heading = degrees.to_radians();
    let left = tip + Vec2::from_angle(heading - spread * 0.5) * length;
    let right = tip + Vec2::from_angle(heading + spread * 0.5) * length;
    Element::new(
        Shape::Polygon {
            points: vec![tip, left, right],
        },
        paint,
    )
}

/// Equilateral triangle inscribed in a circle of `radius`, apex up before
/// rotation.
pub fn triangle(center: Vec2, radius: f32, degrees: f32, paint: Paint) -> Element {
    regular_polygon(center, 3, radius, degrees - 90.0, paint)
}

/// Trapezoid: a rectangle whose top edge is inset on both sides.
pub fn trapezoid(pos: Vec2, size: Vec2, inset: f32, paint: Paint) -> Element {
    let size = size.max(Vec2::ZERO);
    let inset = inset.clamp(0.0, size.x * 0.45);
    Element::new(
        Shape::Polygon {
            points: vec![
                Vec2::new(pos.x + inset, pos.y),
                Vec2::new(pos.x + size.x - inset, pos.y),
                Vec2::new(pos.x + size.x, pos.y + size.y),
                Vec2::new(pos.x, pos.y + size.y),
            ],
        },
        paint,
    )
}

/// Star polygon with `points` tips alternating between `outer` and `inner`
/// radii.
pub fn star(
    center: Vec2,
    points: u32,
    outer: f32,
    inner: f32,
    degrees: f32,
    paint: Paint,
) -> Element {
    let points = points.clamp(3, 24);
    let outer = outer.max(0.0);
    let inner = inner.clamp(0.0, outer);
    let start = degrees.to_radians() - std::f32::consts::FRAC_PI_2;
    let step = std::f32::consts::PI / points as f32;
    let vertices = (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            center + Vec2::from_angle(start + step * i as f32) * radius
        })
        .collect();
    Element::new(Shape::Polygon { points: vertices }, paint)
}

/// Regular polygon with `sides` vertices, first vertex along `degrees`.
pub fn regular_polygon(center: Vec2, sides: u32, radius: f32, degrees: f32, paint: Paint) -> Element {
    let sides = sides.max(3);
    let radius = radius.max(0.0);
    let start = degrees.to_radians();
    let step = std::f32::consts::TAU / sides as f32;
    let points = (0..sides)
        .map(|i| center + Vec2::from_angle(start + step * i as f32) * radius)
        .collect();
    Element::new(Shape::Polygon { points }, paint)
}

/// Straight stroke between two points. Thick, thin and diagonal lines are
/// parameterizations of this one constructor.
pub fn line(from: Vec2, to: Vec2, color: Rgb, width: f32) -> Element {
    Element::new(
        Shape::Line { from, to },
        Paint::stroke(color, width.max(0.1)),
    )
}

/// Block of evenly spaced parallel stripes filling `size` from `pos`.
pub fn stripe_block(
    pos: Vec2,
    size: Vec2,
    count: u32,
    vertical: bool,
    color: Rgb,
    opacity: f32,
) -> Vec<Element> {
    let count = count.clamp(1, 64);
    let size = size.max(Vec2::ZERO);
    let span = if vertical { size.x } else { size.y };
    let pitch = span / count as f32;
    let stripe = pitch * 0.55;
    (0..count)
        .map(|i| {
            let offset = pitch * i as f32;
            let (stripe_pos, stripe_size) = if vertical {
                (pos + Vec2::new(offset, 0.0), Vec2::new(stripe, size.y))
            } else {
                (pos + Vec2::new(0.0, offset), Vec2::new(size.x, stripe))
            };
            rect(stripe_pos, stripe_size, Paint::fill(color).with_opacity(opacity))
        })
        .collect()
}

/// Plus-shaped cross centered at `center`.
pub fn cross(center: Vec2, arm: f32, thickness: f32, degrees: f32, paint: Paint) -> Element {
    let arm = arm.max(0.0);
    let half = (thickness.max(0.1) * 0.5).min(arm);
    let points = vec![
        Vec2::new(center.x - half, center.y - arm),
        Vec2::new(center.x + half, center.y - arm),
        Vec2::new(center.x + half, center.y - half),
        Vec2::new(center.x + arm, center.y - half),
        Vec2::new(center.x + arm, center.y + half),
        Vec2::new(center.x + half, center.y + half),
        Vec2::new(center.x + half, center.y + arm),
        Vec2::new(center.x - half, center.y + arm),
        Vec2::new(center.x - half, center.y + half),
        Vec2::new(center.x - arm, center.y + half),
        Vec2::new(center.x - arm, center.y - half),
        Vec2::new(center.x - half, center.y - half),
    ];
    let element = Element::new(Shape::Polygon { points }, paint);
    if degrees != 0.0 {
        element.rotated(degrees, center)
    } else {
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clamps_negative_size() {
        let element = rect(Vec2::ZERO, Vec2::new(-5.0, 10.0), Paint::fill(Rgb::BLACK));
        match element.shape {
            Shape::Rect { size, .. } => assert_eq!(size, Vec2::new(0.0, 10.0)),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn star_alternates_radii() {
        let element = star(Vec2::ZERO, 5, 10.0, 4.0, 0.0, Paint::fill(Rgb::BLACK));
        let Shape::Polygon { points } = element.shape else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            let r = p.length();
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((r - expected).abs() < 1e-3, "vertex {i} radius {r}");
        }
    }

    #[test]
    fn regular_polygon_has_requested_sides() {
        let element = regular_polygon(Vec2::splat(10.0), 6, 5.0, 0.0, Paint::fill(Rgb::BLACK));
        let Shape::Polygon { points } = element.shape else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 6);
        for p in points {
            assert!((p.distance(Vec2::splat(10.0)) - 5.0).abs() < 1e-3);
        }
    }

    #[test]
    fn wedge_is_isosceles() {
        let element = wedge(Vec2::ZERO, 20.0, 30.0, 0.0, Paint::fill(Rgb::BLACK));
        let Shape::Polygon { points } = element.shape else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 3);
        assert!((points[1].length() - 20.0).abs() < 1e-3);
        assert!((points[2].length() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn stripe_block_emits_count_stripes() {
        let stripes = stripe_block(
            Vec2::ZERO,
            Vec2::new(100.0, 40.0),
            5,
            true,
            Rgb::BLACK,
            0.8,
        );
        assert_eq!(stripes.len(), 5);
        for element in &stripes {
            assert!((element.paint.opacity - 0.8).abs() < 1e-6);
        }
    }

    #[test]
    fn rotated_rect_pivots_on_center() {
        let element = rotated_rect(Vec2::new(50.0, 50.0), Vec2::splat(20.0), 15.0, Paint::fill(Rgb::BLACK));
        let rotation = element.rotation.expect("rotation set");
        assert_eq!(rotation.about, Vec2::new(50.0, 50.0));
        match element.shape {
            Shape::Rect { pos, .. } => assert_eq!(pos, Vec2::new(40.0, 40.0)),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn semicircle_path_is_closed_arc() {
        let element = semicircle(Vec2::new(10.0, 10.0), 5.0, 0.0, Paint::fill(Rgb::BLACK));
        let Shape::Path { d } = element.shape else {
            panic!("expected path");
        };
        assert!(d.starts_with("M 5 10 A 5 5"));
        assert!(d.ends_with("Z"));
    }
}
