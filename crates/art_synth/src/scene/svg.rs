//! SVG serialization of a [`Scene`].
//!
//! The one markup-aware module: defs first, then elements in paint order.
//! Output is stable down to number formatting, so identical scenes always
//! serialize to byte-identical documents.
use std::fmt::{self, Write};

use super::{EffectDef, Element, Fill, Scene, Shape};

/// Serialize `scene` into a standalone SVG string.
pub fn to_svg_string(scene: &Scene) -> String {
    let mut out = String::with_capacity(scene.elements.len() * 96 + 1024);
    // Writing into a String cannot fail.
    let _ = write_svg(scene, &mut out);
    out
}

/// Serialize `scene` into any [`fmt::Write`] sink.
pub fn write_svg<W: Write>(scene: &Scene, w: &mut W) -> fmt::Result {
    writeln!(
        w,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">",
        num(scene.extent.x),
        num(scene.extent.y)
    )?;

    if !scene.defs.is_empty() {
        w.write_str("<defs>\n")?;
        for def in &scene.defs {
            write_def(def, w)?;
        }
        w.write_str("</defs>\n")?;
    }

    for element in &scene.elements {
        write_element(element, w)?;
    }

    w.write_str("</svg>\n")
}

fn write_def<W: Write>(def: &EffectDef, w: &mut W) -> fmt::Result {
    match def {
        EffectDef::LinearGradient {
            id,
            from,
            to,
            vertical,
        } => {
            let (x2, y2) = if *vertical { ("0", "1") } else { ("1", "0") };
            writeln!(
                w,
                "<linearGradient id=\"{id}\" x1=\"0\" y1=\"0\" x2=\"{x2}\" y2=\"{y2}\">"
            )?;
            writeln!(
                w,
                "<stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                from.color.hex(),
                num(from.opacity)
            )?;
            writeln!(
                w,
                "<stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                to.color.hex(),
                num(to.opacity)
            )?;
            writeln!(w, "</linearGradient>")
        }
        EffectDef::RadialGradient { id, inner, outer } => {
            writeln!(w, "<radialGradient id=\"{id}\">")?;
            writeln!(
                w,
                "<stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                inner.color.hex(),
                num(inner.opacity)
            )?;
            writeln!(
                w,
                "<stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                outer.color.hex(),
                num(outer.opacity)
            )?;
            writeln!(w, "</radialGradient>")
        }
        EffectDef::SoftShadow {
            id,
            dx,
            dy,
            blur,
            color,
            opacity,
        } => {
            writeln!(
                w,
                "<filter id=\"{id}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">"
            )?;
            writeln!(
                w,
                "<feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>",
                num(*dx),
                num(*dy),
                num(*blur),
                color.hex(),
                num(*opacity)
            )?;
            writeln!(w, "</filter>")
        }
        EffectDef::Grain {
            id,
            frequency,
            octaves,
        } => {
            writeln!(w, "<filter id=\"{id}\">")?;
            writeln!(
                w,
                "<feTurbulence type=\"fractalNoise\" baseFrequency=\"{}\" numOctaves=\"{octaves}\" stitchTiles=\"stitch\"/>",
                num(*frequency)
            )?;
            writeln!(w, "<feColorMatrix type=\"saturate\" values=\"0\"/>")?;
            writeln!(w, "<feComposite operator=\"in\" in2=\"SourceGraphic\"/>")?;
            writeln!(w, "</filter>")
        }
    }
}

fn write_element<W: Write>(element: &Element, w: &mut W) -> fmt::Result {
    match &element.shape {
        Shape::Rect {
            pos,
            size,
            corner_radius,
        } => {
            write!(
                w,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                num(pos.x),
                num(pos.y),
                num(size.x),
                num(size.y)
            )?;
            if *corner_radius > 0.0 {
                write!(w, " rx=\"{}\"", num(*corner_radius))?;
            }
        }
        Shape::Circle { center, radius } => {
            write!(
                w,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                num(center.x),
                num(center.y),
                num(*radius)
            )?;
        }
        Shape::Ellipse { center, radii } => {
            write!(
                w,
                "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"",
                num(center.x),
                num(center.y),
                num(radii.x),
                num(radii.y)
            )?;
        }
        Shape::Line { from, to } => {
            write!(
                w,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y)
            )?;
        }
        Shape::Polygon { points } => {
            w.write_str("<polygon points=\"")?;
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    w.write_str(" ")?;
                }
                write!(w, "{},{}", num(p.x), num(p.y))?;
            }
            w.write_str("\"")?;
        }
        Shape::Path { d } => {
            write!(w, "<path d=\"{d}\"")?;
        }
    }

    match &element.paint.fill {
        Some(Fill::Solid(color)) => write!(w, " fill=\"{}\"", color.hex())?,
        Some(Fill::Def(id)) => write!(w, " fill=\"url(#{id})\"")?,
        None => w.write_str(" fill=\"none\"")?,
    }
    if let Some(stroke) = &element.paint.stroke {
        write!(
            w,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.hex(),
            num(stroke.width)
        )?;
    }
    if element.paint.opacity < 1.0 {
        write!(w, " opacity=\"{}\"", num(element.paint.opacity))?;
    }
    if let Some(filter) = &element.paint.filter {
        write!(w, " filter=\"url(#{filter})\"")?;
    }
    if let Some(rotation) = &element.rotation {
        write!(
            w,
            " transform=\"rotate({} {} {})\"",
            num(rotation.degrees),
            num(rotation.about.x),
            num(rotation.about.y)
        )?;
    }
    w.write_str("/>\n")
}

/// Format a coordinate with at most two decimals, trailing zeros trimmed.
pub(crate) fn num(value: f32) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::palette::Rgb;
    use crate::scene::{GradientStop, Paint};

    fn small_scene() -> Scene {
        let mut scene = Scene::new(Vec2::splat(100.0));
        scene.push_def(EffectDef::LinearGradient {
            id: "g1".into(),
            from: GradientStop {
                color: Rgb::WHITE,
                opacity: 0.1,
            },
            to: GradientStop {
                color: Rgb::BLACK,
                opacity: 0.2,
            },
            vertical: true,
        });
        scene.push(Element::new(
            Shape::Rect {
                pos: Vec2::ZERO,
                size: Vec2::splat(100.0),
                corner_radius: 0.0,
            },
            Paint::fill(Rgb::new(0xF4, 0xEF, 0xE6)),
        ));
        scene.push(
            Element::new(
                Shape::Circle {
                    center: Vec2::new(50.0, 50.0),
                    radius: 10.5,
                },
                Paint::fill(Rgb::BLACK).with_opacity(0.5),
            )
            .rotated(45.0, Vec2::new(50.0, 50.0)),
        );
        scene.seal_body();
        scene
    }

    #[test]
    fn defs_come_before_elements() {
        let markup = to_svg_string(&small_scene());
        let defs_at = markup.find("<defs>").expect("defs present");
        let rect_at = markup.find("<rect").expect("rect present");
        assert!(defs_at < rect_at);
        assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(markup.contains("viewBox=\"0 0 100 100\""));
        assert!(markup.ends_with("</svg>\n"));
    }

    #[test]
    fn paint_attributes_are_serialized() {
        let markup = to_svg_string(&small_scene());
        assert!(markup.contains("fill=\"#f4efe6\""));
        assert!(markup.contains("opacity=\"0.5\""));
        assert!(markup.contains("transform=\"rotate(45 50 50)\""));
        assert!(markup.contains("r=\"10.5\""));
    }

    #[test]
    fn serialization_is_stable() {
        let scene = small_scene();
        assert_eq!(to_svg_string(&scene), to_svg_string(&scene));
    }

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(1.25), "1.25");
        assert_eq!(num(1.204), "1.2");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(-3.5), "-3.5");
    }
}
