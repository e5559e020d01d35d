//! Plain-data scene graph produced by the composers.
//!
//! Composers assemble [`Element`]s; the sink in [`svg`] is the only code
//! that knows markup syntax, so the same scene can be serialized to a
//! string, mounted as a DOM subtree, or rendered by any other target.
//! Ordering is significant: later elements paint over earlier ones. A scene
//! is immutable once returned from the render pipeline.
use glam::Vec2;

use crate::palette::Rgb;

pub mod svg;

/// One stop of a gradient definition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Rgb,
    pub opacity: f32,
}

/// Reusable effect definitions, referenced by id and never duplicated.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectDef {
    LinearGradient {
        id: String,
        from: GradientStop,
        to: GradientStop,
        vertical: bool,
    },
    RadialGradient {
        id: String,
        inner: GradientStop,
        outer: GradientStop,
    },
    SoftShadow {
        id: String,
        dx: f32,
        dy: f32,
        blur: f32,
        color: Rgb,
        opacity: f32,
    },
    Grain {
        id: String,
        frequency: f32,
        octaves: u32,
    },
}

impl EffectDef {
    pub fn id(&self) -> &str {
        match self {
            EffectDef::LinearGradient { id, .. }
            | EffectDef::RadialGradient { id, .. }
            | EffectDef::SoftShadow { id, .. }
            | EffectDef::Grain { id, .. } => id,
        }
    }
}

/// Per-render def id set derived from the seed, so several rendered
/// documents can coexist in one host document without id collisions.
#[derive(Clone, Debug)]
pub struct DefIds {
    pub soft_shadow: String,
    pub accent_shadow: String,
    pub depth: String,
    pub vignette: String,
    pub grain: String,
}

impl DefIds {
    pub fn for_seed(seed: i32) -> Self {
        let prefix = format!("as{:08x}", seed as u32);
        Self {
            soft_shadow: format!("{prefix}-soft"),
            accent_shadow: format!("{prefix}-accent"),
            depth: format!("{prefix}-depth"),
            vignette: format!("{prefix}-vignette"),
            grain: format!("{prefix}-grain"),
        }
    }
}

/// Geometry of one element.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        pos: Vec2,
        size: Vec2,
        corner_radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
    },
    Line {
        from: Vec2,
        to: Vec2,
    },
    Polygon {
        points: Vec<Vec2>,
    },
    Path {
        d: String,
    },
}

/// Fill of an element: a solid color or a reference to an effect definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgb),
    Def(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

/// Fill, stroke, opacity and optional filter reference of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub opacity: f32,
    pub filter: Option<String>,
}

impl Paint {
    /// Solid fill, no stroke, full opacity.
    pub fn fill(color: Rgb) -> Self {
        Self {
            fill: Some(Fill::Solid(color)),
            stroke: None,
            opacity: 1.0,
            filter: None,
        }
    }

    /// Fill referencing a gradient definition.
    pub fn fill_def(id: impl Into<String>) -> Self {
        Self {
            fill: Some(Fill::Def(id.into())),
            stroke: None,
            opacity: 1.0,
            filter: None,
        }
    }

    /// Stroke only, no fill.
    pub fn stroke(color: Rgb, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
            opacity: 1.0,
            filter: None,
        }
    }

    pub fn with_stroke(mut self, color: Rgb, width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    /// Set opacity, clamped to [0, 1].
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_filter(mut self, id: impl Into<String>) -> Self {
        self.filter = Some(id.into());
        self
    }
}

/// Rotation transform about a point, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub about: Vec2,
}

/// One layered vector primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub paint: Paint,
    pub rotation: Option<Rotation>,
}

impl Element {
    pub fn new(shape: Shape, paint: Paint) -> Self {
        Self {
            shape,
            paint,
            rotation: None,
        }
    }

    pub fn rotated(mut self, degrees: f32, about: Vec2) -> Self {
        self.rotation = Some(Rotation { degrees, about });
        self
    }
}

/// The ordered, layered output of one render call.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Scene {
    /// Canvas extent; the viewBox is `0 0 extent.x extent.y`.
    pub extent: Vec2,
    /// Effect definitions, serialized before any element.
    pub defs: Vec<EffectDef>,
    /// Primitives in paint order. Element 0 is the background.
    pub elements: Vec<Element>,
    overlay_from: usize,
}

impl Scene {
    pub(crate) fn new(extent: Vec2) -> Self {
        Self {
            extent,
            defs: Vec::new(),
            elements: Vec::new(),
            overlay_from: 0,
        }
    }

    pub(crate) fn push_def(&mut self, def: EffectDef) {
        self.defs.push(def);
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Mark the end of the composed body; everything pushed afterwards is an
    /// atmospheric overlay and excluded from the reveal timeline.
    pub(crate) fn seal_body(&mut self) {
        self.overlay_from = self.elements.len();
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Index of the first atmospheric overlay element.
    pub fn overlay_from(&self) -> usize {
        if self.overlay_from == 0 {
            self.elements.len()
        } else {
            self.overlay_from
        }
    }

    /// Indices of elements the reveal timeline animates: everything except
    /// the background and the overlays.
    pub fn revealable(&self) -> std::ops::Range<usize> {
        let end = self.overlay_from();
        let start = 1.min(end);
        start..end
    }

    /// Serialize to scalable-vector markup.
    pub fn to_svg_string(&self) -> String {
        svg::to_svg_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_ids_are_seed_unique_and_stable() {
        let a = DefIds::for_seed(36787);
        let b = DefIds::for_seed(36787);
        let c = DefIds::for_seed(-36787);
        assert_eq!(a.soft_shadow, b.soft_shadow);
        assert_ne!(a.grain, c.grain);
        assert!(a.depth.starts_with("as"));
    }

    #[test]
    fn revealable_excludes_background_and_overlays() {
        let mut scene = Scene::new(Vec2::splat(100.0));
        for _ in 0..5 {
            scene.push(Element::new(
                Shape::Circle {
                    center: Vec2::ZERO,
                    radius: 1.0,
                },
                Paint::fill(Rgb::BLACK),
            ));
        }
        scene.seal_body();
        for _ in 0..3 {
            scene.push(Element::new(
                Shape::Rect {
                    pos: Vec2::ZERO,
                    size: Vec2::splat(100.0),
                    corner_radius: 0.0,
                },
                Paint::fill(Rgb::WHITE),
            ));
        }

        assert_eq!(scene.element_count(), 8);
        assert_eq!(scene.overlay_from(), 5);
        assert_eq!(scene.revealable(), 1..5);
    }

    #[test]
    fn paint_opacity_is_clamped() {
        assert_eq!(Paint::fill(Rgb::BLACK).with_opacity(2.0).opacity, 1.0);
        assert_eq!(Paint::fill(Rgb::BLACK).with_opacity(-0.5).opacity, 0.0);
    }
}
