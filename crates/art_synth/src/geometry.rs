//! Canvas extent and golden-section layout geometry.
//!
//! Pure coordinate helpers with no state and no randomness. Composers use
//! the anchors as layout targets for focal elements and counterweights.
use glam::Vec2;

/// Square canvas edge length in user units. The output viewBox is
/// `0 0 CANVAS CANVAS`.
pub const CANVAS: f32 = 560.0;

/// Reciprocal golden ratio.
pub const PHI_INV: f32 = 0.618_034;

/// Canvas extent as a vector.
pub const fn canvas_extent() -> Vec2 {
    Vec2::new(CANVAS, CANVAS)
}

/// Golden-section anchor points and third-lines for a canvas extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoldenAnchors {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub center: Vec2,
    /// Vertical golden line nearer the left edge (x position).
    pub left_x: f32,
    /// Vertical golden line nearer the right edge (x position).
    pub right_x: f32,
    /// Horizontal golden line nearer the top edge (y position).
    pub top_y: f32,
    /// Horizontal golden line nearer the bottom edge (y position).
    pub bottom_y: f32,
}

impl GoldenAnchors {
    /// Compute the anchors for `extent`. Pure function of the extent.
    pub fn of(extent: Vec2) -> Self {
        let minor = 1.0 - PHI_INV;
        let left_x = extent.x * minor;
        let right_x = extent.x * PHI_INV;
        let top_y = extent.y * minor;
        let bottom_y = extent.y * PHI_INV;
        Self {
            top_left: Vec2::new(left_x, top_y),
            top_right: Vec2::new(right_x, top_y),
            bottom_left: Vec2::new(left_x, bottom_y),
            bottom_right: Vec2::new(right_x, bottom_y),
            center: extent * 0.5,
            left_x,
            right_x,
            top_y,
            bottom_y,
        }
    }

    /// The four corner anchors in reading order.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// All five anchors, center last.
    pub fn all(&self) -> [Vec2; 5] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.center,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_sit_on_golden_lines() {
        let anchors = GoldenAnchors::of(canvas_extent());
        assert!((anchors.left_x - CANVAS * (1.0 - PHI_INV)).abs() < 1e-3);
        assert!((anchors.right_x - CANVAS * PHI_INV).abs() < 1e-3);
        assert_eq!(anchors.top_left, Vec2::new(anchors.left_x, anchors.top_y));
        assert_eq!(
            anchors.bottom_right,
            Vec2::new(anchors.right_x, anchors.bottom_y)
        );
        assert_eq!(anchors.center, Vec2::new(CANVAS * 0.5, CANVAS * 0.5));
    }

    #[test]
    fn anchors_are_symmetric_on_a_square_canvas() {
        let anchors = GoldenAnchors::of(canvas_extent());
        assert!((anchors.left_x + anchors.right_x - CANVAS).abs() < 0.5);
        assert!((anchors.top_y + anchors.bottom_y - CANVAS).abs() < 0.5);
        assert_eq!(anchors.all().len(), 5);
        assert_eq!(anchors.corners().len(), 4);
    }
}
