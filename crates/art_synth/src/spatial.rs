//! Spatial hash grid for collision-aware placement.
//!
//! A cell-bucketed index over the bounds of already-placed shapes. Placement
//! code uses it two ways: rejecting candidates whose local density is above a
//! threshold, and keeping the sparsest of a bounded number of random
//! candidates. It is a greedy heuristic, not a packer: overlap stays possible
//! in dense scenes, which is part of the gallery-overlap look. The grid lives
//! only for the duration of one render and is not part of the output.
use std::collections::{HashMap, HashSet};

use glam::Vec2;
use rand::RngCore;

use crate::rng::uniform;

/// Axis-aligned bounds of a placed shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds of a rectangle given its top-left corner and size.
    pub fn of_rect(pos: Vec2, size: Vec2) -> Self {
        let size = size.max(Vec2::ZERO);
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Bounds of a circle.
    pub fn of_circle(center: Vec2, radius: f32) -> Self {
        let r = radius.max(0.0);
        Self {
            min: center - Vec2::splat(r),
            max: center + Vec2::splat(r),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Cell-bucketed index over inserted bounds.
#[derive(Debug)]
pub struct SpatialHashGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<usize>>,
    bounds: Vec<Bounds>,
}

impl SpatialHashGrid {
    /// Cell size used by the render pipeline, sized so typical major shapes
    /// span a handful of cells on the 560-unit canvas.
    pub const DEFAULT_CELL_SIZE: f32 = 40.0;

    /// Create a grid. Non-positive cell sizes fall back to the default.
    pub fn new(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            Self::DEFAULT_CELL_SIZE
        };
        Self {
            cell_size,
            cells: HashMap::new(),
            bounds: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    fn cell_span(&self, bounds: &Bounds) -> (i32, i32, i32, i32) {
        let min_x = (bounds.min.x / self.cell_size).floor() as i32;
        let min_y = (bounds.min.y / self.cell_size).floor() as i32;
        let max_x = (bounds.max.x / self.cell_size).floor() as i32;
        let max_y = (bounds.max.y / self.cell_size).floor() as i32;
        (min_x, min_y, max_x, max_y)
    }

    /// Insert bounds, registering them in every overlapped cell.
    pub fn insert(&mut self, bounds: Bounds) {
        let index = self.bounds.len();
        self.bounds.push(bounds);
        let (min_x, min_y, max_x, max_y) = self.cell_span(&bounds);
        for cx in min_x..=max_x {
            for cy in min_y..=max_y {
                self.cells.entry((cx, cy)).or_default().push(index);
            }
        }
    }

    /// All previously inserted bounds overlapping `region`, deduplicated.
    pub fn query(&self, region: Bounds) -> Vec<Bounds> {
        let (min_x, min_y, max_x, max_y) = self.cell_span(&region);
        let mut seen: HashSet<usize> = HashSet::new();
        let mut hits = Vec::new();
        for cx in min_x..=max_x {
            for cy in min_y..=max_y {
                let Some(indices) = self.cells.get(&(cx, cy)) else {
                    continue;
                };
                for &index in indices {
                    if seen.insert(index) && self.bounds[index].overlaps(&region) {
                        hits.push(self.bounds[index]);
                    }
                }
            }
        }
        hits
    }

    /// Count of inserted bounds whose center lies within `radius` of `point`.
    pub fn density(&self, point: Vec2, radius: f32) -> usize {
        let radius = radius.max(0.0);
        let probe = Bounds::of_circle(point, radius);
        let (min_x, min_y, max_x, max_y) = self.cell_span(&probe);
        let radius_sq = radius * radius;
        let mut seen: HashSet<usize> = HashSet::new();
        let mut count = 0;
        for cx in min_x..=max_x {
            for cy in min_y..=max_y {
                let Some(indices) = self.cells.get(&(cx, cy)) else {
                    continue;
                };
                for &index in indices {
                    if seen.insert(index)
                        && self.bounds[index].center().distance_squared(point) <= radius_sq
                    {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Sparse-region preference: draw `attempts` random candidates inside
    /// `[min, max]` and keep the one with the lowest local density.
    ///
    /// Bounded-retry by construction; ties keep the earliest candidate so the
    /// result is a pure function of the draw sequence.
    pub fn sparsest_position<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        min: Vec2,
        max: Vec2,
        radius: f32,
        attempts: usize,
    ) -> Vec2 {
        let attempts = attempts.max(1);
        let mut best = Vec2::ZERO;
        let mut best_density = usize::MAX;
        for _ in 0..attempts {
            let candidate = Vec2::new(uniform(rng, min.x, max.x), uniform(rng, min.y, max.y));
            let density = self.density(candidate, radius);
            if density < best_density {
                best_density = density;
                best = candidate;
            }
        }
        best
    }
}

impl Default for SpatialHashGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_SIZE)
    }
}
