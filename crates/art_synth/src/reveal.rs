//! Staged-reveal controller: a cooperative, cancellable entrance timeline.
//!
//! `play()` assigns each revealable element an entrance transform and
//! duration from a second generator derived from the layout seed, so
//! animation variety is reproducible per artwork without being coupled to
//! the layout stream. The timeline is cooperative: the caller advances it
//! with [`RevealController::tick`], and a bumped epoch token turns any stale
//! scheduled step into a no-op — `stop()` cancels everything in flight.
//! Reveal order always matches paint order.
use crate::rng::{uniform, uniform_int, SeedRng};
use crate::scene::Scene;

/// Salt for the derived animation stream.
const REVEAL_SALT: u32 = 0x5256_4C31;

/// Fixed delay between consecutive element reveals, in milliseconds.
pub const STAGGER_MS: f32 = 46.0;

/// Entrance transform assigned to one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Scale,
    SlideLeft,
    SlideRight,
    SlideUp,
    SlideDown,
    RotateIn,
    OvershootZoom,
}

impl Entrance {
    pub const ALL: [Entrance; 7] = [
        Entrance::Scale,
        Entrance::SlideLeft,
        Entrance::SlideRight,
        Entrance::SlideUp,
        Entrance::SlideDown,
        Entrance::RotateIn,
        Entrance::OvershootZoom,
    ];
}

/// One scheduled reveal: which element appears, when, and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStep {
    /// Index into the scene's element list.
    pub element: usize,
    /// Delay from `play()`, in milliseconds.
    pub at_ms: f32,
    /// Entrance animation duration, in milliseconds.
    pub duration_ms: f32,
    pub entrance: Entrance,
    epoch: u64,
}

/// Wraps a rendered [`Scene`] with a staged entrance timeline.
pub struct RevealController {
    scene: Scene,
    seed: i32,
    steps: Vec<RevealStep>,
    epoch: u64,
    playing: bool,
    elapsed_ms: f32,
    visible: Vec<bool>,
}

impl RevealController {
    pub(crate) fn new(scene: Scene, seed: i32) -> Self {
        let mut visible = vec![false; scene.element_count()];
        // Background and overlays are not animated; they are always shown.
        for (index, slot) in visible.iter_mut().enumerate() {
            if !scene.revealable().contains(&index) {
                *slot = true;
            }
        }
        Self {
            scene,
            seed,
            steps: Vec::new(),
            epoch: 0,
            playing: false,
            elapsed_ms: 0.0,
            visible,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of elements the timeline animates.
    pub fn element_count(&self) -> usize {
        self.scene.revealable().len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the element at `index` is currently visible.
    pub fn visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// The scheduled steps of the current timeline.
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Start (or restart) the staged reveal from the hidden state.
    ///
    /// Always performs a full [`stop`](Self::stop) first: two timelines for
    /// the same controller never overlap.
    pub fn play(&mut self) {
        self.stop();
        for index in self.scene.revealable() {
            self.visible[index] = false;
        }

        let mut rng = SeedRng::derive(self.seed, REVEAL_SALT);
        let epoch = self.epoch;
        self.steps = self
            .scene
            .revealable()
            .enumerate()
            .map(|(slot, element)| {
                let entrance =
                    Entrance::ALL[uniform_int(&mut rng, 0, Entrance::ALL.len() as i32 - 1) as usize];
                let duration_ms = uniform(&mut rng, 260.0, 640.0);
                RevealStep {
                    element,
                    at_ms: slot as f32 * STAGGER_MS,
                    duration_ms,
                    entrance,
                    epoch,
                }
            })
            .collect();
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Cancel all pending steps and freeze visual state where it is.
    pub fn stop(&mut self) {
        self.epoch += 1;
        self.playing = false;
    }

    /// Jump directly to the fully revealed terminal state.
    pub fn reveal(&mut self) {
        self.stop();
        for slot in self.visible.iter_mut() {
            *slot = true;
        }
    }

    /// Advance the timeline by `delta_ms` and apply every step now due.
    ///
    /// Steps scheduled before the last [`stop`](Self::stop) carry a stale
    /// epoch and are skipped.
    pub fn tick(&mut self, delta_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += delta_ms.max(0.0);
        let mut remaining = false;
        for step in &self.steps {
            if step.epoch != self.epoch {
                continue;
            }
            if step.at_ms <= self.elapsed_ms {
                self.visible[step.element] = true;
            } else {
                remaining = true;
            }
        }
        if !remaining {
            // Finishing step: the timeline is done once every reveal fired.
            self.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::palette::Rgb;
    use crate::scene::{Element, Paint, Shape};

    fn test_scene(body: usize) -> Scene {
        let mut scene = Scene::new(Vec2::splat(100.0));
        for i in 0..=body {
            scene.push(Element::new(
                Shape::Circle {
                    center: Vec2::splat(i as f32),
                    radius: 1.0,
                },
                Paint::fill(Rgb::BLACK),
            ));
        }
        scene.seal_body();
        scene.push(Element::new(
            Shape::Rect {
                pos: Vec2::ZERO,
                size: Vec2::splat(100.0),
                corner_radius: 0.0,
            },
            Paint::fill(Rgb::WHITE),
        ));
        scene
    }

    #[test]
    fn background_and_overlays_start_visible_body_hidden() {
        let controller = RevealController::new(test_scene(4), 1);
        assert!(controller.visible(0));
        assert!(controller.visible(5));
        for index in 1..5 {
            assert!(!controller.visible(index));
        }
        assert_eq!(controller.element_count(), 4);
        assert!(!controller.is_playing());
    }

    #[test]
    fn reveal_order_matches_paint_order() {
        let mut controller = RevealController::new(test_scene(6), 42);
        controller.play();
        assert!(controller.is_playing());

        let mut revealed_at: Vec<usize> = Vec::new();
        for _ in 0..40 {
            controller.tick(STAGGER_MS * 0.5);
            for index in controller.scene().revealable() {
                if controller.visible(index) && !revealed_at.contains(&index) {
                    revealed_at.push(index);
                }
            }
        }
        let expected: Vec<usize> = controller.scene().revealable().collect();
        assert_eq!(revealed_at, expected);
        assert!(!controller.is_playing());
    }

    #[test]
    fn schedule_is_reproducible_per_seed_and_independent_of_layout_stream() {
        let mut a = RevealController::new(test_scene(8), 1234);
        let mut b = RevealController::new(test_scene(8), 1234);
        a.play();
        b.play();
        assert_eq!(a.steps(), b.steps());

        let mut c = RevealController::new(test_scene(8), 1235);
        c.play();
        assert_ne!(a.steps(), c.steps());
    }

    #[test]
    fn entrances_vary_across_elements() {
        let mut controller = RevealController::new(test_scene(12), 7);
        controller.play();
        let first = controller.steps()[0].entrance;
        assert!(controller.steps().iter().any(|s| s.entrance != first));
        // Delays are strictly staggered in paint order.
        for pair in controller.steps().windows(2) {
            assert!(pair[0].at_ms < pair[1].at_ms);
            assert!(pair[0].element < pair[1].element);
        }
    }

    #[test]
    fn stop_cancels_pending_steps() {
        let mut controller = RevealController::new(test_scene(6), 9);
        controller.play();
        controller.tick(STAGGER_MS * 1.5);
        let shown: Vec<bool> = (0..8).map(|i| controller.visible(i)).collect();

        controller.stop();
        assert!(!controller.is_playing());
        // Ticks after stop are no-ops; visual state is frozen where it was.
        controller.tick(10_000.0);
        for (index, was_shown) in shown.iter().enumerate() {
            assert_eq!(controller.visible(index), *was_shown);
        }
    }

    #[test]
    fn replay_restarts_from_hidden() {
        let mut controller = RevealController::new(test_scene(5), 11);
        controller.play();
        controller.tick(10_000.0);
        assert!(controller.scene().revealable().all(|i| controller.visible(i)));

        controller.play();
        assert!(controller.scene().revealable().all(|i| !controller.visible(i)));
        assert!(controller.is_playing());
    }

    #[test]
    fn reveal_jumps_to_terminal_state() {
        let mut controller = RevealController::new(test_scene(5), 13);
        controller.play();
        controller.reveal();
        assert!(!controller.is_playing());
        for index in 0..controller.scene().element_count() {
            assert!(controller.visible(index));
        }
    }
}
