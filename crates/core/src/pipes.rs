//! Pipe field - lazily generated obstacles and their screen geometry
//!
//! Pipes are identified by index (0, 1, 2, ...). Pipe `i` sits at world x
//! `i * (pipe_width + pipe_spacing)`; its gap offset is drawn the first time
//! the pipe (or any later pipe) is requested and then never changes for the
//! rest of the run.

use std::ops::Range;

use crate::rng::GapRng;
use crate::types::{Rect, Tuning};

/// Append-only list of generated gap-top offsets.
#[derive(Debug, Clone)]
pub struct PipeField {
    heights: Vec<u32>,
    rng: GapRng,
}

impl PipeField {
    pub fn new(rng: GapRng) -> Self {
        Self {
            heights: Vec::with_capacity(64),
            rng,
        }
    }

    /// Number of pipes generated so far.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// All gap offsets generated so far, indexed by pipe number.
    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Gap-top offset of pipe `index`, if it has been generated.
    pub fn height(&self, index: u32) -> Option<u32> {
        self.heights.get(index as usize).copied()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate every pipe up to and including `index` that does not exist yet.
    ///
    /// New offsets are drawn from `[0, screen_height - gap_height)` using the
    /// current screen height. Existing entries are never touched.
    pub fn ensure_generated_up_to(
        &mut self,
        index: u32,
        screen_height: u32,
        gap_height: u32,
    ) -> &[u32] {
        let wanted = index as usize + 1;
        while self.heights.len() < wanted {
            let h = self.rng.next_gap_top(screen_height, gap_height);
            log::trace!("generated pipe {} gap_top={}", self.heights.len(), h);
            self.heights.push(h);
        }
        &self.heights
    }

    /// Drop every generated pipe. The RNG stream continues where it left off.
    pub fn clear(&mut self) {
        self.heights.clear();
    }
}

impl Default for PipeField {
    fn default() -> Self {
        Self::new(GapRng::default())
    }
}

/// Top and bottom obstacle of a single pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeBoxes {
    pub top: Rect,
    pub bottom: Rect,
}

/// Screen-space x of pipe `index`'s left edge.
#[inline]
pub fn pipe_left(index: u32, distance: f32, tuning: &Tuning) -> f32 {
    index as f32 * tuning.pipe_period() - distance.floor()
}

/// Bounding boxes of pipe `index` with gap-top `gap_top`.
pub fn pipe_boxes(
    index: u32,
    gap_top: u32,
    distance: f32,
    screen_height: u32,
    tuning: &Tuning,
) -> PipeBoxes {
    let left = pipe_left(index, distance, tuning);
    let right = left + tuning.pipe_width as f32;
    let gap_top = gap_top as f32;
    PipeBoxes {
        top: Rect::new(left, 0.0, right, gap_top),
        bottom: Rect::new(
            left,
            gap_top + tuning.pipe_opening_height as f32,
            right,
            screen_height as f32,
        ),
    }
}

/// Candidate pipe indices for drawing and collision testing.
///
/// The window deliberately reaches one screen behind and two screens ahead:
/// `[floor((d - W) / P), floor((d + 2W) / P))`, clamped to non-negative
/// indices. Screens narrower than one pipe period use the period as `W` so a
/// pipe straddling the right edge is never missed.
pub fn visible_range(distance: f32, screen_width: u32, tuning: &Tuning) -> Range<u32> {
    let period = tuning.pipe_period();
    let reach = (screen_width as f32).max(period);
    let low = ((distance - reach) / period).floor().max(0.0) as u32;
    let high = ((distance + 2.0 * reach) / period).floor().max(0.0) as u32;
    low..high
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlaps_screen(index: u32, distance: f32, width: u32, tuning: &Tuning) -> bool {
        let left = pipe_left(index, distance, tuning);
        left < width as f32 && left + tuning.pipe_width as f32 > 0.0
    }

    #[test]
    fn generation_is_lazy_and_append_only() {
        let mut field = PipeField::new(GapRng::new(42));
        assert!(field.is_empty());
        assert_eq!(field.height(0), None);

        let first = field.ensure_generated_up_to(3, 960, 350).to_vec();
        assert_eq!(first.len(), 4);

        // Asking again (or for less) changes nothing.
        field.ensure_generated_up_to(1, 960, 350);
        field.ensure_generated_up_to(3, 960, 350);
        assert_eq!(field.heights(), &first[..]);

        // Growing keeps the prefix intact.
        field.ensure_generated_up_to(9, 960, 350);
        assert_eq!(field.len(), 10);
        assert_eq!(&field.heights()[..4], &first[..]);
    }

    #[test]
    fn generated_heights_respect_current_screen_height() {
        let mut field = PipeField::new(GapRng::new(5));
        field.ensure_generated_up_to(199, 600, 350);
        assert!(field.heights().iter().all(|&h| h < 250));

        // Existing pipes keep their offsets after the screen grows.
        let before = field.heights().to_vec();
        field.ensure_generated_up_to(299, 2000, 350);
        assert_eq!(&field.heights()[..200], &before[..]);
        assert!(field.heights()[200..].iter().all(|&h| h < 1650));
    }

    #[test]
    fn clear_empties_the_field() {
        let mut field = PipeField::new(GapRng::new(5));
        field.ensure_generated_up_to(4, 960, 350);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.seed(), 5);
    }

    #[test]
    fn pipe_left_uses_floored_distance() {
        let t = Tuning::default();
        assert_eq!(pipe_left(0, 0.0, &t), 0.0);
        assert_eq!(pipe_left(1, 0.0, &t), 600.0);
        assert_eq!(pipe_left(1, 10.7, &t), 590.0);
        assert_eq!(pipe_left(0, -0.5, &t), 1.0);
        assert_eq!(pipe_left(2, -1000.0, &t), 2200.0);
    }

    #[test]
    fn pipe_boxes_frame_the_gap() {
        let t = Tuning::default();
        let b = pipe_boxes(1, 200, 100.0, 960, &t);
        assert_eq!(b.top, Rect::new(500.0, 0.0, 600.0, 200.0));
        assert_eq!(b.bottom, Rect::new(500.0, 550.0, 600.0, 960.0));
    }

    #[test]
    fn visible_range_matches_window_formula() {
        let t = Tuning::default();
        // d=3000, W=1600: low=floor(1400/600)=2, high=floor(6200/600)=10
        assert_eq!(visible_range(3000.0, 1600, &t), 2..10);
        // Start of a run: everything negative clamps to zero.
        assert_eq!(visible_range(-1000.0, 1600, &t), 0..3);
        assert_eq!(visible_range(-5000.0, 1600, &t), 0..0);
    }

    #[test]
    fn visible_range_covers_every_on_screen_pipe() {
        let t = Tuning::default();
        for &width in &[80u32, 300, 599, 600, 1024, 1600, 3000] {
            let mut d = -2000.0f32;
            while d < 8000.0 {
                let range = visible_range(d, width, &t);
                assert!(range.start <= range.end);
                for i in 0..40u32 {
                    if overlaps_screen(i, d, width, &t) {
                        assert!(
                            range.contains(&i),
                            "pipe {} on screen at d={} w={} but range={:?}",
                            i,
                            d,
                            width,
                            range
                        );
                    }
                }
                d += 37.25;
            }
        }
    }
}
