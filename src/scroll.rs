//! Scroll virtualization and the scroll-linked flip transform.
//!
//! Wheel input accumulates into a target offset across a fixed number of
//! virtual pages; the published offset eases toward that target with
//! exponential damping so panel flips never snap. The flip transform itself
//! is a pure function of the published offset.

use std::f32::consts::{PI, TAU};

/// Wheel lines that amount to one virtual page.
const LINES_PER_PAGE: f32 = 24.0;
/// Wheel pixels that amount to one virtual page.
const PIXELS_PER_PAGE: f32 = 640.0;

/// Accumulates scroll input and publishes a damped offset in [0, 1].
///
/// The event loop is the only writer; animators read one snapshot per frame
/// via [`ScrollTracker::offset`].
#[derive(Debug)]
pub struct ScrollTracker {
    /// Scrollable distance in page heights (pages - 1).
    span: f32,
    /// Exponential damping rate for the published offset.
    damping: f32,
    /// Clamped accumulation of wheel input.
    target: f32,
    /// The damped offset animators read.
    offset: f32,
}

impl ScrollTracker {
    /// Track scrolling across `pages` virtual pages.
    ///
    /// Offset 0 is the top of the first page, 1 the bottom of the last.
    pub fn new(pages: u32) -> Self {
        Self {
            span: (pages.saturating_sub(1)).max(1) as f32,
            damping: 6.0,
            target: 0.0,
            offset: 0.0,
        }
    }

    /// Change the damping rate. Higher values track the wheel more tightly.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.max(0.0);
    }

    /// Feed a wheel line delta (positive = scroll up).
    pub fn feed_lines(&mut self, delta: f32) {
        self.push(-delta / (LINES_PER_PAGE * self.span));
    }

    /// Feed a wheel pixel delta (positive = scroll up).
    pub fn feed_pixels(&mut self, delta: f32) {
        self.push(-delta / (PIXELS_PER_PAGE * self.span));
    }

    fn push(&mut self, normalized: f32) {
        self.target = (self.target + normalized).clamp(0.0, 1.0);
    }

    /// Ease the published offset toward the accumulated target.
    ///
    /// Call once per frame before animators take their snapshot.
    pub fn advance(&mut self, delta: f32) {
        let factor = 1.0 - (-self.damping * delta).exp();
        self.offset += (self.target - self.offset) * factor;
    }

    /// The damped offset animators read.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The clamped target the offset converges to.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }
}

/// Rotation and depth for a scroll-flipped panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipTransform {
    /// Rotation around the Y axis in radians.
    pub rotation_y: f32,
    /// Depth position: -2 at the top of the range, 0 at the bottom.
    pub position_z: f32,
}

impl FlipTransform {
    /// Evaluate the transform at scroll offset `s` in [0, 1].
    ///
    /// The rotation completes a full sine period across the scroll range:
    /// zero at both ends and at the midpoint, `±π` at the quarter points.
    /// Depth rises linearly from -2 to 0. No internal state, no hysteresis.
    pub fn at(s: f32) -> Self {
        let s = s.clamp(0.0, 1.0);
        let flip = (s * TAU).sin();
        Self {
            rotation_y: flip * PI,
            position_z: -2.0 + s * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_closed_forms() {
        let top = FlipTransform::at(0.0);
        assert_eq!(top.rotation_y, 0.0);
        assert_eq!(top.position_z, -2.0);

        let quarter = FlipTransform::at(0.25);
        assert!((quarter.rotation_y - PI).abs() < 1e-6);
        assert!((quarter.position_z - (-1.5)).abs() < 1e-6);

        let half = FlipTransform::at(0.5);
        assert!(half.rotation_y.abs() < 1e-6);
        assert!((half.position_z - (-1.0)).abs() < 1e-6);

        let bottom = FlipTransform::at(1.0);
        assert!(bottom.rotation_y.abs() < 1e-5);
        assert!(bottom.position_z.abs() < 1e-6);
    }

    #[test]
    fn test_flip_clamps_input() {
        assert_eq!(FlipTransform::at(-3.0), FlipTransform::at(0.0));
        assert_eq!(FlipTransform::at(7.0), FlipTransform::at(1.0));
    }

    #[test]
    fn test_tracker_clamps_target() {
        let mut tracker = ScrollTracker::new(3);
        tracker.feed_lines(-10_000.0);
        assert_eq!(tracker.target(), 1.0);
        tracker.feed_lines(10_000.0);
        assert_eq!(tracker.target(), 0.0);
    }

    #[test]
    fn test_scrolling_down_advances() {
        let mut tracker = ScrollTracker::new(3);
        // Wheel down reports negative line deltas.
        tracker.feed_lines(-3.0);
        assert!(tracker.target() > 0.0);
    }

    #[test]
    fn test_offset_converges_to_target() {
        let mut tracker = ScrollTracker::new(3);
        tracker.feed_pixels(-10_000.0);
        assert_eq!(tracker.offset(), 0.0);

        let mut last = 0.0;
        for _ in 0..300 {
            tracker.advance(1.0 / 60.0);
            assert!(tracker.offset() >= last);
            last = tracker.offset();
        }
        assert!((tracker.offset() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_single_page_has_no_scroll_range() {
        // Degenerate configuration: the span clamps instead of dividing by
        // zero, and the offset stays well-defined.
        let mut tracker = ScrollTracker::new(1);
        tracker.feed_lines(-5.0);
        tracker.advance(1.0);
        assert!(tracker.offset() >= 0.0 && tracker.offset() <= 1.0);
    }
}
