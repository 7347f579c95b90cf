//! Pointer tracking over window events.
//!
//! Normalizes the cursor to [-1, 1] on each axis (origin at the window
//! center, Y up) and routes wheel deltas to the scroll tracker. The event
//! loop is the only writer; animators read one snapshot per frame.

use glam::Vec2;
use winit::dpi::PhysicalSize;
use winit::event::{MouseScrollDelta, WindowEvent};

use crate::scroll::ScrollTracker;

/// Tracks the cursor in window and normalized coordinates.
#[derive(Debug)]
pub struct PointerTracker {
    /// Cursor position in physical pixels.
    position: Vec2,
    /// Cursor position in [-1, 1] on each axis, Y up.
    ndc: Vec2,
    /// Window size for normalization.
    window_size: (u32, u32),
}

impl PointerTracker {
    /// Create a tracker. The size is corrected on the first resize event.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            ndc: Vec2::ZERO,
            window_size: (1280, 720),
        }
    }

    /// Cursor position in physical pixels.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Cursor position in normalized device coordinates (-1 to 1).
    ///
    /// Origin is at the center of the window. X increases to the right,
    /// Y increases upward.
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Update the window size used for normalization.
    pub(crate) fn set_window_size(&mut self, size: PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.window_size = (size.width, size.height);
            self.recompute_ndc();
        }
    }

    /// Route a window event into pointer and scroll state.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent, scroll: &mut ScrollTracker) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Vec2::new(position.x as f32, position.y as f32);
                self.recompute_ndc();
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => scroll.feed_lines(*y),
                MouseScrollDelta::PixelDelta(pos) => scroll.feed_pixels(pos.y as f32),
            },
            _ => {}
        }
    }

    fn recompute_ndc(&mut self) {
        let (w, h) = self.window_size;
        self.ndc = Vec2::new(
            (self.position.x / w as f32) * 2.0 - 1.0,
            1.0 - (self.position.y / h as f32) * 2.0, // Y flipped
        );
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_origin() {
        let mut tracker = PointerTracker::new();
        tracker.set_window_size(PhysicalSize::new(800, 600));

        // Simulate a cursor move via direct state (normally handle_event).
        tracker.position = Vec2::new(400.0, 300.0);
        tracker.recompute_ndc();

        assert!(tracker.ndc().x.abs() < 0.01);
        assert!(tracker.ndc().y.abs() < 0.01);
    }

    #[test]
    fn test_corners_normalize() {
        let mut tracker = PointerTracker::new();
        tracker.set_window_size(PhysicalSize::new(800, 600));

        tracker.position = Vec2::new(0.0, 0.0);
        tracker.recompute_ndc();
        assert_eq!(tracker.ndc(), Vec2::new(-1.0, 1.0));

        tracker.position = Vec2::new(800.0, 600.0);
        tracker.recompute_ndc();
        assert_eq!(tracker.ndc(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_resize_renormalizes() {
        let mut tracker = PointerTracker::new();
        tracker.set_window_size(PhysicalSize::new(800, 600));
        tracker.position = Vec2::new(800.0, 300.0);
        tracker.recompute_ndc();
        assert_eq!(tracker.ndc().x, 1.0);

        tracker.set_window_size(PhysicalSize::new(1600, 600));
        assert_eq!(tracker.ndc().x, 0.0);
    }

    #[test]
    fn test_zero_size_is_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.set_window_size(PhysicalSize::new(0, 0));
        assert_eq!(tracker.window_size, (1280, 720));
    }
}
