//! Pointer parallax for the scene group.
//!
//! Eases the group's rotation toward the pointer each frame instead of
//! snapping to it. The default mode applies a fixed 3% of the remaining
//! distance per frame, which ties convergence speed to the display refresh
//! rate; [`Smoothing::TimeScaled`] trades that behavior for frame-rate
//! independence.

use glam::{EulerRot, Mat4, Vec2};

use crate::ease::lerp;

/// Pitch gain applied to the pointer's vertical axis.
const PITCH_GAIN: f32 = 0.2;
/// Yaw gain applied to the pointer's horizontal axis.
const YAW_GAIN: f32 = 0.4;

/// How the rotation chases its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Fixed fraction of the remaining distance per frame.
    ///
    /// Convergence speed follows the display refresh rate.
    PerFrame(f32),
    /// Exponential decay scaled by delta time.
    TimeScaled {
        /// Decay rate per second.
        rate: f32,
    },
}

impl Smoothing {
    /// Rate for [`Smoothing::TimeScaled`] that matches `PerFrame(0.03)`
    /// at 60 Hz.
    pub const MATCHED_RATE_60HZ: f32 = 1.827;

    /// Blend factor for one frame.
    fn factor(self, delta: f32) -> f32 {
        match self {
            Smoothing::PerFrame(fraction) => fraction,
            Smoothing::TimeScaled { rate } => 1.0 - (-rate * delta).exp(),
        }
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::PerFrame(0.03)
    }
}

/// Smoothed rotation of the scene group toward the pointer.
#[derive(Debug, Default)]
pub struct ParallaxRig {
    smoothing: Smoothing,
    /// Current (pitch, yaw) in radians.
    rotation: Vec2,
}

impl ParallaxRig {
    /// Create a rig at rest.
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            rotation: Vec2::ZERO,
        }
    }

    /// Rotation the rig converges to for a given pointer position.
    pub fn target(pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.y * PITCH_GAIN, pointer.x * YAW_GAIN)
    }

    /// Ease toward the pointer.
    ///
    /// Call once per frame with the frame's pointer snapshot and delta time.
    /// There is no terminal state; the rig keeps tracking indefinitely.
    pub fn advance(&mut self, pointer: Vec2, delta: f32) {
        let target = Self::target(pointer);
        let factor = self.smoothing.factor(delta);
        self.rotation.x = lerp(self.rotation.x, target.x, factor);
        self.rotation.y = lerp(self.rotation.y, target.y, factor);
    }

    /// Current (pitch, yaw) rotation in radians.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Group matrix for the composer.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_gains() {
        let target = ParallaxRig::target(Vec2::new(1.0, -0.5));
        assert_eq!(target, Vec2::new(-0.1, 0.4));
    }

    #[test]
    fn test_distance_strictly_decreases() {
        let mut rig = ParallaxRig::new(Smoothing::PerFrame(0.03));
        let pointer = Vec2::new(0.8, -0.6);
        let target = ParallaxRig::target(pointer);

        let mut distance = (target - rig.rotation()).length();
        for _ in 0..200 {
            rig.advance(pointer, 1.0 / 60.0);
            let next = (target - rig.rotation()).length();
            assert!(next < distance, "convergence must be monotonic");
            distance = next;
        }
        assert!(distance < 1e-3);
    }

    #[test]
    fn test_geometric_convergence_factor() {
        let mut rig = ParallaxRig::new(Smoothing::PerFrame(0.03));
        let pointer = Vec2::new(1.0, 1.0);
        let target = ParallaxRig::target(pointer);

        rig.advance(pointer, 1.0 / 60.0);
        let d1 = (target - rig.rotation()).length();
        rig.advance(pointer, 1.0 / 60.0);
        let d2 = (target - rig.rotation()).length();

        assert!((d2 / d1 - 0.97).abs() < 1e-4);
    }

    #[test]
    fn test_time_scaled_matches_per_frame_at_60hz() {
        let per_frame = Smoothing::PerFrame(0.03).factor(1.0 / 60.0);
        let time_scaled = Smoothing::TimeScaled {
            rate: Smoothing::MATCHED_RATE_60HZ,
        }
        .factor(1.0 / 60.0);
        assert!((per_frame - time_scaled).abs() < 1e-3);
    }

    #[test]
    fn test_time_scaled_is_frame_rate_independent() {
        let rate = Smoothing::MATCHED_RATE_60HZ;
        let pointer = Vec2::new(1.0, 0.0);

        // One 30 Hz step covers the same ground as two 60 Hz steps.
        let mut slow = ParallaxRig::new(Smoothing::TimeScaled { rate });
        slow.advance(pointer, 1.0 / 30.0);

        let mut fast = ParallaxRig::new(Smoothing::TimeScaled { rate });
        fast.advance(pointer, 1.0 / 60.0);
        fast.advance(pointer, 1.0 / 60.0);

        assert!((slow.rotation().y - fast.rotation().y).abs() < 1e-4);
    }

    #[test]
    fn test_matrix_identity_at_rest() {
        let rig = ParallaxRig::new(Smoothing::default());
        assert_eq!(rig.matrix(), Mat4::IDENTITY);
    }
}
