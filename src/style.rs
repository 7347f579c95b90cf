//! Static visual configuration for the composed scene.
//!
//! Everything here is fixed at build time: palette, panel placement, and
//! post-chain parameters are configuration, not per-frame computation.
//!
//! # Usage
//!
//! ```ignore
//! Scene::new()
//!     .with_style(Style {
//!         background: Vec3::new(0.03, 0.02, 0.06),
//!         post: Some(PostSettings { bloom: 0.7, ..Default::default() }),
//!         ..Default::default()
//!     })
//!     .run()
//! ```

use glam::{Vec2, Vec3};

/// A decorative panel flipped by the scroll transformer.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    /// Resting position in the XY plane; depth comes from the scroll
    /// transform each frame.
    pub offset: Vec2,
    /// Half-size in world units.
    pub half_size: f32,
    /// Flat albedo color.
    pub color: Vec3,
}

/// Post-processing parameters, baked into the fullscreen pass at pipeline
/// creation.
#[derive(Debug, Clone, Copy)]
pub struct PostSettings {
    /// Strength of the bright-pass bloom gather.
    pub bloom: f32,
    /// Radial defocus toward the frame edges.
    pub defocus: f32,
    /// Animated film grain amount.
    pub grain: f32,
    /// Edge darkening strength.
    pub vignette: f32,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            bloom: 0.55,
            defocus: 1.6,
            grain: 0.04,
            vignette: 0.45,
        }
    }
}

/// Scene-wide visual style.
#[derive(Debug, Clone)]
pub struct Style {
    /// Clear color behind the shards.
    pub background: Vec3,
    /// The two decorative panels driven by scroll.
    pub panels: [Panel; 2],
    /// Post-chain parameters, or `None` to present the scene pass directly.
    pub post: Option<PostSettings>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Vec3::new(0.02, 0.02, 0.05),
            panels: [
                Panel {
                    offset: Vec2::new(-1.6, 0.2),
                    half_size: 0.85,
                    color: Vec3::new(0.82, 0.74, 0.88),
                },
                Panel {
                    offset: Vec2::new(1.6, -0.3),
                    half_size: 0.85,
                    color: Vec3::new(0.9, 0.62, 0.72),
                },
            ],
            post: Some(PostSettings::default()),
        }
    }
}
