//! # Shards
//!
//! Pointer- and scroll-driven particle assembly scenes on the GPU.
//!
//! A fixed pool of shards flies from scattered seed positions into a compact
//! formation, the whole group eases toward the pointer, two decorative
//! panels flip and rise with scroll, and every frame is composited through a
//! fixed post chain (bloom, defocus, grain, vignette).
//!
//! ## Quick Start
//!
//! ```ignore
//! use shards::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     Scene::new()
//!         .with_assembly(AssemblyConfig {
//!             count: 1200,
//!             duration: 2.6,
//!             ..Default::default()
//!         })
//!         .with_pages(3)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Pure animators
//!
//! All three animators are plain CPU code with no hidden clocks: the scene
//! loop hands them `elapsed`, `delta`, and the frame's input snapshot, and
//! they return transforms. Sampling the shard pool twice at the same elapsed
//! value produces identical output, which is what the tests lean on.
//!
//! | Animator | Input | Output |
//! |----------|-------|--------|
//! | [`assembly::ShardPool`] | elapsed time | instance array (one transform + color per shard) |
//! | [`parallax::ParallaxRig`] | pointer NDC, delta | group rotation matrix |
//! | [`scroll::FlipTransform`] | scroll offset | panel rotation + depth |
//!
//! ### Immutable pool parameters
//!
//! Each shard's seed position, target position, and phase offset are
//! randomized once when the pool is built and never change. Only the derived
//! per-frame instance data is rewritten, in one contiguous buffer upload.
//!
//! ### Frame loop
//!
//! The winit event loop is the single writer of pointer and scroll state;
//! animators read one snapshot per frame inside the redraw callback, so no
//! animator ever observes another's in-progress output.

pub mod assembly;
pub mod ease;
mod error;
mod gpu;
pub mod input;
pub mod parallax;
pub mod scene;
pub mod scroll;
pub mod shader;
pub mod style;
pub mod time;

pub use error::{GpuError, SceneError};
pub use glam::{Vec2, Vec3};
pub use scene::Scene;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use shards::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assembly::{AssemblyConfig, ShardPool, ShardParams};
    pub use crate::ease::ease_out_cubic;
    pub use crate::parallax::{ParallaxRig, Smoothing};
    pub use crate::scene::Scene;
    pub use crate::scroll::{FlipTransform, ScrollTracker};
    pub use crate::style::{Panel, PostSettings, Style};
    pub use crate::time::FrameClock;
    pub use crate::{GpuError, SceneError};
    pub use crate::{Vec2, Vec3};
}
