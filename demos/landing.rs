//! # Landing Scene
//!
//! The full composed scene: a dense shard pool assembling out of the dark
//! while the group follows the pointer and two satin panels flip with
//! scroll.
//!
//! Run with: `cargo run --example landing`

use shards::prelude::*;

fn main() -> Result<(), SceneError> {
    Scene::new()
        .with_title("Shards: Landing")
        .with_assembly(AssemblyConfig {
            count: 1200,
            duration: 2.6,
            scatter: 9.0,
            formation: 1.4,
            ..Default::default()
        })
        .with_pages(3)
        .with_style(Style {
            background: Vec3::new(0.03, 0.02, 0.06),
            panels: [
                Panel {
                    offset: Vec2::new(-1.7, 0.3),
                    half_size: 0.9,
                    color: Vec3::new(0.86, 0.76, 0.92),
                },
                Panel {
                    offset: Vec2::new(1.7, -0.4),
                    half_size: 0.9,
                    color: Vec3::new(0.93, 0.64, 0.74),
                },
            ],
            post: Some(PostSettings {
                bloom: 0.7,
                defocus: 1.8,
                grain: 0.05,
                vignette: 0.5,
            }),
        })
        .run()
}
