//! # Steady Parallax
//!
//! Uses the time-scaled smoothing mode, so the group converges toward the
//! pointer at the same speed on a 60 Hz laptop panel and a 144 Hz display.
//! The post chain is disabled to show the raw scene pass.
//!
//! Run with: `cargo run --example steady_parallax`

use shards::prelude::*;

fn main() -> Result<(), SceneError> {
    Scene::new()
        .with_title("Shards: Steady Parallax")
        .with_smoothing(Smoothing::TimeScaled {
            rate: Smoothing::MATCHED_RATE_60HZ,
        })
        .with_style(Style {
            post: None,
            ..Default::default()
        })
        .run()
}
