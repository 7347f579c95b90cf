//! # Minimal Scene
//!
//! Everything at its defaults.
//!
//! Run with: `cargo run --example minimal`

use shards::Scene;

fn main() -> Result<(), shards::SceneError> {
    Scene::new().run()
}
