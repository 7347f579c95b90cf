//! Shard assembly animation.
//!
//! A fixed pool of shards flies from scattered seed positions into a compact
//! formation. Seed, target, and phase are randomized once when the pool is
//! built and never change afterwards; every per-frame quantity is a pure
//! function of those records and the elapsed time handed in by the scene
//! loop. Sampling the same pool at the same instant therefore always
//! produces the same instance data.
//!
//! # Example
//!
//! ```ignore
//! use shards::assembly::{AssemblyConfig, ShardPool};
//!
//! let mut pool = ShardPool::new(&AssemblyConfig::default());
//!
//! // In your render loop:
//! let instances = pool.sample(elapsed);
//! // upload `instances` in one buffer write
//! ```

use bytemuck::Zeroable;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ease::ease_out_cubic;
use crate::shader::ShardInstance;

/// Portion of the timeline over which shard start times are spread.
const STAGGER_WINDOW: f32 = 0.6;
/// Shards shrink to this floor as they arrive.
const MIN_SCALE: f32 = 0.1;
/// Hue once a shard has settled.
const HUE_SETTLED: f32 = 0.65;
/// Extra hue while a shard is still in flight.
const HUE_FLIGHT_SHIFT: f32 = 0.2;

/// Pool-construction parameters.
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// Number of shards in the pool.
    pub count: u32,
    /// Time units from a shard's start until it reaches its target.
    pub duration: f32,
    /// Half-size of the cube seed positions scatter across.
    pub scatter: f32,
    /// Half-size of the cube the formation settles into.
    pub formation: f32,
    /// Base half-size of one shard in world units.
    pub shard_size: f32,
    /// Saturation of the shard colors.
    pub saturation: f32,
    /// Lightness of the shard colors.
    pub lightness: f32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            count: 1200,
            duration: 2.6,
            scatter: 9.0,
            formation: 1.4,
            shard_size: 0.06,
            saturation: 0.65,
            lightness: 0.62,
        }
    }
}

/// Immutable per-shard parameters, fixed at pool construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShardParams {
    /// Scattered starting position.
    pub seed: Vec3,
    /// Position inside the final formation.
    pub target: Vec3,
    /// Start-time stagger in [0, 1).
    pub phase: f32,
}

/// A fixed pool of shards plus the instance array rewritten each frame.
pub struct ShardPool {
    config: AssemblyConfig,
    params: Vec<ShardParams>,
    instances: Vec<ShardInstance>,
}

impl ShardPool {
    /// Build a pool with freshly randomized parameters.
    pub fn new(config: &AssemblyConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Build a pool from a fixed RNG seed.
    ///
    /// Two pools built with the same config and seed sample identically.
    pub fn with_rng_seed(config: &AssemblyConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: &AssemblyConfig, mut rng: SmallRng) -> Self {
        let params = (0..config.count)
            .map(|_| ShardParams {
                seed: random_in_cube(&mut rng, config.scatter),
                target: random_in_cube(&mut rng, config.formation),
                phase: rng.gen_range(0.0..1.0),
            })
            .collect();
        Self::from_params(config, params)
    }

    /// Build a pool from explicit parameter records.
    pub fn from_params(config: &AssemblyConfig, params: Vec<ShardParams>) -> Self {
        let instances = vec![ShardInstance::zeroed(); params.len()];
        Self {
            config: config.clone(),
            params,
            instances,
        }
    }

    /// Number of shards in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The immutable parameter records.
    pub fn params(&self) -> &[ShardParams] {
        &self.params
    }

    /// Recompute every shard instance for the given elapsed time.
    ///
    /// Returns the full instance array; the caller uploads it in one
    /// contiguous buffer write. A shard whose progress has reached 1 sits
    /// exactly at its target with minimum scale and settled color, and stays
    /// there for every later elapsed value.
    pub fn sample(&mut self, elapsed: f32) -> &[ShardInstance] {
        let duration = self.config.duration;
        for (shard, out) in self.params.iter().zip(self.instances.iter_mut()) {
            let progress =
                ((elapsed - shard.phase * STAGGER_WINDOW) / duration).clamp(0.0, 1.0);

            let position = shard.seed.lerp(shard.target, ease_out_cubic(progress));
            let scale = (1.0 - progress * 0.9).max(MIN_SCALE);

            // Spin runs on the shard's local animation time, which stops
            // growing at `duration`; resampling after arrival is a no-op.
            let spin = progress * duration;
            let rotation = Vec3::new(
                position.y * 1.7 + spin * 0.9,
                position.x * 1.7 + spin * 1.3,
                position.z * 1.7 + spin * 0.6,
            );

            let hue = HUE_SETTLED + HUE_FLIGHT_SHIFT * (1.0 - progress);
            let color = hsl_to_rgb(hue, self.config.saturation, self.config.lightness);

            *out = ShardInstance {
                position: position.to_array(),
                scale,
                rotation: rotation.to_array(),
                half_size: self.config.shard_size,
                color: color.to_array(),
                _pad: 0.0,
            };
        }
        &self.instances
    }
}

/// Random point inside a cube of given half-size, centered at origin.
fn random_in_cube(rng: &mut SmallRng, half_size: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_size..half_size),
        rng.gen_range(-half_size..half_size),
        rng.gen_range(-half_size..half_size),
    )
}

/// Convert HSL to RGB. Hue wraps at 1.0.
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_shard_pool(phase: f32) -> ShardPool {
        let config = AssemblyConfig {
            count: 1,
            ..Default::default()
        };
        ShardPool::from_params(
            &config,
            vec![ShardParams {
                seed: Vec3::new(4.0, -3.0, 7.5),
                target: Vec3::new(0.2, 0.6, -0.4),
                phase,
            }],
        )
    }

    #[test]
    fn test_starts_at_seed() {
        let mut pool = single_shard_pool(0.0);
        let instance = pool.sample(0.0)[0];
        assert_eq!(instance.position, [4.0, -3.0, 7.5]);
        assert_eq!(instance.scale, 1.0);
    }

    #[test]
    fn test_arrives_at_target() {
        let mut pool = single_shard_pool(0.0);
        let instance = pool.sample(2.6)[0];
        for (got, want) in instance.position.iter().zip([0.2, 0.6, -0.4]) {
            assert!((got - want).abs() < 1e-6, "position {:?}", instance.position);
        }
        assert_eq!(instance.scale, MIN_SCALE);
    }

    #[test]
    fn test_idempotent_after_arrival() {
        let mut pool = single_shard_pool(0.0);
        let at_arrival = pool.sample(2.6)[0];
        let long_after = pool.sample(5.2)[0];
        assert_eq!(at_arrival, long_after);
    }

    #[test]
    fn test_phase_delays_start() {
        let mut pool = single_shard_pool(0.5);
        // Still at the seed until the stagger window has passed.
        let instance = pool.sample(0.25)[0];
        assert_eq!(instance.position, [4.0, -3.0, 7.5]);
    }

    #[test]
    fn test_scale_stays_bounded() {
        let config = AssemblyConfig {
            count: 200,
            ..Default::default()
        };
        let mut pool = ShardPool::with_rng_seed(&config, 11);
        for step in 0..40 {
            let elapsed = step as f32 * 0.2;
            for instance in pool.sample(elapsed) {
                assert!(instance.scale >= MIN_SCALE && instance.scale <= 1.0);
            }
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let config = AssemblyConfig {
            count: 300,
            ..Default::default()
        };
        let mut a = ShardPool::with_rng_seed(&config, 42);
        let mut b = ShardPool::with_rng_seed(&config, 42);
        assert_eq!(a.params(), b.params());
        for elapsed in [0.0, 0.7, 1.9, 2.6, 10.0] {
            assert_eq!(a.sample(elapsed), b.sample(elapsed));
        }
    }

    #[test]
    fn test_pool_respects_volumes() {
        let config = AssemblyConfig {
            count: 500,
            scatter: 5.0,
            formation: 1.0,
            ..Default::default()
        };
        let pool = ShardPool::with_rng_seed(&config, 3);
        for shard in pool.params() {
            assert!(shard.seed.abs().max_element() <= 5.0);
            assert!(shard.target.abs().max_element() <= 1.0);
            assert!((0.0..1.0).contains(&shard.phase));
        }
    }

    #[test]
    fn test_hsl_to_rgb() {
        // Full-saturation red at the hue origin.
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red.x - 1.0).abs() < 0.001);
        assert!(red.y < 0.001);
        assert!(red.z < 0.001);

        // Zero saturation collapses to gray at the lightness level.
        let gray = hsl_to_rgb(0.3, 0.0, 0.62);
        assert!((gray.x - 0.62).abs() < 0.001);
        assert!((gray.x - gray.y).abs() < 0.001);
        assert!((gray.y - gray.z).abs() < 0.001);
    }

    #[test]
    fn test_color_settles_with_progress() {
        let mut pool = single_shard_pool(0.0);
        let arriving = pool.sample(0.0)[0].color;
        let settled = pool.sample(2.6)[0].color;
        assert_ne!(arriving, settled);
        // Same shard, same instant: color is reproducible.
        assert_eq!(pool.sample(2.6)[0].color, settled);
    }
}
