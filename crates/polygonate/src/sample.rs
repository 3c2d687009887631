//! Reproducible random point clouds (tests, benches, examples).
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so individual draws are indexable without sharing RNG state.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    /// The cloud spans `[0, extent]` on both axes.
    pub extent: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 20,
            extent: 1.0,
        }
    }
}

/// Draw `cfg.count` points uniformly in the square.
pub fn draw_points_uniform(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            Vector2::new(
                rng.gen::<f64>() * cfg.extent,
                rng.gen::<f64>() * cfg.extent,
            )
        })
        .collect()
}
