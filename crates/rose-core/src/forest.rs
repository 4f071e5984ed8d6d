//! Setup-time scattering of rose trees across a ring-shaped disk.

use crate::constants::{
    FOREST_COUNT, FOREST_INNER_RADIUS, FOREST_RADIUS, GROUND_Y, HERO_BLOOM_INTENSITY, HERO_SCALE,
    HERO_STEM_LENGTH, PRIMARY_COLOR_CHANCE, SEED_MIX, TREE_HEIGHT_SPAN, TREE_MIN_HEIGHT,
    TREE_MIN_SCALE, TREE_SCALE_SPAN,
};
use crate::tree::{ColorVariant, TreeSpec};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForestParams {
    pub count: usize,
    pub inner_radius: f32,
    pub radius: f32,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            count: FOREST_COUNT,
            inner_radius: FOREST_INNER_RADIUS,
            radius: FOREST_RADIUS,
        }
    }
}

/// Scatter `params.count` trees. The square root on the radial draw keeps the
/// areal density uniform instead of clustering trees near the middle.
pub fn generate_forest_with<R: Rng + ?Sized>(rng: &mut R, params: &ForestParams) -> Vec<TreeSpec> {
    (0..params.count)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let r = params.inner_radius + rng.gen::<f32>().sqrt() * params.radius;
            let stem_length = TREE_MIN_HEIGHT + rng.gen::<f32>() * TREE_HEIGHT_SPAN;
            let scale = TREE_MIN_SCALE + rng.gen::<f32>() * TREE_SCALE_SPAN;
            let color = if rng.gen_bool(PRIMARY_COLOR_CHANCE) {
                ColorVariant::Primary
            } else {
                ColorVariant::Secondary
            };
            TreeSpec {
                position: Vec3::new(r * angle.cos(), GROUND_Y, r * angle.sin()),
                color,
                scale,
                stem_length,
                ..TreeSpec::default()
            }
        })
        .collect()
}

/// Default-sized forest; reproducible when `seed` is given.
pub fn generate_forest(seed: Option<u64>) -> Vec<TreeSpec> {
    let mut rng = seeded_rng(seed, 1);
    generate_forest_with(&mut rng, &ForestParams::default())
}

/// The large tree standing at the center of the forest.
pub fn hero_tree() -> TreeSpec {
    TreeSpec {
        position: Vec3::new(0.0, GROUND_Y, 0.0),
        color: ColorVariant::Primary,
        scale: HERO_SCALE,
        stem_length: HERO_STEM_LENGTH,
        bloom_intensity: HERO_BLOOM_INTENSITY,
    }
}

/// Derive an independent generator per consumer (`stream`) from one base seed.
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s ^ stream.wrapping_mul(SEED_MIX)),
        None => StdRng::from_entropy(),
    }
}
