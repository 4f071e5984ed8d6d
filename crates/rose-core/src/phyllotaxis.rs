//! Golden-angle spiral placement of petals on a canopy.

use crate::constants::{GOLDEN_ANGLE, PETAL_HEIGHT_STEP, PETAL_RADIUS_STEP};
use glam::Vec3;

/// Rest placement of petal `i`. Never mutated by animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalLayout {
    pub theta: f32,
    pub radius: f32,
    pub height: f32,
    pub base_position: Vec3,
}

impl PetalLayout {
    /// Yaw of the petal's local frame so petals fan outward along the spiral.
    #[inline]
    pub fn yaw(&self) -> f32 {
        -self.theta
    }
}

/// Pure placement of petal `i` for a canopy spread of `scale_factor`.
pub fn compute_petal_layout(i: usize, scale_factor: f32) -> PetalLayout {
    let fi = i as f32;
    let theta = fi * GOLDEN_ANGLE;
    let radius = PETAL_RADIUS_STEP * fi.sqrt() * scale_factor;
    let height = (fi + 1.0).ln() * PETAL_HEIGHT_STEP * scale_factor;
    PetalLayout {
        theta,
        radius,
        height,
        base_position: Vec3::new(radius * theta.cos(), height, radius * theta.sin()),
    }
}
