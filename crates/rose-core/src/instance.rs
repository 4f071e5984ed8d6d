//! Packing of computed transforms into GPU-ready instance records.
//!
//! This is the only place that knows about buffer layout; everything upstream
//! works with `Transform`/`Mat4` values.

use crate::constants::PARTICLE_OPACITY;
use crate::theme::Rgb;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub const FLOATS: usize = 20;

    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }
}

/// Per-frame instance lists, one per mesh kind the renderer draws.
#[derive(Clone, Debug, Default)]
pub struct InstanceBuffers {
    pub petals: Vec<InstanceRaw>,
    pub skeleton: Vec<InstanceRaw>,
    pub glows: Vec<InstanceRaw>,
    /// Emissive strength per glow, parallel to `glows`.
    pub blooms: Vec<f32>,
    pub particles: Vec<InstanceRaw>,
}

impl InstanceBuffers {
    pub fn with_capacity(petals: usize, skeleton: usize, glows: usize, particles: usize) -> Self {
        Self {
            petals: Vec::with_capacity(petals),
            skeleton: Vec::with_capacity(skeleton),
            glows: Vec::with_capacity(glows),
            blooms: Vec::with_capacity(glows),
            particles: Vec::with_capacity(particles),
        }
    }

    pub fn clear(&mut self) {
        self.petals.clear();
        self.skeleton.clear();
        self.glows.clear();
        self.blooms.clear();
        self.particles.clear();
    }

    pub fn push_petal(&mut self, model: Mat4, color: Rgb, hovered: bool) {
        let c = if hovered { Rgb::WHITE } else { color };
        self.petals.push(InstanceRaw::new(model, c.with_alpha(1.0)));
    }

    pub fn push_skeleton(&mut self, model: Mat4, trunk: Rgb) {
        self.skeleton.push(InstanceRaw::new(model, trunk.with_alpha(1.0)));
    }

    pub fn push_glow(&mut self, model: Mat4, bloom_intensity: f32) {
        self.glows.push(InstanceRaw::new(model, Rgb::WHITE.with_alpha(1.0)));
        self.blooms.push(bloom_intensity);
    }

    pub fn push_particle(&mut self, model: Mat4, color: Rgb) {
        self.particles
            .push(InstanceRaw::new(model, color.with_alpha(PARTICLE_OPACITY)));
    }
}

/// Reinterpret instance records as a flat float slice for upload.
#[inline]
pub fn as_floats(instances: &[InstanceRaw]) -> &[f32] {
    bytemuck::cast_slice(instances)
}
