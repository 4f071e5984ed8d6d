//! Fixed-capacity pool of floating petals.
//!
//! Calm mode drifts each petal along a Lissajous-like path driven by its own
//! internal clock `t`; storm mode ignores `t` and places every petal on a
//! time-driven vortex. Only the first `count` slots are stepped each frame;
//! the rest keep their state untouched so density changes are seamless.

use crate::constants::POOL_CAPACITY;
use crate::frame::FrameInput;
use crate::transform::Transform;
use glam::{Mat4, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Per-slot random factors fixed at creation, plus the calm-mode clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleState {
    pub t: f32,
    pub factor: f32,
    pub speed: f32,
    pub x_factor: f32,
    pub y_factor: f32,
    pub z_factor: f32,
    pub storm_offset: f32,
    pub storm_radius: f32,
    /// Orbit displacement hook. Always zero: nothing drives it yet, so the
    /// orbit term in calm mode contributes nothing.
    pub my: f32,
}

impl ParticleState {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            t: rng.gen::<f32>() * 100.0,
            factor: 20.0 + rng.gen::<f32>() * 100.0,
            speed: 0.01 + rng.gen::<f32>() / 200.0,
            x_factor: -10.0 + rng.gen::<f32>() * 20.0,
            y_factor: -5.0 + rng.gen::<f32>() * 10.0,
            z_factor: -10.0 + rng.gen::<f32>() * 20.0,
            storm_offset: rng.gen::<f32>() * TAU,
            storm_radius: 2.0 + rng.gen::<f32>() * 5.0,
            my: 0.0,
        }
    }

    /// Advance the internal clock one call and return the calm-mode pose.
    pub fn step_calm(&mut self) -> Transform {
        self.t += self.speed / 2.0;
        self.calm_pose()
    }

    /// Calm-mode pose at the current `t`, without advancing it.
    pub fn calm_pose(&self) -> Transform {
        let ct = self.t;
        let f = self.factor;
        let a = ct.cos() + ct.sin() / 10.0;
        let b = ct.sin() + (ct * 2.0).cos() / 10.0;
        let s = ct.cos();
        let orbit = self.my / 10.0;
        Transform {
            translation: Vec3::new(
                orbit * a + self.x_factor + (ct / 10.0 * f).cos() + ct.sin() * f / 10.0,
                orbit * b + self.y_factor + (ct / 10.0 * f).sin() + (ct * 2.0).cos() * f / 10.0,
                orbit * b + self.z_factor + (ct / 10.0 * f).cos() + (ct * 3.0).sin() * f / 10.0,
            ),
            rotation: Vec3::splat(s * 5.0),
            scale: Vec3::splat(s),
        }
    }

    /// Vortex pose for slot `i`; a pure function of `time`.
    pub fn storm_pose(&self, i: usize, time: f32) -> Transform {
        let fi = i as f32;
        let angle = time * 2.0 + self.storm_offset + fi * 0.01;
        let radius = self.storm_radius + (time * 3.0 + fi).sin();
        let height = (time + fi * 0.05).sin() * 5.0 + 2.0;
        let spin = time * 5.0 + fi;
        let s = 1.5 + (time * 10.0 + fi).sin() * 0.5;
        Transform {
            translation: Vec3::new(
                angle.cos() * radius,
                height + (time * 5.0 + fi).sin() * 0.5,
                angle.sin() * radius,
            ),
            rotation: Vec3::splat(spin),
            scale: Vec3::splat(s),
        }
    }
}

/// Clamp a host-supplied density (possibly negative) to the pool.
#[inline]
pub fn clamp_count(count: i64, capacity: usize) -> usize {
    count.clamp(0, capacity as i64) as usize
}

pub struct ParticlePool {
    particles: Vec<ParticleState>,
    transforms: Vec<Transform>,
}

impl ParticlePool {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, capacity: usize) -> Self {
        let particles = (0..capacity).map(|_| ParticleState::random(rng)).collect();
        Self {
            particles,
            transforms: Vec::with_capacity(capacity),
        }
    }

    pub fn with_default_capacity<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng, POOL_CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    /// Step the first `count` slots (clamped to capacity) and return their
    /// transforms. Slots at or beyond `count` are not touched.
    pub fn step(&mut self, count: usize, frame: FrameInput) -> &[Transform] {
        let active = count.min(self.particles.len());
        if active < count {
            log::debug!(
                "[particles] density {} clamped to pool capacity {}",
                count,
                self.particles.len()
            );
        }
        self.transforms.clear();
        for (i, p) in self.particles.iter_mut().take(active).enumerate() {
            let pose = if frame.storm {
                p.storm_pose(i, frame.time)
            } else {
                p.step_calm()
            };
            self.transforms.push(pose);
        }
        &self.transforms
    }

    /// Transforms produced by the last [`ParticlePool::step`].
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn matrices(&self) -> impl Iterator<Item = Mat4> + '_ {
        self.transforms.iter().map(Transform::matrix)
    }
}

/// Free-function form of [`ParticlePool::step`], returning an owned copy.
pub fn step_particle_pool(pool: &mut ParticlePool, count: usize, frame: FrameInput) -> Vec<Transform> {
    pool.step(count, frame).to_vec()
}
