//! Scene context: owns the trees, the particle pool, the theme/storm flags and
//! the camera rig, and advances all of them once per rendered frame.

use crate::camera::OrbitRig;
use crate::constants::{
    PARTICLE_COLOR_HEX, PARTICLE_DENSITY_CALM, PARTICLE_DENSITY_STORM, POOL_CAPACITY,
    ROSE_COUNT, WORLD_SPIN_CALM, WORLD_SPIN_STORM,
};
use crate::error::Result;
use crate::forest::{generate_forest_with, hero_tree, seeded_rng, ForestParams};
use crate::frame::FrameInput;
use crate::instance::InstanceBuffers;
use crate::interaction::{InteractionQueue, PetalId};
use crate::particles::{clamp_count, ParticlePool};
use crate::petal::Interaction;
use crate::theme::{resolve_theme, Rgb, ThemeId, ThemeParams};
use crate::tree::RoseTree;
use glam::Mat4;

/// Index of the hero tree in [`Scene::trees`] when it is enabled.
pub const HERO_TREE: usize = 0;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seed: Option<u64>,
    pub forest: ForestParams,
    pub hero: bool,
    pub pool_capacity: usize,
    pub density_calm: usize,
    pub density_storm: usize,
    pub theme: ThemeId,
    pub storm: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            forest: ForestParams::default(),
            hero: true,
            pool_capacity: POOL_CAPACITY,
            density_calm: PARTICLE_DENSITY_CALM,
            density_storm: PARTICLE_DENSITY_STORM,
            theme: ThemeId::default(),
            storm: false,
        }
    }
}

/// Y spin of the whole tree group.
pub fn world_rotation(frame: FrameInput) -> f32 {
    let speed = if frame.storm {
        WORLD_SPIN_STORM
    } else {
        WORLD_SPIN_CALM
    };
    frame.time * speed
}

pub struct Scene {
    pub config: SceneConfig,
    pub trees: Vec<RoseTree>,
    pub particles: ParticlePool,
    pub rig: OrbitRig,
    theme: ThemeId,
    storm: bool,
    queue: InteractionQueue,
    buffers: InstanceBuffers,
    particle_color: Rgb,
    last_time: Option<f64>,
    active_particles: usize,
    density_override: Option<usize>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        let mut forest_rng = seeded_rng(config.seed, 1);
        let mut particle_rng = seeded_rng(config.seed, 2);

        let mut specs = Vec::with_capacity(config.forest.count + 1);
        if config.hero {
            specs.push(hero_tree());
        }
        specs.extend(generate_forest_with(&mut forest_rng, &config.forest));
        let trees: Vec<RoseTree> = specs.into_iter().map(RoseTree::new).collect();

        let particles = ParticlePool::new(&mut particle_rng, config.pool_capacity);
        let particle_color = Rgb::from_hex(PARTICLE_COLOR_HEX)?;

        log::info!(
            "[scene] trees={} petals={} particle_pool={} seed={:?} theme={}",
            trees.len(),
            trees.len() * ROSE_COUNT,
            particles.capacity(),
            config.seed,
            config.theme
        );

        let buffers = InstanceBuffers::with_capacity(
            trees.len() * ROSE_COUNT,
            trees.len() * 3,
            trees.len(),
            particles.capacity(),
        );
        Ok(Self {
            theme: config.theme,
            storm: config.storm,
            trees,
            particles,
            rig: OrbitRig::default(),
            queue: InteractionQueue::new(),
            buffers,
            particle_color,
            last_time: None,
            active_particles: 0,
            density_override: None,
            config,
        })
    }

    pub fn theme_id(&self) -> ThemeId {
        self.theme
    }

    pub fn theme(&self) -> &'static ThemeParams {
        self.theme.params()
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        if theme != self.theme {
            log::info!("[scene] theme {} -> {}", self.theme, theme);
            self.theme = theme;
        }
    }

    /// Lenient variant for UI strings; unknown ids fall back to the default.
    pub fn set_theme_str(&mut self, id: &str) {
        self.set_theme(resolve_theme(id));
    }

    pub fn storm(&self) -> bool {
        self.storm
    }

    pub fn set_storm(&mut self, storm: bool) {
        if storm != self.storm {
            log::info!("[scene] storm {}", if storm { "on" } else { "off" });
            self.storm = storm;
        }
    }

    pub fn toggle_storm(&mut self) -> bool {
        self.set_storm(!self.storm);
        self.storm
    }

    /// Queue a pointer event; it takes effect at the start of the next frame.
    pub fn push_interaction(&mut self, target: PetalId, kind: Interaction) {
        self.queue.push(target, kind);
    }

    pub fn pending_interactions(&self) -> usize {
        self.queue.len()
    }

    /// Particle density for the next frame. A host override wins over the
    /// per-mode defaults, which may exceed the pool and are clamped when stepped.
    pub fn particle_density(&self) -> usize {
        match self.density_override {
            Some(count) => count,
            None if self.storm => self.config.density_storm,
            None => self.config.density_calm,
        }
    }

    /// Pin the density to a host-supplied count, clamped into `0..=capacity`.
    pub fn set_particle_density(&mut self, count: i64) {
        let clamped = clamp_count(count, self.particles.capacity());
        if clamped as i64 != count {
            log::debug!("[scene] particle density {} clamped to {}", count, clamped);
        }
        self.density_override = Some(clamped);
    }

    /// Go back to the calm/storm defaults.
    pub fn clear_particle_density(&mut self) {
        self.density_override = None;
    }

    /// Number of particles written by the last frame.
    pub fn active_particles(&self) -> usize {
        self.active_particles
    }

    pub fn frame_input(&self, elapsed: f64) -> FrameInput {
        FrameInput::from_elapsed(elapsed, self.storm)
    }

    /// Advance everything to `elapsed` seconds and rebuild the instance buffers.
    pub fn frame(&mut self, elapsed: f64) -> &InstanceBuffers {
        let frame = self.frame_input(elapsed);
        let dt = self
            .last_time
            .map(|last| (elapsed - last).max(0.0) as f32)
            .unwrap_or(0.0);
        self.last_time = Some(elapsed);

        self.queue.drain_into(&mut self.trees);
        self.rig.auto_rotate(dt, frame.storm);
        for tree in &mut self.trees {
            tree.step(frame);
        }
        let density = self.particle_density();
        self.active_particles = self.particles.step(density, frame).len();

        self.write_buffers(frame);
        &self.buffers
    }

    pub fn buffers(&self) -> &InstanceBuffers {
        &self.buffers
    }

    fn write_buffers(&mut self, frame: FrameInput) {
        let theme = self.theme.params();
        let trunk = theme.trunk_rgb();
        let world = Mat4::from_rotation_y(world_rotation(frame));

        self.buffers.clear();
        for tree in &self.trees {
            let color = tree.spec.color.resolve(theme);
            for (model, hovered) in tree.petal_matrices(world) {
                self.buffers.push_petal(model, color, hovered);
            }
            for model in tree.skeleton_matrices(world) {
                self.buffers.push_skeleton(model, trunk);
            }
            self.buffers
                .push_glow(tree.core_glow_matrix(world), tree.spec.bloom_intensity);
        }
        for model in self.particles.matrices() {
            self.buffers.push_particle(model, self.particle_color);
        }
    }
}
