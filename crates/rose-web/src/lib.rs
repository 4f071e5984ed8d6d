#![cfg(target_arch = "wasm32")]
//! WASM shell around [`rose_core::Scene`].
//!
//! The JavaScript side owns the canvas, the renderer and the frame loop. Each
//! frame it calls `frame(time)` and uploads the instance arrays; pointer events
//! from its picking are forwarded per petal and applied on the next frame.

use anyhow::Context;
use rose_core::{
    as_floats, FrameClock, Interaction, InstanceRaw, PetalId, Rgb, Scene, SceneConfig, ThemeId,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rose-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn build_scene(seed: Option<u32>, theme: Option<String>) -> anyhow::Result<Scene> {
    let theme = match theme.as_deref() {
        Some(id) => id
            .parse::<ThemeId>()
            .with_context(|| format!("initial theme `{id}`"))?,
        None => ThemeId::default(),
    };
    let config = SceneConfig {
        seed: seed.map(u64::from),
        theme,
        ..SceneConfig::default()
    };
    Scene::new(config).context("building scene")
}

#[inline]
fn interaction_for(kind: &str) -> Option<Interaction> {
    match kind {
        "enter" | "pointerover" | "pointerenter" => Some(Interaction::Enter),
        "leave" | "pointerout" | "pointerleave" => Some(Interaction::Leave),
        "down" | "pointerdown" => Some(Interaction::Down),
        "up" | "pointerup" => Some(Interaction::Up),
        _ => None,
    }
}

#[inline]
fn floats(instances: &[InstanceRaw]) -> js_sys::Float32Array {
    js_sys::Float32Array::from(as_floats(instances))
}

#[inline]
fn rgb_array(c: Rgb) -> Vec<f32> {
    c.0.to_vec()
}

#[wasm_bindgen]
pub struct RoseGalaxy {
    scene: Scene,
    clock: FrameClock,
}

#[wasm_bindgen]
impl RoseGalaxy {
    /// Build the scene. A `seed` makes the forest and particles reproducible.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>, theme: Option<String>) -> Result<RoseGalaxy, JsValue> {
        let scene = build_scene(seed, theme).map_err(to_js)?;
        Ok(RoseGalaxy {
            scene,
            clock: FrameClock::new(),
        })
    }

    /// Floats per instance record (4x4 model matrix + RGBA color).
    pub fn instance_stride() -> u32 {
        InstanceRaw::FLOATS as u32
    }

    pub fn set_theme(&mut self, id: &str) {
        self.scene.set_theme_str(id);
    }

    pub fn toggle_theme(&mut self) -> String {
        let next = self.scene.theme_id().toggled();
        self.scene.set_theme(next);
        next.to_string()
    }

    pub fn theme(&self) -> String {
        self.scene.theme_id().to_string()
    }

    pub fn set_storm(&mut self, storm: bool) {
        self.scene.set_storm(storm);
    }

    pub fn toggle_storm(&mut self) -> bool {
        self.scene.toggle_storm()
    }

    pub fn storm(&self) -> bool {
        self.scene.storm()
    }

    /// Pin the particle count; negative and oversized values are clamped.
    pub fn set_density(&mut self, count: i32) {
        self.scene.set_particle_density(i64::from(count));
    }

    /// Return to the calm/storm particle densities.
    pub fn clear_density(&mut self) {
        self.scene.clear_particle_density();
    }

    /// Forward a picking event (`enter`, `leave`, `down`, `up`) for one petal.
    pub fn pointer(&mut self, kind: &str, tree: u32, petal: u32) {
        match interaction_for(kind) {
            Some(i) => self
                .scene
                .push_interaction(PetalId::new(tree as usize, petal as usize), i),
            None => log::warn!("[input] unknown pointer event `{}`", kind),
        }
    }

    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        self.scene.rig.orbit(d_azimuth, d_polar);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.scene.rig.zoom(factor);
    }

    /// Advance to `time_sec` (elapsed seconds); without it the internal clock
    /// is used.
    pub fn frame(&mut self, time_sec: Option<f64>) {
        let time = match time_sec {
            Some(t) => t,
            None => self.clock.tick().0,
        };
        self.scene.frame(time);
    }

    pub fn petal_instances(&self) -> js_sys::Float32Array {
        floats(&self.scene.buffers().petals)
    }

    pub fn skeleton_instances(&self) -> js_sys::Float32Array {
        floats(&self.scene.buffers().skeleton)
    }

    pub fn glow_instances(&self) -> js_sys::Float32Array {
        floats(&self.scene.buffers().glows)
    }

    /// Emissive strength per glow instance, in `glow_instances` order.
    pub fn glow_blooms(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.scene.buffers().blooms[..])
    }

    pub fn particle_instances(&self) -> js_sys::Float32Array {
        floats(&self.scene.buffers().particles)
    }

    pub fn particle_count(&self) -> u32 {
        self.scene.active_particles() as u32
    }

    pub fn tree_count(&self) -> u32 {
        self.scene.trees.len() as u32
    }

    /// Column-major view-projection matrix for the current orbit.
    pub fn view_projection(&self, aspect: f32) -> js_sys::Float32Array {
        let m = self.scene.rig.view_projection(aspect);
        js_sys::Float32Array::from(&m.to_cols_array()[..])
    }

    pub fn camera_eye(&self) -> Vec<f32> {
        self.scene.rig.eye().to_array().to_vec()
    }

    pub fn background_color(&self) -> Vec<f32> {
        rgb_array(self.scene.theme().background_rgb())
    }

    pub fn ground_color(&self) -> Vec<f32> {
        rgb_array(self.scene.theme().ground_rgb())
    }

    pub fn accent_color(&self) -> Vec<f32> {
        rgb_array(self.scene.theme().accent_rgb())
    }

    pub fn bloom_threshold(&self) -> f32 {
        self.scene.theme().bloom_threshold
    }

    pub fn bloom_intensity(&self) -> f32 {
        self.scene.theme().bloom_intensity
    }
}
