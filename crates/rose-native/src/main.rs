//! Headless driver: steps the rose galaxy at a fixed 60 Hz without a window,
//! switches storm on halfway, and logs what each phase produced.
//!
//! Usage: `rose-native [seconds] [seed]`

use anyhow::Context;
use glam::Vec3;
use rose_core::{Scene, SceneConfig};
use std::time::{Duration, Instant};

const FRAME_DT: f64 = 1.0 / 60.0;

struct Args {
    seconds: f64,
    seed: Option<u64>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut it = std::env::args().skip(1);
    let seconds = match it.next() {
        Some(s) => s
            .parse::<f64>()
            .with_context(|| format!("invalid seconds `{s}`"))?,
        None => 10.0,
    };
    anyhow::ensure!(seconds > 0.0, "seconds must be positive");
    let seed = it
        .next()
        .map(|s| s.parse::<u64>().with_context(|| format!("invalid seed `{s}`")))
        .transpose()?;
    Ok(Args { seconds, seed })
}

#[derive(Default)]
struct PhaseStats {
    frames: u32,
    particles: usize,
    max_particle_radius: f32,
    max_sway: f32,
    compute: Duration,
}

impl PhaseStats {
    fn record(&mut self, scene: &Scene, compute: Duration) {
        self.frames += 1;
        self.compute += compute;
        self.particles = scene.active_particles();
        for t in scene.particles.transforms() {
            let r = Vec3::new(t.translation.x, 0.0, t.translation.z).length();
            self.max_particle_radius = self.max_particle_radius.max(r);
        }
        for tree in &scene.trees {
            self.max_sway = self
                .max_sway
                .max(tree.sway.x.abs())
                .max(tree.sway.z.abs());
        }
    }

    fn log(&self, label: &str) {
        let avg_ms = if self.frames > 0 {
            self.compute.as_secs_f64() * 1000.0 / self.frames as f64
        } else {
            0.0
        };
        log::info!(
            "[{label}] frames={} particles={} max_particle_radius={:.2} max_sway={:.3} avg_frame={:.3}ms",
            self.frames,
            self.particles,
            self.max_particle_radius,
            self.max_sway,
            avg_ms
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let mut scene = Scene::new(SceneConfig {
        seed: args.seed,
        ..SceneConfig::default()
    })?;

    let total_frames = (args.seconds / FRAME_DT).ceil() as u32;
    let storm_at = total_frames / 2;
    let mut calm = PhaseStats::default();
    let mut storm = PhaseStats::default();

    for n in 0..total_frames {
        if n == storm_at {
            scene.set_storm(true);
            scene.set_theme(scene.theme_id().toggled());
        }
        let time = f64::from(n) * FRAME_DT;
        let started = Instant::now();
        scene.frame(time);
        let elapsed = started.elapsed();
        if scene.storm() {
            storm.record(&scene, elapsed);
        } else {
            calm.record(&scene, elapsed);
        }
    }

    calm.log("calm");
    storm.log("storm");
    let b = scene.buffers();
    log::info!(
        "[buffers] petals={} skeleton={} glows={} particles={}",
        b.petals.len(),
        b.skeleton.len(),
        b.glows.len(),
        b.particles.len()
    );
    Ok(())
}
