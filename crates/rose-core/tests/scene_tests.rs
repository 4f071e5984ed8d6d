// Host-side tests for the scene context: frame stepping, toggles and buffers.

use rose_core::{
    as_floats, world_rotation, FrameInput, InstanceRaw, Interaction, PetalId, PetalMode, Rgb,
    Scene, SceneConfig, ThemeId, HERO_BLOOM_INTENSITY, HERO_TREE, POOL_CAPACITY, ROSE_COUNT,
};

fn scene(seed: u64) -> Scene {
    Scene::new(SceneConfig {
        seed: Some(seed),
        ..SceneConfig::default()
    })
    .unwrap()
}

#[test]
fn scene_holds_hero_plus_forest() {
    let s = scene(1);
    assert_eq!(s.trees.len(), 61);
    assert_eq!(s.trees[HERO_TREE].spec.stem_length, 4.0);
    assert_eq!(s.particles.capacity(), POOL_CAPACITY);
    assert_eq!(s.theme_id(), ThemeId::Tatami);
    assert!(!s.storm());
}

#[test]
fn frame_fills_every_instance_buffer() {
    let mut s = scene(2);
    let b = s.frame(0.5);
    assert_eq!(b.petals.len(), 61 * ROSE_COUNT);
    // every tree is taller than one unit, so each has a trunk and two branches
    assert_eq!(b.skeleton.len(), 61 * 3);
    assert_eq!(b.glows.len(), 61);
    assert_eq!(b.particles.len(), 300);
    assert_eq!(as_floats(&b.petals).len(), b.petals.len() * InstanceRaw::FLOATS);
    assert!(b.particles.iter().all(|p| (p.color[3] - 0.8).abs() < 1e-6));
}

#[test]
fn storm_raises_density_up_to_pool_capacity() {
    let mut s = scene(3);
    s.frame(0.0);
    assert_eq!(s.active_particles(), 300);
    assert!(s.toggle_storm());
    assert_eq!(s.particle_density(), 1500);
    s.frame(1.0 / 60.0);
    assert_eq!(s.active_particles(), POOL_CAPACITY);
    s.set_storm(false);
    s.frame(2.0 / 60.0);
    assert_eq!(s.active_particles(), 300);
}

#[test]
fn host_density_is_clamped_to_the_pool() {
    let mut s = scene(10);
    s.set_particle_density(-5);
    assert_eq!(s.particle_density(), 0);
    s.frame(0.0);
    assert_eq!(s.active_particles(), 0);
    assert!(s.buffers().particles.is_empty());

    s.set_particle_density(5000);
    s.frame(1.0 / 60.0);
    assert_eq!(s.active_particles(), POOL_CAPACITY);

    s.set_particle_density(42);
    s.set_storm(true);
    s.frame(2.0 / 60.0);
    assert_eq!(s.active_particles(), 42, "override wins over storm density");

    s.clear_particle_density();
    s.set_storm(false);
    s.frame(3.0 / 60.0);
    assert_eq!(s.active_particles(), 300);
}

#[test]
fn glow_blooms_follow_tree_bloom_intensity() {
    let mut s = scene(11);
    let b = s.frame(0.0);
    assert_eq!(b.blooms.len(), b.glows.len());
    assert_eq!(b.blooms[HERO_TREE], HERO_BLOOM_INTENSITY);
    assert!(b.blooms[1..].iter().all(|&x| x == 1.0));
}

#[test]
fn long_sessions_keep_a_smooth_step() {
    let mut s = scene(12);
    let start = 6.0 * 3600.0;
    s.frame(start);
    let azimuth = s.rig.azimuth;
    s.frame(start + 1.0 / 60.0);
    // calm auto-rotate: half a turn per minute
    let expected = std::f32::consts::PI / 60.0 / 60.0;
    let turned = azimuth - s.rig.azimuth;
    assert!((turned - expected).abs() < 1e-6, "turned {turned}, want {expected}");
}

#[test]
fn theme_switch_recolors_without_relayout() {
    let mut s = scene(4);
    let specs: Vec<_> = s.trees.iter().map(|t| t.spec.clone()).collect();
    s.frame(0.0);
    let hero_color = s.buffers().petals[0].color;
    assert_eq!(hero_color, ThemeId::Tatami.params().primary_rgb().with_alpha(1.0));

    s.set_theme(ThemeId::Midnight);
    s.frame(1.0 / 60.0);
    let after: Vec<_> = s.trees.iter().map(|t| t.spec.clone()).collect();
    assert_eq!(specs, after);
    assert_eq!(
        s.buffers().petals[0].color,
        ThemeId::Midnight.params().primary_rgb().with_alpha(1.0)
    );
    assert_eq!(
        s.buffers().skeleton[0].color,
        ThemeId::Midnight.params().trunk_rgb().with_alpha(1.0)
    );
}

#[test]
fn unknown_theme_string_falls_back() {
    let mut s = scene(5);
    s.set_theme(ThemeId::Midnight);
    s.set_theme_str("nonexistent");
    assert_eq!(s.theme_id(), ThemeId::Tatami);
}

#[test]
fn queued_pointer_events_apply_on_next_frame() {
    let mut s = scene(6);
    s.push_interaction(PetalId::new(HERO_TREE, 0), Interaction::Enter);
    assert_eq!(s.pending_interactions(), 1);
    assert_eq!(s.trees[HERO_TREE].canopy[0].state.mode(), PetalMode::Idle);

    s.frame(0.0);
    assert_eq!(s.pending_interactions(), 0);
    assert_eq!(s.trees[HERO_TREE].canopy[0].state.mode(), PetalMode::Hovered);
    assert_eq!(s.buffers().petals[0].color, Rgb::WHITE.with_alpha(1.0));

    s.push_interaction(PetalId::new(HERO_TREE, 0), Interaction::Down);
    s.push_interaction(PetalId::new(HERO_TREE, 0), Interaction::Up);
    s.push_interaction(PetalId::new(HERO_TREE, 0), Interaction::Down);
    s.frame(1.0 / 60.0);
    assert_eq!(s.trees[HERO_TREE].canopy[0].state.mode(), PetalMode::Clicked);
}

#[test]
fn events_for_missing_petals_are_dropped() {
    let mut s = scene(7);
    s.push_interaction(PetalId::new(999, 0), Interaction::Enter);
    s.push_interaction(PetalId::new(0, ROSE_COUNT + 3), Interaction::Enter);
    s.frame(0.0);
    assert_eq!(s.pending_interactions(), 0);
    assert!(s
        .trees
        .iter()
        .all(|t| t.canopy.iter().all(|p| p.state.mode() == PetalMode::Idle)));
}

#[test]
fn same_seed_same_frames() {
    let mut a = scene(8);
    let mut b = scene(8);
    for n in 0..30 {
        let t = n as f64 / 60.0;
        if n == 15 {
            a.set_storm(true);
            b.set_storm(true);
        }
        a.frame(t);
        b.frame(t);
    }
    assert_eq!(a.buffers().petals, b.buffers().petals);
    assert_eq!(a.buffers().particles, b.buffers().particles);
}

#[test]
fn world_spins_faster_in_a_storm() {
    assert_eq!(world_rotation(FrameInput::new(0.0, true)), 0.0);
    assert!((world_rotation(FrameInput::new(10.0, false)) - 0.5).abs() < 1e-6);
    assert!((world_rotation(FrameInput::new(10.0, true)) - 2.0).abs() < 1e-6);
}

#[test]
fn scene_without_hero_is_just_the_forest() {
    let s = Scene::new(SceneConfig {
        seed: Some(9),
        hero: false,
        ..SceneConfig::default()
    })
    .unwrap();
    assert_eq!(s.trees.len(), 60);
}
