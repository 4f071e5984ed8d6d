// Host-side tests for the rose tree builder: skeleton, canopy and sway.

use glam::Vec3;
use rose_core::{
    branch_segments, sway_rotation, trunk_geometry, FrameInput, Interaction, PetalMode, RoseTree,
    TreeSpec, ROSE_COUNT,
};

fn tree(stem_length: f32) -> RoseTree {
    RoseTree::new(TreeSpec {
        stem_length,
        ..TreeSpec::default()
    })
}

#[test]
fn branches_only_above_unit_stem_length() {
    for (len, expected) in [(0.5_f32, 0usize), (1.0, 0), (1.0001, 2), (5.0, 2)] {
        assert_eq!(
            branch_segments(len).len(),
            expected,
            "stem length {len} should give {expected} branches"
        );
        let t = tree(len);
        assert_eq!(t.branches.len(), expected);
        assert_eq!(t.skeleton().count(), 1 + expected);
    }
}

#[test]
fn branch_stubs_scale_with_stem_length() {
    let b = branch_segments(5.0);
    assert!((b[0].center.y - 3.5).abs() < 1e-6);
    assert!((b[0].length - 2.0).abs() < 1e-6);
    assert!((b[1].center.y - 2.5).abs() < 1e-6);
    assert!((b[1].length - 1.5).abs() < 1e-6);
    for s in &b {
        assert_eq!(s.radius_bottom, 0.04);
        assert_eq!(s.radius_top, 0.02);
    }
}

#[test]
fn trunk_tapers_and_is_anchored_at_half_height() {
    let t = trunk_geometry(2.0, 4.0);
    assert!((t.radius_bottom - 0.16).abs() < 1e-6);
    assert!((t.radius_top - 0.08).abs() < 1e-6);
    assert_eq!(t.length, 4.0);
    assert_eq!(t.center, Vec3::new(0.0, 2.0, 0.0));
    let m = t.unit_mesh_transform();
    assert_eq!(m.scale, Vec3::new(t.radius_bottom, 4.0, t.radius_bottom));
}

#[test]
fn canopy_has_fixed_petal_count() {
    let t = tree(3.0);
    assert_eq!(t.canopy.len(), ROSE_COUNT);
    assert_eq!(t.petal_matrices(glam::Mat4::IDENTITY).count(), ROSE_COUNT);
}

#[test]
fn sway_matches_calm_formula_at_origin() {
    let s = sway_rotation(FrameInput::new(0.0, false), Vec3::ZERO, 4.0);
    // amount = 0.02 * sqrt(4) * 0.5
    assert!((s.x - 0.02).abs() < 1e-6);
    assert!(s.z.abs() < 1e-6);
    assert_eq!(s.y, 0.0);
}

#[test]
fn storm_sway_is_bounded_by_wind_amount() {
    let len = 3.0_f32;
    let calm_amt = 0.02 * len.sqrt() * 0.5;
    let storm_amt = 0.3 * len.sqrt() * 0.5;
    for n in 0..600 {
        let t = n as f32 * 0.05;
        let pos = Vec3::new(2.5, -1.0, -7.0);
        let c = sway_rotation(FrameInput::new(t, false), pos, len);
        let s = sway_rotation(FrameInput::new(t, true), pos, len);
        assert!(c.x.abs() <= calm_amt + 1e-6 && c.z.abs() <= calm_amt + 1e-6);
        assert!(s.x.abs() <= storm_amt + 1e-6 && s.z.abs() <= storm_amt + 1e-6);
    }
}

#[test]
fn neighbouring_trees_sway_out_of_phase() {
    let frame = FrameInput::new(0.0, false);
    let a = sway_rotation(frame, Vec3::new(0.0, -1.0, 0.0), 4.0);
    let b = sway_rotation(frame, Vec3::new(1.0, -1.0, 0.0), 4.0);
    assert!((a.z - b.z).abs() > 1e-3);
}

#[test]
fn step_updates_sway_and_every_petal() {
    let mut t = tree(4.0);
    let before: Vec<f32> = t.canopy.iter().map(|p| p.state.position_y).collect();
    t.step(FrameInput::new(3.0, true));
    assert_ne!(t.sway, Vec3::ZERO);
    let moved = t
        .canopy
        .iter()
        .zip(&before)
        .filter(|(p, b)| p.state.position_y != **b)
        .count();
    assert!(moved > ROSE_COUNT / 2, "only {moved} petals moved");
}

#[test]
fn interaction_reaches_the_addressed_petal_only() {
    let mut t = tree(2.0);
    assert!(t.interact(7, Interaction::Enter));
    assert_eq!(t.canopy[7].state.mode(), PetalMode::Hovered);
    assert_eq!(t.canopy[6].state.mode(), PetalMode::Idle);
    assert!(!t.interact(ROSE_COUNT, Interaction::Enter));
}

#[test]
fn canopy_sits_on_top_of_the_stem() {
    let t = RoseTree::new(TreeSpec {
        position: Vec3::new(3.0, -1.0, 2.0),
        scale: 1.5,
        stem_length: 2.0,
        ..TreeSpec::default()
    });
    let top = t.canopy_matrix(glam::Mat4::IDENTITY).transform_point3(Vec3::ZERO);
    assert!((top - Vec3::new(3.0, -1.0 + 2.0 * 1.5, 2.0)).length() < 1e-5);
}
