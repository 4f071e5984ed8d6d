//! One rose tree: a tapered trunk with optional branch stubs, a phyllotaxis
//! canopy of animated petals, and a whole-tree wind sway.

use crate::constants::{
    BRANCH_BASE_RADIUS, BRANCH_MIN_STEM_LENGTH, BRANCH_RADIAL_SEGMENTS, BRANCH_TOP_RADIUS,
    CANOPY_SCALE_FACTOR, CORE_GLOW_OFFSET, ROSE_COUNT, SWAY_SPEED_CALM, SWAY_SPEED_STORM,
    TRUNK_BASE_RADIUS, TRUNK_RADIAL_SEGMENTS, TRUNK_TOP_RADIUS, WIND_CALM, WIND_STORM,
};
use crate::frame::FrameInput;
use crate::petal::{petal_tilt, Interaction, PetalAnimState};
use crate::phyllotaxis::{compute_petal_layout, PetalLayout};
use crate::theme::{Rgb, ThemeParams};
use crate::transform::Transform;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use std::f32::consts::FRAC_PI_3;

/// Which theme color a tree's canopy uses. Rolled once; resolved every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorVariant {
    #[default]
    Primary,
    Secondary,
}

impl ColorVariant {
    pub fn resolve(self, theme: &ThemeParams) -> Rgb {
        match self {
            ColorVariant::Primary => theme.primary_rgb(),
            ColorVariant::Secondary => theme.secondary_rgb(),
        }
    }
}

/// Construction parameters for one tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeSpec {
    pub position: Vec3,
    pub color: ColorVariant,
    pub scale: f32,
    pub stem_length: f32,
    /// Emissive strength of the core glow; written to `InstanceBuffers::blooms`.
    pub bloom_intensity: f32,
}

impl Default for TreeSpec {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: ColorVariant::Primary,
            scale: 1.0,
            stem_length: 0.5,
            bloom_intensity: 1.0,
        }
    }
}

/// Tapered cylinder in sway-group space.
///
/// Every segment tapers to half its base radius, so all of them can be drawn
/// from one unit mesh (base radius 1, top radius 0.5, height 1, centered).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderSegment {
    pub center: Vec3,
    pub rotation: Vec3,
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub length: f32,
    pub radial_segments: u32,
}

impl CylinderSegment {
    /// Matrix mapping the unit tapered cylinder onto this segment.
    pub fn unit_mesh_transform(&self) -> Transform {
        Transform {
            translation: self.center,
            rotation: self.rotation,
            scale: Vec3::new(self.radius_bottom, self.length, self.radius_bottom),
        }
    }
}

pub fn trunk_geometry(scale: f32, stem_length: f32) -> CylinderSegment {
    CylinderSegment {
        center: Vec3::new(0.0, stem_length / 2.0, 0.0),
        rotation: Vec3::ZERO,
        radius_top: TRUNK_TOP_RADIUS * scale,
        radius_bottom: TRUNK_BASE_RADIUS * scale,
        length: stem_length,
        radial_segments: TRUNK_RADIAL_SEGMENTS,
    }
}

/// Two fixed branch stubs, only for stems longer than [`BRANCH_MIN_STEM_LENGTH`].
pub fn branch_segments(stem_length: f32) -> SmallVec<[CylinderSegment; 2]> {
    let mut out = SmallVec::new();
    if stem_length <= BRANCH_MIN_STEM_LENGTH {
        return out;
    }
    let stub = |center: Vec3, rotation: Vec3, length: f32| CylinderSegment {
        center,
        rotation,
        radius_top: BRANCH_TOP_RADIUS,
        radius_bottom: BRANCH_BASE_RADIUS,
        length,
        radial_segments: BRANCH_RADIAL_SEGMENTS,
    };
    out.push(stub(
        Vec3::new(0.1, stem_length * 0.7, 0.0),
        Vec3::new(0.0, 0.0, -FRAC_PI_3),
        stem_length * 0.4,
    ));
    out.push(stub(
        Vec3::new(-0.1, stem_length * 0.5, 0.1),
        Vec3::new(0.5, 0.0, FRAC_PI_3),
        stem_length * 0.3,
    ));
    out
}

/// Whole-canopy sway. Phase is tied to the tree's world position so that
/// neighbouring trees drift out of step.
pub fn sway_rotation(frame: FrameInput, position: Vec3, stem_length: f32) -> Vec3 {
    let (wind, speed) = if frame.storm {
        (WIND_STORM, SWAY_SPEED_STORM)
    } else {
        (WIND_CALM, SWAY_SPEED_CALM)
    };
    let sway_amt = wind * stem_length.max(0.0).sqrt() * 0.5;
    let t = frame.time;
    Vec3::new(
        (t * speed * 0.8 + position.z).cos() * sway_amt,
        0.0,
        (t * speed + position.x).sin() * sway_amt,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct CanopyPetal {
    pub layout: PetalLayout,
    pub state: PetalAnimState,
}

/// A tree as it lives in the scene. The canopy is sized once and never resized.
#[derive(Clone, Debug)]
pub struct RoseTree {
    pub spec: TreeSpec,
    pub trunk: CylinderSegment,
    pub branches: SmallVec<[CylinderSegment; 2]>,
    pub canopy: Vec<CanopyPetal>,
    pub sway: Vec3,
}

impl RoseTree {
    pub fn new(spec: TreeSpec) -> Self {
        let canopy = (0..ROSE_COUNT)
            .map(|i| {
                let layout = compute_petal_layout(i, CANOPY_SCALE_FACTOR);
                CanopyPetal {
                    state: PetalAnimState::new(&layout),
                    layout,
                }
            })
            .collect();
        Self {
            trunk: trunk_geometry(spec.scale, spec.stem_length),
            branches: branch_segments(spec.stem_length),
            canopy,
            sway: Vec3::ZERO,
            spec,
        }
    }

    /// Trunk first, then branches.
    pub fn skeleton(&self) -> impl Iterator<Item = &CylinderSegment> {
        std::iter::once(&self.trunk).chain(self.branches.iter())
    }

    /// Returns `false` when `petal` is not part of this canopy.
    pub fn interact(&mut self, petal: usize, interaction: Interaction) -> bool {
        match self.canopy.get_mut(petal) {
            Some(p) => {
                p.state.apply(interaction);
                true
            }
            None => false,
        }
    }

    pub fn step(&mut self, frame: FrameInput) {
        self.sway = sway_rotation(frame, self.spec.position, self.spec.stem_length);
        for (i, p) in self.canopy.iter_mut().enumerate() {
            p.state.step(frame, i, &p.layout);
        }
    }

    /// Tree root in world space: translated, then uniformly scaled.
    pub fn root_matrix(&self, world: Mat4) -> Mat4 {
        world
            * Mat4::from_translation(self.spec.position)
            * Mat4::from_scale(Vec3::splat(self.spec.scale))
    }

    pub fn sway_matrix(&self, world: Mat4) -> Mat4 {
        self.root_matrix(world) * Transform::from_rotation(self.sway).matrix()
    }

    pub fn canopy_matrix(&self, world: Mat4) -> Mat4 {
        self.sway_matrix(world) * Mat4::from_translation(Vec3::new(0.0, self.spec.stem_length, 0.0))
    }

    pub fn core_glow_matrix(&self, world: Mat4) -> Mat4 {
        self.canopy_matrix(world) * Mat4::from_translation(Vec3::new(0.0, CORE_GLOW_OFFSET, 0.0))
    }

    /// World matrix of every petal mesh, with its hover flag for tinting.
    pub fn petal_matrices(&self, world: Mat4) -> impl Iterator<Item = (Mat4, bool)> + '_ {
        let canopy = self.canopy_matrix(world);
        self.canopy.iter().enumerate().map(move |(i, p)| {
            let group = p.state.transform(&p.layout).matrix();
            let tilt = Mat4::from_rotation_x(petal_tilt(i));
            (canopy * group * tilt, p.state.hovered)
        })
    }

    pub fn skeleton_matrices(&self, world: Mat4) -> impl Iterator<Item = Mat4> + '_ {
        let sway = self.sway_matrix(world);
        self.skeleton()
            .map(move |s| sway * s.unit_mesh_transform().matrix())
    }
}
