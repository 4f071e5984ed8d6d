//! Per-petal interaction state machine and smoothed animation.
//!
//! Each petal keeps two orthogonal flags (`hovered`, `clicked`) and a set of
//! smoothed transform components. Every call to [`PetalAnimState::step`] moves
//! the current values a fixed fraction ([`PETAL_SMOOTHING`]) toward their
//! targets. The blend is per call, not per second, so the approach speed
//! follows the display rate.

use crate::constants::{
    PETAL_BASE_TILT, PETAL_HOVER_LIFT, PETAL_SCALE_CLICKED, PETAL_SCALE_HOVERED,
    PETAL_SCALE_IDLE, PETAL_SMOOTHING, PETAL_TILT_SPAN, ROSE_COUNT,
};
use crate::frame::FrameInput;
use crate::phyllotaxis::PetalLayout;
use crate::transform::Transform;
use glam::Vec3;

/// Edge-triggered pointer events delivered by the renderer's picking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    Enter,
    Leave,
    Down,
    Up,
}

/// Observable state derived from the two flags. `Clicked` wins over `Hovered`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetalMode {
    Idle,
    Hovered,
    Clicked,
}

impl PetalMode {
    pub fn target_scale(self) -> f32 {
        match self {
            PetalMode::Clicked => PETAL_SCALE_CLICKED,
            PetalMode::Hovered => PETAL_SCALE_HOVERED,
            PetalMode::Idle => PETAL_SCALE_IDLE,
        }
    }
}

/// Targets the smoothed values chase on a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalTargets {
    pub scale: f32,
    pub rotation_x: f32,
    pub rotation_z: f32,
    pub position_y: f32,
}

impl PetalTargets {
    /// Pure target computation for petal `i` with the given flags.
    pub fn compute(
        frame: FrameInput,
        i: usize,
        rest_y: f32,
        hovered: bool,
        clicked: bool,
    ) -> Self {
        let t = frame.time;
        let fi = i as f32;
        let mode = mode_of(hovered, clicked);

        let (shake_x, shake_z) = if frame.storm {
            ((t * 15.0 + fi).sin() * 0.1, (t * 18.0 + fi).cos() * 0.1)
        } else {
            (0.0, 0.0)
        };

        let mut rotation_z = (t * 1.5 + fi).sin() * 0.05 + shake_z;
        if hovered {
            rotation_z += (t * 20.0).sin() * 0.05;
        }

        let breathing = (t * 0.5 + fi * 0.1).sin() * 0.01;
        let lift = if hovered { PETAL_HOVER_LIFT } else { 0.0 };
        let storm_jitter = if frame.storm {
            (t * 8.0).sin() * 0.03
        } else {
            0.0
        };

        Self {
            scale: mode.target_scale(),
            rotation_x: shake_x,
            rotation_z,
            position_y: rest_y + breathing + lift + storm_jitter,
        }
    }
}

#[inline]
fn mode_of(hovered: bool, clicked: bool) -> PetalMode {
    if clicked {
        PetalMode::Clicked
    } else if hovered {
        PetalMode::Hovered
    } else {
        PetalMode::Idle
    }
}

#[inline]
fn lerp(current: f32, target: f32) -> f32 {
    current + (target - current) * PETAL_SMOOTHING
}

/// Mutable animation state of one petal; lives as long as its tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PetalAnimState {
    pub hovered: bool,
    pub clicked: bool,
    pub scale: Vec3,
    /// XYZ Euler angles. `y` is the fixed spiral yaw; `x`/`z` are animated.
    pub rotation: Vec3,
    pub position_y: f32,
}

impl PetalAnimState {
    /// Rest state for a petal placed at `layout`.
    pub fn new(layout: &PetalLayout) -> Self {
        Self {
            hovered: false,
            clicked: false,
            scale: Vec3::ONE,
            rotation: Vec3::new(0.0, layout.yaw(), 0.0),
            position_y: layout.height,
        }
    }

    pub fn mode(&self) -> PetalMode {
        mode_of(self.hovered, self.clicked)
    }

    /// Apply one pointer event to the flags.
    pub fn apply(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Enter => self.hovered = true,
            Interaction::Leave => {
                self.hovered = false;
                self.clicked = false;
            }
            Interaction::Down => {
                if self.hovered {
                    self.clicked = true;
                }
            }
            Interaction::Up => self.clicked = false,
        }
    }

    /// Advance the smoothed values one call toward this frame's targets.
    pub fn step(&mut self, frame: FrameInput, i: usize, layout: &PetalLayout) {
        let targets = PetalTargets::compute(frame, i, layout.height, self.hovered, self.clicked);
        self.scale += (Vec3::splat(targets.scale) - self.scale) * PETAL_SMOOTHING;
        self.rotation.z = lerp(self.rotation.z, targets.rotation_z);
        self.rotation.x = lerp(self.rotation.x, targets.rotation_x);
        self.position_y = lerp(self.position_y, targets.position_y);
    }

    /// Transform of the petal group in canopy space.
    pub fn transform(&self, layout: &PetalLayout) -> Transform {
        Transform {
            translation: Vec3::new(layout.base_position.x, self.position_y, layout.base_position.z),
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

/// Outward tilt of the petal mesh inside its group; later petals lean further.
#[inline]
pub fn petal_tilt(i: usize) -> f32 {
    PETAL_BASE_TILT + (i as f32 / ROSE_COUNT as f32) * PETAL_TILT_SPAN
}

/// Set the flags, advance one call and return the petal's canopy-space transform.
pub fn step_petal(
    state: &mut PetalAnimState,
    i: usize,
    layout: &PetalLayout,
    frame: FrameInput,
    hovered: bool,
    clicked: bool,
) -> Transform {
    state.hovered = hovered;
    state.clicked = clicked;
    state.step(frame, i, layout);
    state.transform(layout)
}
