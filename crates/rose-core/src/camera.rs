//! Auto-rotating orbit rig around the forest.
//!
//! Platform-neutral: front-ends take `view_projection` and feed it to
//! whatever renderer they drive.

use glam::{Mat4, Vec3};
use std::f32::consts::PI;

pub const CAMERA_START: Vec3 = Vec3::new(0.0, 2.0, 12.0);
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_MIN_POLAR: f32 = PI / 4.0;
pub const ORBIT_MAX_POLAR: f32 = PI / 1.9;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 25.0;
pub const AUTO_ROTATE_CALM: f32 = 0.5;
pub const AUTO_ROTATE_STORM: f32 = 2.0;

/// Spherical orbit around `target`, clamped to the allowed polar band and
/// distance range. Auto-rotation speed 1.0 is one turn per minute.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitRig {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::looking_from(CAMERA_START, Vec3::ZERO)
    }
}

impl OrbitRig {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        let mut rig = Self {
            target,
            distance,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
        };
        rig.clamp();
        rig
    }

    fn clamp(&mut self) {
        self.polar = self.polar.clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// User drag, in radians.
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar += d_polar;
        self.clamp();
    }

    /// Multiplicative zoom; `factor > 1` moves away.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance *= factor;
            self.clamp();
        }
    }

    pub fn auto_rotate(&mut self, dt_sec: f32, storm: bool) {
        let speed = if storm {
            AUTO_ROTATE_STORM
        } else {
            AUTO_ROTATE_CALM
        };
        self.azimuth -= 2.0 * PI / 60.0 * speed * dt_sec;
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Right-handed perspective; degenerate aspects are floored.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            aspect.max(1e-3),
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        )
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
