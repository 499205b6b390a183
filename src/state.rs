//! View-side state owned by the scene controller.
//!
//! These types avoid referencing platform-specific APIs. The native frontend
//! reads the matrices they produce and feeds resize/key input back in.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Camera orbit (degrees per axis), zoom distance and viewport aspect.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub rotation_deg: Vec3,
    pub zoom: f32,
    pub aspect: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_deg: Vec3::ZERO,
            zoom: INITIAL_ZOOM,
            aspect: DEFAULT_ASPECT,
        }
    }
}

impl ViewState {
    pub fn camera(&self) -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, self.zoom),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: FOVY_DEG.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }

    /// Look-at from the zoom distance, then the orbit about x, y and z.
    pub fn view_matrix(&self) -> Mat4 {
        self.camera().view_matrix() * rotation_xyz(self.rotation_deg)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera().projection_matrix()
    }

    /// Store the aspect of a new viewport. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

/// Rotation of every assembly about the world origin.
///
/// `velocity_deg` is added to `angle_deg` every tick until changed again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectSpin {
    pub angle_deg: Vec3,
    pub velocity_deg: Vec3,
}

impl ObjectSpin {
    pub fn step(&mut self) {
        self.angle_deg += self.velocity_deg;
    }

    pub fn matrix(&self) -> Mat4 {
        rotation_xyz(-self.angle_deg)
    }
}

/// `Rx * Ry * Rz` for angles given in degrees.
pub fn rotation_xyz(deg: Vec3) -> Mat4 {
    Mat4::from_rotation_x(deg.x.to_radians())
        * Mat4::from_rotation_y(deg.y.to_radians())
        * Mat4::from_rotation_z(deg.z.to_radians())
}
