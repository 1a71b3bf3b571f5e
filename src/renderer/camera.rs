use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec2, Vec3};

/// Orbit camera around a focus point. Yaw and pitch place the eye on a
/// sphere of `distance` around `target`.
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,

    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub orbit_sensitivity: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 2.0,
            // Start on the +z axis looking at the origin.
            yaw: FRAC_PI_2,
            pitch: 0.0,

            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,

            orbit_sensitivity: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.1,
        }
    }
}

impl Camera {
    pub fn position(&self) -> Vec3 {
        self.target
            + Vec3::new(
                self.distance * self.yaw.cos() * self.pitch.cos(),
                self.distance * self.pitch.sin(),
                self.distance * self.yaw.sin() * self.pitch.cos(),
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.orbit_sensitivity;
        self.pitch += delta.y * self.orbit_sensitivity;

        let max_pitch = 89.0_f32.to_radians();
        self.pitch = self.pitch.clamp(-max_pitch, max_pitch);
    }

    /// Shifts the focus point in the view plane.
    pub fn pan(&mut self, delta: Vec2) {
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let scale = self.pan_speed * self.distance;
        self.target += right * (-delta.x * scale) + up * (delta.y * scale);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (1.0 - scroll * self.zoom_speed)).clamp(0.2, 50.0);
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _padding: f32,
}

impl FrameUniforms {
    pub fn new(camera: &Camera, model: Mat4) -> Self {
        Self {
            view_proj: camera.view_projection_matrix().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: camera.position().to_array(),
            _padding: 0.0,
        }
    }
}
