//! Camera for Pong game
//!
//! Simple 2D orthographic camera over the playfield in pixels

use glam::{Mat4, Vec3, Vec4};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera showing `width` x `height` units with the origin
    /// at the top-left and y growing downward
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { view, projection }
    }

    /// Clip-space position of a playfield point
    pub fn project(&self, x: f32, y: f32) -> Vec3 {
        let clip = self.projection * self.view * Vec4::new(x, y, 0.0, 1.0);
        clip.truncate() / clip.w
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
