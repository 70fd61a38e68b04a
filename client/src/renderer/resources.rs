use crate::camera::{Camera, CameraUniform};
use game_core::{Aabb, Canvas, Color};
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

use super::text;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_rect(rect: Aabb, color: Color) -> Self {
        let size = rect.size();
        Self {
            transform: [rect.min.x, rect.min.y, size.x, size.y],
            tint: color.0,
        }
    }
}

/// Quads collected for one frame
#[derive(Debug, Default)]
pub struct FrameBatch {
    pub instances: Vec<InstanceData>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

impl Canvas for FrameBatch {
    fn draw_rect(&mut self, rect: Aabb, color: Color) {
        self.instances.push(InstanceData::from_rect(rect, color));
    }

    fn draw_text(&mut self, anchor: Vec2, size: f32, text: &str, color: Color) {
        for cell in text::layout(anchor, size, text) {
            self.instances.push(InstanceData::from_rect(cell, color));
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub max_instances: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera, max_instances: usize) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::bytes_of(&camera_uniform),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * max_instances) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
        max_instances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_becomes_instance() {
        let rect = Aabb::from_pos_size(Vec2::new(10.0, 200.0), Vec2::new(20.0, 80.0));
        let instance = InstanceData::from_rect(rect, Color::WHITE);
        assert_eq!(instance.transform, [10.0, 200.0, 20.0, 80.0]);
        assert_eq!(instance.tint, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_batch_collects_scene() {
        let game_loop = game_core::GameLoop::new(game_core::Config::new()).unwrap();
        let mut batch = FrameBatch::new();
        game_loop.render(&mut batch);

        // paddles, ball, divider, plus two "0" glyphs of 12 cells each
        assert_eq!(batch.instances.len(), 3 + 48 + 24);

        batch.clear();
        assert!(batch.instances.is_empty());
    }
}
