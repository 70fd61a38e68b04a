pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;
pub mod text;

use std::sync::Arc;

use tracing::debug;
use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::Mesh;
use resources::{FrameBatch, GameBuffers};

/// Enough for paddles, ball, divider and two multi-digit scores
const MAX_INSTANCES: usize = 1024;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub quad: Mesh,
}

impl Renderer {
    /// `playfield` is the simulation area in pixels; it is stretched over the whole surface
    pub async fn new(window: Arc<Window>, playfield: (f32, f32)) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(playfield.0, playfield.1);

        let buffers = resources::create_buffers(&ctx.device, &camera, MAX_INSTANCES);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = Mesh::quad(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            quad,
        })
    }

    /// Resize the rendering surface
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            debug!(width, height, "reconfiguring surface");
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    /// Reconfigure with the current size after the surface was lost or went stale
    pub fn reconfigure(&mut self) {
        let (width, height) = self.size;
        self.resize(width, height);
    }

    pub fn draw(&mut self, batch: &FrameBatch) -> Result<(), SurfaceError> {
        draw::draw_frame(self, batch)
    }
}
