use tracing::warn;
use wgpu::*;

use super::resources::FrameBatch;
use super::Renderer;

const CLEAR_COLOR: Color = Color::BLACK;

pub fn draw_frame(renderer: &mut Renderer, batch: &FrameBatch) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    let count = upload_instances(renderer, batch);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(CLEAR_COLOR),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if count > 0 {
            pass.set_pipeline(&renderer.main_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
            pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
            pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Copy the batch into the instance buffer, returning how many instances to draw
fn upload_instances(renderer: &Renderer, batch: &FrameBatch) -> u32 {
    let max = renderer.buffers.max_instances;
    if batch.instances.len() > max {
        warn!(
            requested = batch.instances.len(),
            max, "instance buffer full, dropping quads"
        );
    }
    let instances = &batch.instances[..batch.instances.len().min(max)];
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(instances));
    }
    instances.len() as u32
}
