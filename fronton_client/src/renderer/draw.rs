use fronton_core::DrawList;
use tracing::warn;
use wgpu::*;

use super::batch::FrameBatch;
use super::resources::InstanceBuffer;
use super::Renderer;
use crate::mesh::Mesh;

pub fn draw_frame(renderer: &mut Renderer, frame: &DrawList) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Outdated | SurfaceError::Lost) => {
            // Skip this frame; the next one draws into the fresh surface
            warn!("surface outdated, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            warn!("surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, frame);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, frame: &DrawList) {
    let batch = FrameBatch::from_draw_list(frame);
    let buffers = &mut renderer.buffers;
    buffers
        .rects
        .write(&renderer.device, &renderer.queue, &batch.rects);
    buffers
        .circles
        .write(&renderer.device, &renderer.queue, &batch.circles);
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (racket) first, circles (ball) on top
    draw_instanced(pass, &renderer.meshes.0, &renderer.buffers.rects);
    draw_instanced(pass, &renderer.meshes.1, &renderer.buffers.circles);
}

fn draw_instanced<'a>(pass: &mut RenderPass<'a>, mesh: &'a Mesh, instances: &'a InstanceBuffer) {
    if instances.len == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.buffer.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..instances.len);
}
