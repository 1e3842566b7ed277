pub mod batch;
pub mod resources;
pub mod shaders;

#[cfg(target_arch = "wasm32")]
mod draw;
#[cfg(target_arch = "wasm32")]
mod init;
#[cfg(target_arch = "wasm32")]
mod pipeline;

#[cfg(target_arch = "wasm32")]
pub use wasm::Renderer;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{draw, init, pipeline, resources};
    use crate::camera::Camera;
    use crate::mesh::Mesh;
    use fronton_core::DrawList;
    use resources::GameBuffers;
    use tracing::info;
    use wgpu::*;

    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),

        pub main_pipeline: RenderPipeline,
        pub camera_bind_group: BindGroup,

        pub buffers: GameBuffers,
        pub meshes: (Mesh, Mesh), // rect, circle
    }

    impl Renderer {
        /// `field` is the logical size the camera maps onto the canvas
        pub async fn new(
            canvas: web_sys::HtmlCanvasElement,
            field: (f32, f32),
        ) -> Result<Self, String> {
            let ctx = init::init_wgpu(canvas).await?;
            let camera = Camera::orthographic(field.0, field.1);

            let buffers = resources::create_buffers(&ctx.device, &camera);
            let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

            let rect_mesh = Mesh::rectangle(&ctx.device);
            let circle_mesh = Mesh::circle(&ctx.device, 32);

            let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &pipes.camera_layout,
                entries: &[BindGroupEntry {
                    binding: 0,
                    resource: buffers.camera.as_entire_binding(),
                }],
            });

            info!(
                width = ctx.size.0,
                height = ctx.size.1,
                format = ?ctx.config.format,
                "renderer ready"
            );

            Ok(Self {
                device: ctx.device,
                queue: ctx.queue,
                surface: ctx.surface,
                surface_config: ctx.config,
                size: ctx.size,
                main_pipeline: pipes.main_pipeline,
                camera_bind_group,
                buffers,
                meshes: (rect_mesh, circle_mesh),
            })
        }

        /// Resize the backing surface; the camera keeps the logical field
        pub fn resize(&mut self, width: u32, height: u32) {
            let (width, height) = (width.max(1), height.max(1));
            if (width, height) == self.size {
                return;
            }
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.reconfigure();
        }

        pub fn reconfigure(&mut self) {
            self.surface.configure(&self.device, &self.surface_config);
        }

        pub fn draw(&mut self, frame: &DrawList) -> Result<(), String> {
            draw::draw_frame(self, frame)
        }
    }
}
