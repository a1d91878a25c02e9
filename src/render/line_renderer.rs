//! Line-list pipeline: static vertex buffers uploaded once, two uniform
//! batches (grid + overlay) rewritten every frame.

use wgpu::util::DeviceExt;

use super::context::SurfaceContext;
use super::{FrameUniform, LineVertex};

fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>()
            as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }
}

/// Draws the grid and the crosshair overlay as disconnected line
/// segments.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    grid_uniform: wgpu::Buffer,
    grid_bind_group: wgpu::BindGroup,
    grid_vertices: wgpu::Buffer,
    grid_vertex_count: u32,
    overlay_uniform: wgpu::Buffer,
    overlay_bind_group: wgpu::BindGroup,
    overlay_vertices: wgpu::Buffer,
    overlay_vertex_count: u32,
    background: wgpu::Color,
}

impl LineRenderer {
    /// Build the pipeline and upload the static grid and overlay
    /// geometry.
    #[must_use]
    pub fn new(
        context: &SurfaceContext,
        grid: &[LineVertex],
        overlay: &[LineVertex],
        background: [f32; 4],
    ) -> Self {
        let device = &context.device;

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Line Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("line.wgsl").into(),
                ),
            });

        let bind_group_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Line Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Line Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Line Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        let make_uniform = |label: &str| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&[FrameUniform::overlay_batch(
                    [0.0, 0.0, 0.0],
                )]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            })
        };
        let grid_uniform = make_uniform("Grid Uniform Buffer");
        let overlay_uniform = make_uniform("Overlay Uniform Buffer");

        let make_bind_group = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let grid_bind_group = make_bind_group("Grid Bind Group", &grid_uniform);
        let overlay_bind_group =
            make_bind_group("Overlay Bind Group", &overlay_uniform);

        let grid_vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Grid Vertex Buffer"),
                contents: bytemuck::cast_slice(grid),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let overlay_vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Overlay Vertex Buffer"),
                contents: bytemuck::cast_slice(overlay),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Self {
            pipeline,
            grid_uniform,
            grid_bind_group,
            grid_vertices,
            grid_vertex_count: grid.len() as u32,
            overlay_uniform,
            overlay_bind_group,
            overlay_vertices,
            overlay_vertex_count: overlay.len() as u32,
            background: wgpu::Color {
                r: f64::from(background[0]),
                g: f64::from(background[1]),
                b: f64::from(background[2]),
                a: f64::from(background[3]),
            },
        }
    }

    /// Write this frame's uniforms for both batches.
    pub fn update_uniforms(
        &self,
        queue: &wgpu::Queue,
        grid: &FrameUniform,
        overlay: &FrameUniform,
    ) {
        queue.write_buffer(
            &self.grid_uniform,
            0,
            bytemuck::cast_slice(&[*grid]),
        );
        queue.write_buffer(
            &self.overlay_uniform,
            0,
            bytemuck::cast_slice(&[*overlay]),
        );
    }

    /// Record and submit the frame, then present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot
    /// be acquired (lost/outdated surface); the caller reconfigures and
    /// retries next frame.
    pub fn draw(
        &self,
        context: &SurfaceContext,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Line Encoder"),
            },
        );

        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Line Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.background),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

            pass.set_pipeline(&self.pipeline);
            if self.grid_vertex_count > 0 {
                pass.set_bind_group(0, &self.grid_bind_group, &[]);
                pass.set_vertex_buffer(0, self.grid_vertices.slice(..));
                pass.draw(0..self.grid_vertex_count, 0..1);
            }
            if self.overlay_vertex_count > 0 {
                pass.set_bind_group(0, &self.overlay_bind_group, &[]);
                pass.set_vertex_buffer(0, self.overlay_vertices.slice(..));
                pass.draw(0..self.overlay_vertex_count, 0..1);
            }
        }

        let _ = context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
