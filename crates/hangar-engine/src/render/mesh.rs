use wgpu::util::DeviceExt;

use crate::coords::SurfaceSize;
use crate::mesh::{Mesh, MeshError};
use crate::render::{RenderCtx, RenderTarget};

/// Depth buffer format; cleared to 1.0 at the start of every mesh pass.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Nearer fragments win; equal depth keeps what is already there.
fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (3 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (4 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

/// GPU copies of one uploaded [`Mesh`].
struct MeshBuffers {
    positions: wgpu::Buffer,
    fill_colors: wgpu::Buffer,
    line_colors: wgpu::Buffer,

    triangle_ibo: wgpu::Buffer,
    triangle_count: u32,

    line_ibo: wgpu::Buffer,
    line_count: u32,
}

/// Depth attachment matching one target size.
struct DepthTarget {
    size: SurfaceSize,
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTarget {
    fn new(device: &wgpu::Device, size: SurfaceSize) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("hangar mesh depth"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            size,
            _texture: texture,
            view,
        }
    }
}

/// Draws a static mesh as filled triangles followed by its wireframe.
///
/// Both draws share the position buffer, the pass-through shader and one
/// depth buffer; the triangle draw reads fill colors, the line draw reads line
/// colors. Visibility is decided by depth, not by draw order.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,

    buffers: Option<MeshBuffers>,
    depth: Option<DepthTarget>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `mesh` and uploads it, replacing any previous upload.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh) -> Result<(), MeshError> {
        mesh.validate()?;

        let vbo = |label: &str, data: &[f32]| {
            ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::VERTEX,
            })
        };
        let ibo = |label: &str, data: &[u32]| {
            ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::INDEX,
            })
        };

        self.buffers = Some(MeshBuffers {
            positions: vbo("hangar mesh positions", mesh.positions()),
            fill_colors: vbo("hangar mesh fill colors", mesh.fill_colors()),
            line_colors: vbo("hangar mesh line colors", mesh.line_colors()),
            triangle_ibo: ibo("hangar mesh triangle ibo", mesh.triangle_indices()),
            triangle_count: mesh.triangle_indices().len() as u32,
            line_ibo: ibo("hangar mesh line ibo", mesh.line_indices()),
            line_count: mesh.line_indices().len() as u32,
        });

        log::debug!(
            "mesh uploaded: {} vertices, {} triangles, {} lines",
            mesh.vertex_count(),
            mesh.triangle_indices().len() / 3,
            mesh.line_indices().len() / 2
        );

        Ok(())
    }

    #[inline]
    pub fn is_uploaded(&self) -> bool {
        self.buffers.is_some()
    }

    /// Records the triangle draw and then the line draw into `target`.
    ///
    /// Does nothing until a mesh has been uploaded.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipelines(ctx);
        self.ensure_depth(ctx, target.size);

        let Some(depth) = self.depth.as_ref() else { return };
        let Some(buffers) = self.buffers.as_ref() else { return };
        let Some(fill_pipeline) = self.fill_pipeline.as_ref() else { return };
        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hangar mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_vertex_buffer(0, buffers.positions.slice(..));

        if buffers.triangle_count > 0 {
            rpass.set_pipeline(fill_pipeline);
            rpass.set_vertex_buffer(1, buffers.fill_colors.slice(..));
            rpass.set_index_buffer(buffers.triangle_ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..buffers.triangle_count, 0, 0..1);
        }

        if buffers.line_count > 0 {
            rpass.set_pipeline(line_pipeline);
            rpass.set_vertex_buffer(1, buffers.line_colors.slice(..));
            rpass.set_index_buffer(buffers.line_ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..buffers.line_count, 0, 0..1);
        }
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>, size: SurfaceSize) {
        if self.depth.as_ref().is_some_and(|d| d.size == size) {
            return;
        }
        log::debug!("depth target {}x{}", size.width, size.height);
        self.depth = Some(DepthTarget::new(ctx.device, size));
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.fill_pipeline.is_some()
            && self.line_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("hangar mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("hangar mesh pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let build = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[position_layout(), color_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: Some(depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.fill_pipeline = Some(build(
            "hangar mesh fill pipeline",
            wgpu::PrimitiveTopology::TriangleList,
        ));
        self.line_pipeline = Some(build(
            "hangar mesh line pipeline",
            wgpu::PrimitiveTopology::LineList,
        ));
        self.pipeline_format = Some(ctx.surface_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layouts_match_mesh_strides() {
        assert_eq!(position_layout().array_stride, 12);
        assert_eq!(color_layout().array_stride, 16);
        assert_eq!(POSITION_ATTRS[0].shader_location, 0);
        assert_eq!(COLOR_ATTRS[0].shader_location, 1);
    }

    #[test]
    fn depth_test_keeps_nearest_fragment() {
        let state = depth_stencil_state();
        assert_eq!(state.format, wgpu::TextureFormat::Depth32Float);
        assert_eq!(state.depth_compare, wgpu::CompareFunction::Less);
        assert!(state.depth_write_enabled);
        assert!(!state.stencil.is_enabled());
    }

    #[test]
    fn renderer_starts_empty() {
        assert!(!MeshRenderer::new().is_uploaded());
    }
}
