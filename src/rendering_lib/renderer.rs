// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use sierpinski_gasket::generator::PointSequence;

use super::vertex::point_layout;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PointStyleUniform {
    color: [f32; 4],
}

/// Owns the point-list pipeline and the vertex buffer holding the gasket.
/// The buffer is written once, at construction, and never touched again.
pub struct PointRenderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    point_count: u32,
    style_bind_group: wgpu::BindGroup,
}

impl PointRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        points: &PointSequence,
        point_color: [f32; 4],
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Gasket Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // std140 needs 16 bytes here, which vec4<f32> already is
        let style_uniform_data = PointStyleUniform { color: point_color };
        let style_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Style Uniform Buffer"),
            contents: bytemuck::bytes_of(&style_uniform_data),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let style_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("point_style_bind_group_layout"),
        });

        let style_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &style_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: style_uniform_buffer.as_entire_binding(),
            }],
            label: Some("point_style_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Gasket Pipeline Layout"),
                bind_group_layouts: &[&style_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Gasket Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[point_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        // wgpu rejects zero-sized vertex buffers
        let vertex_buffer = (!points.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Gasket Vertex Buffer"),
                contents: points.as_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        log::debug!(
            "uploaded {} points ({} bytes) to the vertex buffer",
            points.len(),
            points.as_bytes().len()
        );

        Self {
            render_pipeline,
            vertex_buffer,
            point_count: points.len() as u32,
            style_bind_group,
        }
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    /// Clears `output_view` and draws every point in one call.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Gasket Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear_color), store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
        });

        if let Some(vertex_buffer) = &self.vertex_buffer {
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.style_bind_group, &[]);
            render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
            render_pass.draw(0..self.point_count, 0..1);
        }
    }
}
