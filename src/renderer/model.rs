//! GPU residency for generated models. Buffers are created when a model
//! is swapped in and destroyed when the scene releases its handle.

use log::trace;
use wgpu::util::DeviceExt;

use crate::geometry::MeshData;
use crate::renderer::gpu::GpuState;
use crate::scene::SurfaceAllocator;

/// Vertex data for one drawable surface. Wireframes carry positions only.
pub struct GpuSurface {
    pub vertex_buffer: wgpu::Buffer,
    pub normal_buffer: Option<wgpu::Buffer>,
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
}

fn vertex_buffer(device: &wgpu::Device, label: &str, data: &[f32]) -> wgpu::Buffer {
    // Zero-length buffers are rejected by some backends; counts still
    // gate the draw calls.
    let padded = [0.0f32; 3];
    let contents = if data.is_empty() { &padded[..] } else { data };
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(contents),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

impl SurfaceAllocator for GpuState {
    type Handle = GpuSurface;

    fn create_solid(&mut self, mesh: &MeshData) -> GpuSurface {
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Model Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        GpuSurface {
            vertex_buffer: vertex_buffer(&self.device, "Model Vertex Buffer", &mesh.positions),
            normal_buffer: Some(vertex_buffer(
                &self.device,
                "Model Normal Buffer",
                &mesh.normals,
            )),
            index_buffer: Some(index_buffer),
            vertex_count: mesh.vertex_count() as u32,
            index_count: mesh.indices.len() as u32,
        }
    }

    fn create_wireframe(&mut self, lines: &[f32]) -> GpuSurface {
        GpuSurface {
            vertex_buffer: vertex_buffer(&self.device, "Wireframe Vertex Buffer", lines),
            normal_buffer: None,
            index_buffer: None,
            vertex_count: (lines.len() / 3) as u32,
            index_count: 0,
        }
    }

    fn release(&mut self, handle: GpuSurface) {
        trace!(
            "releasing surface ({} vertices, {} indices)",
            handle.vertex_count, handle.index_count
        );
        handle.vertex_buffer.destroy();
        if let Some(normals) = handle.normal_buffer {
            normals.destroy();
        }
        if let Some(indices) = handle.index_buffer {
            indices.destroy();
        }
    }
}
