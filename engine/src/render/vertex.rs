use bytemuck::{Pod, Zeroable};
use glam::{UVec2, Vec2};

use crate::geometry::Rect;

/// Textured 2D vertex in clip space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 2], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

pub const VERTICES_PER_QUAD: u32 = 6;

/// Pixel coordinates (origin top-left, y down) to clip space.
pub fn pixel_to_clip(p: Vec2, logical: UVec2) -> [f32; 2] {
    let size = logical.as_vec2();
    [p.x / size.x * 2.0 - 1.0, 1.0 - p.y / size.y * 2.0]
}

/// Two triangles covering `dest`, counter-clockwise in clip space.
pub fn quad(dest: Rect, logical: UVec2) -> [Vertex; VERTICES_PER_QUAD as usize] {
    let tl = pixel_to_clip(Vec2::new(dest.left() as f32, dest.top() as f32), logical);
    let tr = pixel_to_clip(Vec2::new(dest.right() as f32, dest.top() as f32), logical);
    let bl = pixel_to_clip(Vec2::new(dest.left() as f32, dest.bottom() as f32), logical);
    let br = pixel_to_clip(Vec2::new(dest.right() as f32, dest.bottom() as f32), logical);
    [
        Vertex::new(tl, [0.0, 0.0]),
        Vertex::new(bl, [0.0, 1.0]),
        Vertex::new(br, [1.0, 1.0]),
        Vertex::new(tl, [0.0, 0.0]),
        Vertex::new(br, [1.0, 1.0]),
        Vertex::new(tr, [1.0, 0.0]),
    ]
}
