//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in surface pixels with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
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
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Scene colors
pub mod colors {
    /// `0xRRGGBB` to normalized RGBA
    pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            alpha,
        ]
    }

    pub const SKY: [f32; 4] = rgba(0xbbddee, 1.0);
    /// Open water, drawn under the ice
    pub const SEA: [f32; 4] = rgba(0x2c7bb6, 1.0);
    /// Same water at half opacity, drawn over the ice
    pub const WATER: [f32; 4] = rgba(0x2c7bb6, 0.5);
    pub const ICE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const LASSO: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Stroke widths in pixels
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const LASSO_WIDTH: f32 = 3.0;
