//! Common types shared between backends

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Shader stage of a shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Primitive assembly for a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    TriangleList,
    TriangleStrip,
    TriangleFan,
}

/// Buffer data usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
}

/// A single float attribute read from the bound array buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub stride: i32,
    pub offset: i32,
}

/// Vertex buffer layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexBufferLayout {
    pub array_stride: i32,
    pub attributes: Vec<VertexAttribute>,
}

/// Interleaved vertex with position and color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex {
    pub const STRIDE: i32 = std::mem::size_of::<Self>() as i32;
    pub const POSITION_OFFSET: i32 = 0;
    pub const COLOR_OFFSET: i32 = std::mem::size_of::<Vec3>() as i32;

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            color: Vec3::from_array(color),
        }
    }

    /// Layout with position and color bound to the given attribute locations.
    pub fn layout(position_location: u32, color_location: u32) -> VertexBufferLayout {
        VertexBufferLayout {
            array_stride: Self::STRIDE,
            attributes: vec![
                VertexAttribute {
                    location: position_location,
                    components: 3,
                    stride: Self::STRIDE,
                    offset: Self::POSITION_OFFSET,
                },
                VertexAttribute {
                    location: color_location,
                    components: 3,
                    stride: Self::STRIDE,
                    offset: Self::COLOR_OFFSET,
                },
            ],
        }
    }
}

/// Value returned by `getError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlErrorCode(pub u32);

impl GlErrorCode {
    pub const NO_ERROR: Self = Self(0);
    pub const INVALID_ENUM: Self = Self(0x0500);
    pub const INVALID_VALUE: Self = Self(0x0501);
    pub const INVALID_OPERATION: Self = Self(0x0502);
    pub const OUT_OF_MEMORY: Self = Self(0x0505);
    pub const INVALID_FRAMEBUFFER_OPERATION: Self = Self(0x0506);
    pub const CONTEXT_LOST_WEBGL: Self = Self(0x9242);

    pub fn is_error(&self) -> bool {
        *self != Self::NO_ERROR
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Self::NO_ERROR => "NO_ERROR",
            Self::INVALID_ENUM => "INVALID_ENUM",
            Self::INVALID_VALUE => "INVALID_VALUE",
            Self::INVALID_OPERATION => "INVALID_OPERATION",
            Self::OUT_OF_MEMORY => "OUT_OF_MEMORY",
            Self::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
            Self::CONTEXT_LOST_WEBGL => "CONTEXT_LOST_WEBGL",
            _ => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for GlErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_six_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 12);

        let v = Vertex::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_layout_offsets() {
        let layout = Vertex::layout(4, 7);
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].location, 4);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].location, 7);
        assert_eq!(layout.attributes[1].offset, 12);
        assert!(layout.attributes.iter().all(|a| a.components == 3 && a.stride == 24));
    }

    #[test]
    fn test_error_code_display() {
        assert!(!GlErrorCode::NO_ERROR.is_error());
        assert_eq!(GlErrorCode::INVALID_OPERATION.to_string(), "INVALID_OPERATION (0x0502)");
        assert_eq!(GlErrorCode(0x1234).name(), "UNKNOWN");
    }
}
