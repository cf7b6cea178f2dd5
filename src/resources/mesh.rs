//! The static demo mesh

use crate::backend::types::Vertex;

/// Number of vertices in the demo mesh
pub const MESH_VERTEX_COUNT: usize = 6;

/// Floats per vertex (3 position + 3 color)
pub const FLOATS_PER_VERTEX: usize = 6;

/// The six vertices drawn in every mode
pub const TRIANGLE_MESH: [Vertex; MESH_VERTEX_COUNT] = [
    Vertex::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0]),
    Vertex::new([1.0, 0.5, 0.0], [0.0, 1.0, 0.0]),
    Vertex::new([0.5, 1.0, 0.0], [0.0, 0.0, 1.0]),
    Vertex::new([0.5, 0.0, 0.0], [1.0, 1.0, 0.0]),
    Vertex::new([0.0, -1.0, 0.0], [0.0, 1.0, 1.0]),
    Vertex::new([-0.5, 0.0, 0.0], [1.0, 0.0, 1.0]),
];

/// Immutable vertex data uploaded by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    vertices: &'static [Vertex],
}

impl Mesh {
    /// The fixed demo mesh
    pub fn triangles() -> Self {
        Self {
            vertices: &TRIANGLE_MESH,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get vertex data as interleaved floats
    pub fn floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Get vertex data as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::triangles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_is_36_floats() {
        let mesh = Mesh::triangles();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.floats().len(), MESH_VERTEX_COUNT * FLOATS_PER_VERTEX);
        assert_eq!(mesh.vertex_bytes().len(), 144);
    }

    #[test]
    fn test_mesh_is_interleaved() {
        let floats = Mesh::triangles().floats().to_vec();
        assert_eq!(&floats[0..6], &[0.0, 0.5, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(&floats[24..30], &[0.0, -1.0, 0.0, 0.0, 1.0, 1.0]);
        assert_eq!(&floats[30..36], &[-0.5, 0.0, 0.0, 1.0, 0.0, 1.0]);
    }
}
