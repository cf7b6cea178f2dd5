//! Triangle renderer
//!
//! Owns the vertex buffer and the program, and turns the current draw mode
//! into exactly one draw call per `render`.

use crate::backend::traits::{BackendResult, GlBackend};
use crate::backend::types::*;
use crate::draw_mode::{DrawMode, InvalidDrawMode};
use crate::error::DemoError;
use crate::resources::{Mesh, ShaderProgram, ShaderProgramBuilder};

/// What a single `render` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub mode: DrawMode,
    pub topology: PrimitiveTopology,
    pub vertex_count: i32,
    /// Error reported by the API right after the draw, if any
    pub gl_error: Option<GlErrorCode>,
}

pub struct TriangleRenderer<B: GlBackend> {
    backend: B,
    program: ShaderProgram<B>,
    buffer: B::Buffer,
    mesh: Mesh,
    layout: VertexBufferLayout,
    mode: DrawMode,
    clear_color: [f32; 4],
    render_count: u64,
}

impl<B: GlBackend> TriangleRenderer<B> {
    /// Create the renderer around an already linked program.
    pub fn new(mut backend: B, program: ShaderProgram<B>) -> BackendResult<Self> {
        let buffer = backend.create_buffer()?;
        let layout = Vertex::layout(program.position_location, program.color_location);

        Ok(Self {
            backend,
            program,
            buffer,
            mesh: Mesh::triangles(),
            layout,
            mode: DrawMode::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            render_count: 0,
        })
    }

    /// Build the demo program on `backend`, then create the renderer.
    pub fn with_default_program(mut backend: B) -> Result<Self, DemoError> {
        let program = ShaderProgramBuilder::new().build(&mut backend)?;
        Ok(Self::new(backend, program)?)
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    /// Set the mode from its uniform code. Unknown codes leave the mode as is.
    pub fn set_mode_code(&mut self, code: i32) -> Result<DrawMode, InvalidDrawMode> {
        let mode = DrawMode::try_from(code)?;
        self.set_mode(mode);
        Ok(mode)
    }

    /// Interleaved floats uploaded on every render
    pub fn vertex_data(&self) -> &[f32] {
        self.mesh.floats()
    }

    pub fn layout(&self) -> &VertexBufferLayout {
        &self.layout
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Redraw the mesh with the current mode.
    ///
    /// The buffer is uploaded again on every call and the vertex count is 6
    /// whatever the mode.
    pub fn render(&mut self) -> FrameReport {
        let mode = self.mode;
        let topology = mode.topology();
        let vertex_count = self.mesh.vertex_count() as i32;

        self.backend.clear(self.clear_color);
        self.backend.use_program(&self.program.program);

        self.backend.bind_array_buffer(&self.buffer);
        self.backend
            .array_buffer_data(self.mesh.vertex_bytes(), BufferUsage::StaticDraw);

        for attribute in &self.layout.attributes {
            self.backend.enable_vertex_attrib_array(attribute.location);
            self.backend.vertex_attrib_pointer(attribute);
        }

        self.backend.uniform1i(&self.program.mode_location, mode.code());
        self.backend.draw_arrays(topology, 0, vertex_count);
        self.render_count += 1;

        let code = self.backend.get_error();
        let gl_error = if code.is_error() {
            log::warn!("Render #{} ({}) raised {}", self.render_count, mode, code);
            Some(code)
        } else {
            log::debug!("Render #{} ({}): {}", self.render_count, mode, code);
            None
        };

        FrameReport {
            mode,
            topology,
            vertex_count,
            gl_error,
        }
    }
}

#[cfg(all(test, feature = "dummy"))]
mod tests {
    use super::*;
    use crate::backend::dummy::{DummyBackend, DummyCommand};

    fn renderer() -> TriangleRenderer<DummyBackend> {
        TriangleRenderer::with_default_program(DummyBackend::new()).unwrap()
    }

    #[test]
    fn test_initial_mode_is_triangles() {
        let renderer = renderer();
        assert_eq!(renderer.mode(), DrawMode::Triangles);
        assert_eq!(renderer.render_count(), 0);
    }

    #[test]
    fn test_render_command_order() {
        let mut renderer = renderer();
        renderer.backend_mut().clear_commands();
        renderer.render();

        let kinds: Vec<&'static str> = renderer
            .backend()
            .commands()
            .iter()
            .map(|cmd| match cmd {
                DummyCommand::Clear { .. } => "clear",
                DummyCommand::UseProgram { .. } => "use",
                DummyCommand::BindArrayBuffer { .. } => "bind",
                DummyCommand::ArrayBufferData { .. } => "data",
                DummyCommand::EnableVertexAttribArray { .. } => "enable",
                DummyCommand::VertexAttribPointer(_) => "pointer",
                DummyCommand::Uniform1i { .. } => "uniform",
                DummyCommand::DrawArrays { .. } => "draw",
                _ => "other",
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "clear", "use", "bind", "data", "enable", "pointer", "enable", "pointer",
                "uniform", "draw"
            ]
        );
    }

    #[test]
    fn test_clear_color_is_used() {
        let mut renderer = renderer().with_clear_color([0.1, 0.2, 0.3, 1.0]);
        renderer.render();
        assert!(renderer
            .backend()
            .commands()
            .contains(&DummyCommand::Clear {
                color: [0.1, 0.2, 0.3, 1.0]
            }));
    }

    #[test]
    fn test_uniform_carries_mode_code() {
        let mut renderer = renderer();
        renderer.set_mode(DrawMode::TriangleFan);
        renderer.render();
        assert!(renderer
            .backend()
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DummyCommand::Uniform1i { value: 2, .. })));
    }
}
