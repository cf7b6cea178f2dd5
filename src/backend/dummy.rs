//! Dummy GL backend for testing and development.
//!
//! This backend doesn't touch a GPU. It records every call it receives so
//! that the shader builder and the renderer can be checked without a
//! browser, and it can be told to fail at specific points.

use std::collections::{HashMap, VecDeque};

use crate::backend::traits::{BackendError, BackendResult, GlBackend};
use crate::backend::types::{
    BufferUsage, GlErrorCode, PrimitiveTopology, ShaderStage, VertexAttribute,
};

/// Handle to a dummy shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DummyShader(pub(crate) u32);

/// Handle to a dummy program object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DummyProgram(pub(crate) u32);

/// Handle to a dummy buffer object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DummyBuffer(pub(crate) u32);

/// Handle to a dummy uniform location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DummyUniform(pub(crate) u32);

/// A call recorded by the dummy backend
#[derive(Debug, Clone, PartialEq)]
pub enum DummyCommand {
    CreateShader { shader: u32, stage: ShaderStage },
    ShaderSource { shader: u32 },
    CompileShader { shader: u32 },
    DeleteShader { shader: u32 },
    CreateProgram { program: u32 },
    AttachShader { program: u32, shader: u32 },
    LinkProgram { program: u32 },
    DeleteProgram { program: u32 },
    CreateBuffer { buffer: u32 },
    BindArrayBuffer { buffer: u32 },
    ArrayBufferData { data: Vec<u8>, usage: BufferUsage },
    UseProgram { program: u32 },
    EnableVertexAttribArray { location: u32 },
    VertexAttribPointer(VertexAttribute),
    Uniform1i { location: u32, value: i32 },
    Clear { color: [f32; 4] },
    DrawArrays { topology: PrimitiveTopology, first: i32, count: i32 },
}

#[derive(Debug)]
struct ShaderState {
    stage: ShaderStage,
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct ProgramState {
    shaders: Vec<u32>,
    linked: bool,
    attributes: Vec<String>,
    uniforms: Vec<String>,
}

/// Dummy GL backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    next_id: u32,
    shaders: HashMap<u32, ShaderState>,
    programs: HashMap<u32, ProgramState>,
    commands: Vec<DummyCommand>,
    compile_failures: HashMap<ShaderStage, String>,
    link_failure: Option<String>,
    hidden_names: Vec<String>,
    pending_errors: VecDeque<GlErrorCode>,
    fail_buffer_creation: bool,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend name.
    pub fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    /// Make every compile of the given stage fail with `log`.
    pub fn with_compile_failure(mut self, stage: ShaderStage, log: &str) -> Self {
        self.compile_failures.insert(stage, log.to_string());
        self
    }

    /// Make every link fail with `log`.
    pub fn with_link_failure(mut self, log: &str) -> Self {
        self.link_failure = Some(log.to_string());
        self
    }

    /// Report `name` as inactive, as a driver does after optimizing it out.
    pub fn with_inactive(mut self, name: &str) -> Self {
        self.hidden_names.push(name.to_string());
        self
    }

    /// Make `create_buffer` fail.
    pub fn with_buffer_creation_failure(mut self) -> Self {
        self.fail_buffer_creation = true;
        self
    }

    /// Queue an error for the next `get_error` calls.
    pub fn push_error(&mut self, code: GlErrorCode) {
        self.pending_errors.push_back(code);
    }

    /// All calls recorded so far.
    pub fn commands(&self) -> &[DummyCommand] {
        &self.commands
    }

    /// Forget recorded calls.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Draw calls recorded so far.
    pub fn draw_calls(&self) -> Vec<(PrimitiveTopology, i32, i32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DummyCommand::DrawArrays {
                    topology,
                    first,
                    count,
                } => Some((*topology, *first, *count)),
                _ => None,
            })
            .collect()
    }

    /// Data of every buffer upload recorded so far.
    pub fn uploads(&self) -> Vec<&[u8]> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DummyCommand::ArrayBufferData { data, .. } => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Attribute pointers recorded so far.
    pub fn attribute_pointers(&self) -> Vec<VertexAttribute> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DummyCommand::VertexAttribPointer(attribute) => Some(*attribute),
                _ => None,
            })
            .collect()
    }

    /// Number of shader objects that were created and not yet deleted.
    pub fn live_shaders(&self) -> usize {
        self.shaders.len()
    }

    /// Number of program objects that were created and not yet deleted.
    pub fn live_programs(&self) -> usize {
        self.programs.len()
    }

    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, command: DummyCommand) {
        log::trace!("DummyBackend: {:?}", command);
        self.commands.push(command);
    }

    /// Declared names of the given qualifier (`attribute` or `uniform`).
    fn declared_names(source: &str, qualifier: &str) -> Vec<String> {
        source
            .lines()
            .filter_map(|line| {
                let mut words = line.trim().trim_end_matches(';').split_whitespace();
                if words.next()? != qualifier {
                    return None;
                }
                words.last().map(str::to_string)
            })
            .collect()
    }
}

impl GlBackend for DummyBackend {
    type Shader = DummyShader;
    type Program = DummyProgram;
    type Buffer = DummyBuffer;
    type UniformLocation = DummyUniform;

    fn create_shader(&mut self, stage: ShaderStage) -> BackendResult<DummyShader> {
        let id = self.allocate();
        self.shaders.insert(
            id,
            ShaderState {
                stage,
                source: String::new(),
                compiled: false,
            },
        );
        self.record(DummyCommand::CreateShader { shader: id, stage });
        Ok(DummyShader(id))
    }

    fn shader_source(&mut self, shader: &DummyShader, source: &str) {
        if let Some(state) = self.shaders.get_mut(&shader.0) {
            state.source = source.to_string();
        }
        self.record(DummyCommand::ShaderSource { shader: shader.0 });
    }

    fn compile_shader(&mut self, shader: &DummyShader) {
        if let Some(state) = self.shaders.get_mut(&shader.0) {
            state.compiled = !state.source.trim().is_empty()
                && !self.compile_failures.contains_key(&state.stage);
        }
        self.record(DummyCommand::CompileShader { shader: shader.0 });
    }

    fn compile_status(&self, shader: &DummyShader) -> bool {
        self.shaders
            .get(&shader.0)
            .map(|state| state.compiled)
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &DummyShader) -> String {
        let Some(state) = self.shaders.get(&shader.0) else {
            return String::new();
        };
        if let Some(log) = self.compile_failures.get(&state.stage) {
            log.clone()
        } else if state.source.trim().is_empty() {
            "ERROR: 0:1: empty shader source".to_string()
        } else {
            String::new()
        }
    }

    fn delete_shader(&mut self, shader: DummyShader) {
        self.shaders.remove(&shader.0);
        self.record(DummyCommand::DeleteShader { shader: shader.0 });
    }

    fn create_program(&mut self) -> BackendResult<DummyProgram> {
        let id = self.allocate();
        self.programs.insert(id, ProgramState::default());
        self.record(DummyCommand::CreateProgram { program: id });
        Ok(DummyProgram(id))
    }

    fn attach_shader(&mut self, program: &DummyProgram, shader: &DummyShader) {
        if let Some(state) = self.programs.get_mut(&program.0) {
            state.shaders.push(shader.0);
        }
        self.record(DummyCommand::AttachShader {
            program: program.0,
            shader: shader.0,
        });
    }

    fn link_program(&mut self, program: &DummyProgram) {
        let mut attributes = Vec::new();
        let mut uniforms = Vec::new();
        let mut stages = Vec::new();
        let mut all_compiled = true;

        if let Some(state) = self.programs.get(&program.0) {
            for id in &state.shaders {
                match self.shaders.get(id) {
                    Some(shader) => {
                        all_compiled &= shader.compiled;
                        stages.push(shader.stage);
                        attributes.extend(Self::declared_names(&shader.source, "attribute"));
                        uniforms.extend(Self::declared_names(&shader.source, "uniform"));
                    }
                    None => all_compiled = false,
                }
            }
        }

        attributes.retain(|name| !self.hidden_names.contains(name));
        uniforms.retain(|name| !self.hidden_names.contains(name));
        uniforms.dedup();

        let linked = all_compiled
            && self.link_failure.is_none()
            && stages.contains(&ShaderStage::Vertex)
            && stages.contains(&ShaderStage::Fragment);

        if let Some(state) = self.programs.get_mut(&program.0) {
            state.linked = linked;
            state.attributes = attributes;
            state.uniforms = uniforms;
        }
        self.record(DummyCommand::LinkProgram { program: program.0 });
    }

    fn link_status(&self, program: &DummyProgram) -> bool {
        self.programs
            .get(&program.0)
            .map(|state| state.linked)
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &DummyProgram) -> String {
        match (&self.link_failure, self.link_status(program)) {
            (Some(log), _) => log.clone(),
            (None, false) => "ERROR: program is missing a compiled stage".to_string(),
            (None, true) => String::new(),
        }
    }

    fn delete_program(&mut self, program: DummyProgram) {
        self.programs.remove(&program.0);
        self.record(DummyCommand::DeleteProgram { program: program.0 });
    }

    fn attrib_location(&self, program: &DummyProgram, name: &str) -> Option<u32> {
        let state = self.programs.get(&program.0).filter(|s| s.linked)?;
        state
            .attributes
            .iter()
            .position(|attr| attr == name)
            .map(|index| index as u32)
    }

    fn uniform_location(&self, program: &DummyProgram, name: &str) -> Option<DummyUniform> {
        let state = self.programs.get(&program.0).filter(|s| s.linked)?;
        state
            .uniforms
            .iter()
            .position(|uniform| uniform == name)
            .map(|index| DummyUniform(index as u32))
    }

    fn create_buffer(&mut self) -> BackendResult<DummyBuffer> {
        if self.fail_buffer_creation {
            return Err(BackendError::ResourceCreationFailed("buffer".into()));
        }
        let id = self.allocate();
        self.record(DummyCommand::CreateBuffer { buffer: id });
        Ok(DummyBuffer(id))
    }

    fn bind_array_buffer(&mut self, buffer: &DummyBuffer) {
        self.record(DummyCommand::BindArrayBuffer { buffer: buffer.0 });
    }

    fn array_buffer_data(&mut self, data: &[u8], usage: BufferUsage) {
        self.record(DummyCommand::ArrayBufferData {
            data: data.to_vec(),
            usage,
        });
    }

    fn use_program(&mut self, program: &DummyProgram) {
        self.record(DummyCommand::UseProgram {
            program: program.0,
        });
    }

    fn enable_vertex_attrib_array(&mut self, location: u32) {
        self.record(DummyCommand::EnableVertexAttribArray { location });
    }

    fn vertex_attrib_pointer(&mut self, attribute: &VertexAttribute) {
        self.record(DummyCommand::VertexAttribPointer(*attribute));
    }

    fn uniform1i(&mut self, location: &DummyUniform, value: i32) {
        self.record(DummyCommand::Uniform1i {
            location: location.0,
            value,
        });
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.record(DummyCommand::Clear { color });
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) {
        self.record(DummyCommand::DrawArrays {
            topology,
            first,
            count,
        });
    }

    fn get_error(&mut self) -> GlErrorCode {
        self.pending_errors
            .pop_front()
            .unwrap_or(GlErrorCode::NO_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "attribute vec4 a_position;\nuniform int u_mode;\nvoid main() {}\n";
    const FS: &str = "precision mediump float;\nvoid main() {}\n";

    fn linked_program(backend: &mut DummyBackend) -> DummyProgram {
        let vs = backend.create_shader(ShaderStage::Vertex).unwrap();
        backend.shader_source(&vs, VS);
        backend.compile_shader(&vs);
        let fs = backend.create_shader(ShaderStage::Fragment).unwrap();
        backend.shader_source(&fs, FS);
        backend.compile_shader(&fs);
        let program = backend.create_program().unwrap();
        backend.attach_shader(&program, &vs);
        backend.attach_shader(&program, &fs);
        backend.link_program(&program);
        program
    }

    #[test]
    fn test_declared_names() {
        assert_eq!(
            DummyBackend::declared_names(VS, "attribute"),
            vec!["a_position".to_string()]
        );
        assert_eq!(
            DummyBackend::declared_names(VS, "uniform"),
            vec!["u_mode".to_string()]
        );
    }

    #[test]
    fn test_link_resolves_locations() {
        let mut backend = DummyBackend::new();
        let program = linked_program(&mut backend);
        assert!(backend.link_status(&program));
        assert_eq!(backend.attrib_location(&program, "a_position"), Some(0));
        assert_eq!(backend.attrib_location(&program, "a_color"), None);
        assert!(backend.uniform_location(&program, "u_mode").is_some());
    }

    #[test]
    fn test_inactive_name_is_hidden() {
        let mut backend = DummyBackend::new().with_inactive("u_mode");
        let program = linked_program(&mut backend);
        assert!(backend.uniform_location(&program, "u_mode").is_none());
    }

    #[test]
    fn test_errors_are_popped_in_order() {
        let mut backend = DummyBackend::new();
        backend.push_error(GlErrorCode::INVALID_ENUM);
        backend.push_error(GlErrorCode::INVALID_VALUE);
        assert_eq!(backend.get_error(), GlErrorCode::INVALID_ENUM);
        assert_eq!(backend.get_error(), GlErrorCode::INVALID_VALUE);
        assert_eq!(backend.get_error(), GlErrorCode::NO_ERROR);
    }

    #[test]
    fn test_buffer_creation_failure() {
        let mut backend = DummyBackend::new().with_buffer_creation_failure();
        assert_eq!(
            backend.create_buffer(),
            Err(BackendError::ResourceCreationFailed("buffer".into()))
        );
    }
}
