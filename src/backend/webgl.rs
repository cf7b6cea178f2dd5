//! WebGL 1 backend over `web_sys::WebGlRenderingContext`.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};

use crate::backend::traits::{BackendError, BackendResult, GlBackend};
use crate::backend::types::{
    BufferUsage, GlErrorCode, PrimitiveTopology, ShaderStage, VertexAttribute,
};

/// WebGL backend bound to one canvas context
pub struct WebGlBackend {
    gl: GL,
}

impl WebGlBackend {
    /// Wrap an existing context.
    pub fn new(gl: GL) -> Self {
        Self { gl }
    }

    /// Obtain a `webgl` context from the canvas.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> BackendResult<Self> {
        let context = canvas
            .get_context("webgl")
            .map_err(|e| BackendError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| {
                BackendError::ContextUnavailable("canvas does not support webgl".into())
            })?;
        let gl = context
            .dyn_into::<GL>()
            .map_err(|_| BackendError::ContextUnavailable("not a WebGlRenderingContext".into()))?;
        log::info!(
            "WebGL context ready ({}x{})",
            canvas.width(),
            canvas.height()
        );
        Ok(Self::new(gl))
    }

    pub fn context(&self) -> &GL {
        &self.gl
    }

    fn stage_to_gl(stage: ShaderStage) -> u32 {
        match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        }
    }

    fn topology_to_gl(topology: PrimitiveTopology) -> u32 {
        match topology {
            PrimitiveTopology::TriangleList => GL::TRIANGLES,
            PrimitiveTopology::TriangleStrip => GL::TRIANGLE_STRIP,
            PrimitiveTopology::TriangleFan => GL::TRIANGLE_FAN,
        }
    }

    fn usage_to_gl(usage: BufferUsage) -> u32 {
        match usage {
            BufferUsage::StaticDraw => GL::STATIC_DRAW,
            BufferUsage::DynamicDraw => GL::DYNAMIC_DRAW,
        }
    }
}

impl GlBackend for WebGlBackend {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&mut self, stage: ShaderStage) -> BackendResult<WebGlShader> {
        self.gl
            .create_shader(Self::stage_to_gl(stage))
            .ok_or_else(|| BackendError::ResourceCreationFailed(format!("{} shader", stage)))
    }

    fn shader_source(&mut self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&mut self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.gl.get_shader_info_log(shader).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: WebGlShader) {
        self.gl.delete_shader(Some(&shader));
    }

    fn create_program(&mut self) -> BackendResult<WebGlProgram> {
        self.gl
            .create_program()
            .ok_or_else(|| BackendError::ResourceCreationFailed("program".into()))
    }

    fn attach_shader(&mut self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&mut self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn link_status(&self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.gl.get_program_info_log(program).unwrap_or_default()
    }

    fn delete_program(&mut self, program: WebGlProgram) {
        self.gl.delete_program(Some(&program));
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        // -1 when the attribute is not active
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn create_buffer(&mut self) -> BackendResult<WebGlBuffer> {
        self.gl
            .create_buffer()
            .ok_or_else(|| BackendError::ResourceCreationFailed("buffer".into()))
    }

    fn bind_array_buffer(&mut self, buffer: &WebGlBuffer) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    }

    fn array_buffer_data(&mut self, data: &[u8], usage: BufferUsage) {
        self.gl
            .buffer_data_with_u8_array(GL::ARRAY_BUFFER, data, Self::usage_to_gl(usage));
    }

    fn use_program(&mut self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn enable_vertex_attrib_array(&mut self, location: u32) {
        self.gl.enable_vertex_attrib_array(location);
    }

    fn vertex_attrib_pointer(&mut self, attribute: &VertexAttribute) {
        self.gl.vertex_attrib_pointer_with_i32(
            attribute.location,
            attribute.components,
            GL::FLOAT,
            false,
            attribute.stride,
            attribute.offset,
        );
    }

    fn uniform1i(&mut self, location: &WebGlUniformLocation, value: i32) {
        self.gl.uniform1i(Some(location), value);
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.gl.clear_color(color[0], color[1], color[2], color[3]);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) {
        self.gl
            .draw_arrays(Self::topology_to_gl(topology), first, count);
    }

    fn get_error(&mut self) -> GlErrorCode {
        GlErrorCode(self.gl.get_error())
    }
}
