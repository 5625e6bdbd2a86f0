use frankenpenguin_animation::{AnimationController, Renderer, VertexBuffers};
use frankenpenguin_shapes::MathRandom;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram};

use crate::error::GlError;
use crate::shader::{
    COLOR_ATTRIBUTE, FRAGMENT_SHADER, POSITION_ATTRIBUTE, VERTEX_SHADER, compile_program,
};

/// Draws the animated rectangles as one triangle batch per frame.
pub(crate) struct WebGlRenderer {
    gl: GL,
    _program: WebGlProgram,
    animation: AnimationController,
    position_buffer: WebGlBuffer,
    color_buffer: WebGlBuffer,
    vertices: VertexBuffers,
    position_location: u32,
    color_location: u32,
}

impl WebGlRenderer {
    pub(crate) fn new(
        canvas: &HtmlCanvasElement,
        num_rectangles: usize,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let gl = canvas
            .get_context("webgl2")?
            .ok_or(GlError::NoContext)?
            .dyn_into::<GL>()?;

        let program = compile_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        gl.use_program(Some(&program));

        let position_buffer = create_buffer(&gl, "position buffer")?;
        let color_buffer = create_buffer(&gl, "color buffer")?;

        let position_location = attrib_location(&gl, &program, POSITION_ATTRIBUTE)?;
        let color_location = attrib_location(&gl, &program, COLOR_ATTRIBUTE)?;

        let animation = AnimationController::new(
            &mut MathRandom,
            num_rectangles,
            f64::from(canvas.width()),
            f64::from(canvas.height()),
        );

        Ok(Self {
            gl,
            _program: program,
            animation,
            position_buffer,
            color_buffer,
            vertices: VertexBuffers::with_capacity(num_rectangles),
            position_location,
            color_location,
        })
    }

    fn clear_canvas(&self) {
        self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    fn upload(&self, buffer: &WebGlBuffer, data: &[f32]) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        // SAFETY: the view aliases wasm memory and is consumed by
        // `buffer_data` before anything else can allocate.
        unsafe {
            let view = js_sys::Float32Array::view(data);
            let gl = &self.gl;
            gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::DYNAMIC_DRAW);
        }
    }

    fn setup_attributes(&self) {
        let gl = &self.gl;

        gl.enable_vertex_attrib_array(self.position_location);
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.position_buffer));
        gl.vertex_attrib_pointer_with_i32(self.position_location, 2, GL::FLOAT, false, 0, 0);

        gl.enable_vertex_attrib_array(self.color_location);
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.color_buffer));
        gl.vertex_attrib_pointer_with_i32(self.color_location, 4, GL::FLOAT, false, 0, 0);
    }

    fn draw_rectangles(&self) {
        let count = self.vertices.vertex_count() as i32;
        self.gl.draw_arrays(GL::TRIANGLES, 0, count);
    }
}

impl Renderer for WebGlRenderer {
    fn update(&mut self) {
        self.animation.update();
        self.vertices.fill(
            self.animation.rectangles(),
            self.animation.canvas_width(),
            self.animation.canvas_height(),
        );
    }

    fn render(&self) {
        self.clear_canvas();
        self.upload(&self.position_buffer, self.vertices.positions());
        self.upload(&self.color_buffer, self.vertices.colors());
        self.setup_attributes();
        self.draw_rectangles();
    }
}

fn create_buffer(gl: &GL, what: &'static str) -> Result<WebGlBuffer, GlError> {
    gl.create_buffer().ok_or(GlError::Create(what))
}

fn attrib_location(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<u32, GlError> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location).map_err(|_| GlError::MissingAttribute(name))
}
