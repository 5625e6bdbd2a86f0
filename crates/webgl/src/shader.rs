/// Passes clip-space positions through and forwards the per-vertex color.
pub const VERTEX_SHADER: &str = r#"
    attribute vec2 a_position;
    attribute vec4 a_color;
    varying vec4 v_color;
    void main() {
        gl_Position = vec4(a_position, 0.0, 1.0);
        v_color = a_color;
    }
"#;

/// Flat color fill.
pub const FRAGMENT_SHADER: &str = r#"
    precision mediump float;
    varying vec4 v_color;
    void main() {
        gl_FragColor = v_color;
    }
"#;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) const POSITION_ATTRIBUTE: &str = "a_position";
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) const COLOR_ATTRIBUTE: &str = "a_color";

#[cfg(target_arch = "wasm32")]
pub(crate) use gl::compile_program;

#[cfg(target_arch = "wasm32")]
mod gl {
    use crate::error::GlError;
    use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader};

    /// Compile both stages and link them into a program.
    pub(crate) fn compile_program(
        gl: &GL,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<WebGlProgram, GlError> {
        let vertex_shader = compile_shader(gl, GL::VERTEX_SHADER, vertex_source)?;
        let fragment_shader = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_source)?;

        let program = gl.create_program().ok_or(GlError::Create("program"))?;
        gl.attach_shader(&program, &vertex_shader);
        gl.attach_shader(&program, &fragment_shader);
        gl.link_program(&program);

        let linked = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let log = gl
                .get_program_info_log(&program)
                .unwrap_or_else(|| String::from("Unknown error creating program object"));
            return Err(GlError::Link(log));
        }

        tracing::debug!("shader program linked");
        Ok(program)
    }

    fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, GlError> {
        let shader = gl
            .create_shader(shader_type)
            .ok_or(GlError::Create("shader"))?;
        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        let compiled = gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !compiled {
            let log = gl
                .get_shader_info_log(&shader)
                .unwrap_or_else(|| String::from("Unknown error creating shader"));
            return Err(GlError::Compile(log));
        }

        Ok(shader)
    }
}
