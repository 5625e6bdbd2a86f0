use frankenpenguin_animation::Renderer;
use wasm_bindgen::prelude::*;

use crate::canvas::mount_canvas;
use crate::gl_renderer::WebGlRenderer;
use crate::logging;
use crate::params::rectangle_count_from_location;

/// The engine exposed to JavaScript.
///
/// `Frankenpenguin.new()` reads `?rectangles=N`, mounts a full-window canvas
/// and prepares the GL state; `tick()` advances and draws one frame.
#[wasm_bindgen]
pub struct Frankenpenguin {
    renderer: WebGlRenderer,
}

#[wasm_bindgen]
impl Frankenpenguin {
    pub fn new() -> Result<Frankenpenguin, JsValue> {
        logging::init();

        let window = web_sys::window().ok_or("No window found")?;
        let num_rectangles = rectangle_count_from_location(&window)?;
        let canvas = mount_canvas(&window)?;
        let renderer = WebGlRenderer::new(&canvas, num_rectangles)?;

        tracing::info!(num_rectangles, "frankenpenguin ready");
        Ok(Frankenpenguin { renderer })
    }

    pub fn tick(&mut self) {
        self.renderer.tick();
    }
}
