pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Pixel size of the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Size from the window's inner dimensions, falling back per axis to
    /// 800x600 when a dimension is not a number.
    pub fn from_window_dimensions(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: width.map_or(DEFAULT_CANVAS_WIDTH, |w| w as u32),
            height: height.map_or(DEFAULT_CANVAS_HEIGHT, |h| h as u32),
        }
    }

    /// Inline style for the canvas element.
    pub fn style(&self) -> String {
        format!(
            "display: block; width: {}px; height: {}px; background: #000;",
            self.width, self.height
        )
    }
}

/// Create `<canvas id="canvas">` sized to the window and append it to `<body>`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn mount_canvas(
    window: &web_sys::Window,
) -> Result<web_sys::HtmlCanvasElement, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let document = window.document().ok_or("No document found")?;
    let size = CanvasSize::from_window_dimensions(
        window.inner_width()?.as_f64(),
        window.inner_height()?.as_f64(),
    );

    let canvas = document.create_element("canvas")?;
    canvas.set_id("canvas");
    canvas.set_attribute("style", &size.style())?;

    let canvas = canvas.dyn_into::<web_sys::HtmlCanvasElement>()?;
    canvas.set_width(size.width);
    canvas.set_height(size.height);

    let body = document.body().ok_or("No body found")?;
    body.append_child(&canvas)?;

    tracing::info!(width = size.width, height = size.height, "canvas mounted");
    Ok(canvas)
}
