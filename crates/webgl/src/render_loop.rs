use std::cell::RefCell;
use std::rc::Rc;

use frankenpenguin_animation::FpsCounter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::engine::Frankenpenguin;

/// Id of the element that shows the frame rate.
const FPS_ELEMENT_ID: &str = "fps";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Create the engine and tick it on every animation frame until the page
/// goes away. The `#fps` element, when present, shows frames rendered in the
/// last whole second.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let engine = Frankenpenguin::new()?;
    run(engine)
}

fn run(mut engine: Frankenpenguin) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window found")?;
    let performance = window.performance().ok_or("No performance clock found")?;
    let fps_element = window
        .document()
        .and_then(|doc| doc.get_element_by_id(FPS_ELEMENT_ID));
    if fps_element.is_none() {
        tracing::warn!("#{FPS_ELEMENT_ID} element not found, frame rate hidden");
    }

    let mut fps = FpsCounter::new(performance.now());

    let next: FrameCallback = Rc::new(RefCell::new(None));
    let first = next.clone();
    let loop_window = window.clone();

    *first.borrow_mut() = Some(Closure::new(move || {
        if let Some(rate) = fps.frame(performance.now())
            && let Some(el) = &fps_element
        {
            el.set_text_content(Some(&FpsCounter::label(rate)));
        }

        engine.tick();

        if let Some(callback) = next.borrow().as_ref()
            && let Err(e) = request_animation_frame(&loop_window, callback)
        {
            tracing::error!("requestAnimationFrame failed: {e:?}");
        }
    }));

    let slot = first.borrow();
    let callback = slot.as_ref().ok_or("render loop callback missing")?;
    request_animation_frame(&window, callback)?;
    Ok(())
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}
