/// Interface every frame renderer implements.
///
/// A tick is `update` followed by `render`: `update` advances the scene and
/// prepares draw data, `render` pushes that data to the output without
/// touching the scene.
pub trait Renderer {
    /// Advance the scene one tick and refresh derived draw data.
    fn update(&mut self);

    /// Draw the current state.
    fn render(&self);

    /// One full frame.
    fn tick(&mut self) {
        self.update();
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<&'static str>>,
    }

    impl Renderer for Recording {
        fn update(&mut self) {
            self.calls.borrow_mut().push("update");
        }

        fn render(&self) {
            self.calls.borrow_mut().push("render");
        }
    }

    #[test]
    fn tick_updates_then_renders() {
        let mut r = Recording::default();
        r.tick();
        r.tick();
        assert_eq!(
            *r.calls.borrow(),
            vec!["update", "render", "update", "render"]
        );
    }
}
