use std::sync::Once;

static INIT: Once = Once::new();

/// Route panics to `console.error` and `tracing` events to the console.
///
/// Safe to call more than once; only the first call installs anything.
pub(crate) fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"console logger already installed".into());
        }
    });
}
