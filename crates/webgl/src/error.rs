/// Problems with the `rectangles` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlParamError {
    #[error("Missing required URL parameter: rectangles")]
    Missing,
    #[error("Invalid rectangles parameter: must be a positive integer")]
    NotAnInteger,
    #[error("Invalid rectangles parameter: must be greater than 0")]
    Zero,
}

/// Failures while setting up WebGL state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlError {
    #[error("Failed to get WebGL2 context")]
    NoContext,
    #[error("Unable to create {0}")]
    Create(&'static str),
    #[error("shader compile failed: {0}")]
    Compile(String),
    #[error("program link failed: {0}")]
    Link(String),
    #[error("attribute {0} not found in program")]
    MissingAttribute(&'static str),
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::{GlError, UrlParamError};
    use wasm_bindgen::JsValue;

    impl From<UrlParamError> for JsValue {
        fn from(e: UrlParamError) -> Self {
            js_sys::Error::new(&e.to_string()).into()
        }
    }

    impl From<GlError> for JsValue {
        fn from(e: GlError) -> Self {
            js_sys::Error::new(&e.to_string()).into()
        }
    }
}
