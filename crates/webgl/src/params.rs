use crate::error::UrlParamError;

/// Query parameter holding the number of rectangles to animate.
pub const RECTANGLES_PARAM: &str = "rectangles";

/// Validate the raw value of the `rectangles` query parameter.
pub fn parse_rectangle_count(raw: Option<&str>) -> Result<usize, UrlParamError> {
    let raw = raw.ok_or(UrlParamError::Missing)?;
    let count: usize = raw.parse().map_err(|_| UrlParamError::NotAnInteger)?;
    if count == 0 {
        return Err(UrlParamError::Zero);
    }
    Ok(count)
}

/// Read and validate `rectangles` from the page URL.
#[cfg(target_arch = "wasm32")]
pub(crate) fn rectangle_count_from_location(
    window: &web_sys::Window,
) -> Result<usize, wasm_bindgen::JsValue> {
    let search = window.location().search()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search)?;
    let count = parse_rectangle_count(params.get(RECTANGLES_PARAM).as_deref())?;
    Ok(count)
}
