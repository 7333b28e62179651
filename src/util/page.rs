//! Page-level browser helpers.
//!
//! Browser-only behavior; without `hydrate` these no-op so native builds and
//! tests stay deterministic.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
const CSRF_META_SELECTOR: &str = "meta[name=\"csrf-token\"]";

/// CSRF token rendered by the server into `<meta name="csrf-token">`.
pub fn csrf_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(CSRF_META_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Show the first file picked in `input` inside `preview` as a data URL.
///
/// Returns `false` when no file is selected or the read could not start.
#[cfg(feature = "hydrate")]
pub fn preview_image(input: &web_sys::HtmlInputElement, preview: &web_sys::HtmlImageElement) -> bool {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return false;
    };
    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("FileReader unavailable: {e:?}");
            return false;
        }
    };

    let done = reader.clone();
    let preview = preview.clone();
    let onload = Closure::once_into_js(move || {
        let Some(url) = done.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        preview.set_src(&url);
        let _ = preview.style().set_property("display", "block");
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("image preview failed: {e:?}");
        reader.set_onload(None);
        return false;
    }
    true
}
