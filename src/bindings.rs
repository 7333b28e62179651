//! JavaScript surface for page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates call helpers as `AppUtils.showToast(...)`, `AppUtils.debounce(...)`
//! and so on. Each export here converts JS values at the edge and delegates
//! to the Rust implementation; the start function also installs them on
//! `window.AppUtils`. Toasts go through the shared page center so scripts and
//! components never create a second container.
//!
//! ERROR HANDLING
//! ==============
//! Malformed arguments degrade to the same answers the helpers give for
//! empty input. Nothing here throws into JavaScript.

use std::rc::Rc;
use std::time::Duration;

use js_sys::{Array, Function, JSON, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{File, HtmlImageElement, HtmlInputElement};

use crate::app_utils::{APP_UTILS_GLOBAL, APP_UTILS_MEMBERS};
use crate::notifications::context::page_center;
use crate::timing::{Debounced, GlooTimer, Throttled, Timer};
use crate::util::{
    AllowedTypes, ApiFailure, DEFAULT_API_ERROR, DEFAULT_RANDOM_LEN, DEFAULT_TRUNCATE_LEN,
    FileDescriptor,
};

/// Module entry point: panic hook, console logging, `window.AppUtils`.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    install_app_utils();
}

/// Show a toast and return its element id.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> String {
    let center = page_center();
    let id = center.notify_kind(message, kind.as_deref().unwrap_or("info"));
    center.dom_id(id)
}

#[wasm_bindgen(js_name = formatFileSize)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_file_size(bytes: f64) -> String {
    // Saturating cast: NaN and negatives become 0.
    crate::util::format_file_size(bytes as u64)
}

/// `allowed` is `{ mimeTypes: [...], extensions: [...] }`; missing lists are empty.
#[wasm_bindgen(js_name = validateFileType)]
pub fn validate_file_type(file: &File, allowed: &JsValue) -> bool {
    let descriptor = FileDescriptor::new(file.name(), file.type_());
    let allowed = JSON::stringify(allowed)
        .ok()
        .and_then(|raw| raw.as_string())
        .and_then(|raw| serde_json::from_str::<AllowedTypes>(&raw).ok())
        .unwrap_or_default();
    crate::util::validate_file_type(&descriptor, &allowed)
}

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(text: &str) -> String {
    crate::util::escape_html(text)
}

#[wasm_bindgen(js_name = sanitizeHtml)]
pub fn sanitize_html(text: &str) -> String {
    crate::util::sanitize_html(text)
}

#[wasm_bindgen(js_name = truncateText)]
pub fn truncate_text(text: &str, max_length: Option<u32>) -> String {
    let max = max_length.map_or(DEFAULT_TRUNCATE_LEN, |n| n as usize);
    crate::util::truncate_text(text, max)
}

#[wasm_bindgen(js_name = capitalizeFirst)]
pub fn capitalize_first(text: &str) -> String {
    crate::util::capitalize_first(text)
}

#[wasm_bindgen(js_name = generateRandomString)]
pub fn generate_random_string(length: Option<u32>) -> String {
    let len = length.map_or(DEFAULT_RANDOM_LEN, |n| n as usize);
    crate::util::generate_random_string(len)
}

#[wasm_bindgen(js_name = getCsrfToken)]
pub fn get_csrf_token() -> Option<String> {
    crate::util::csrf_token()
}

/// Report a failed request given an axios-style error object.
///
/// Returns the element id of the error toast.
#[wasm_bindgen(js_name = handleApiError)]
pub fn handle_api_error(error: &JsValue, custom_message: Option<String>) -> String {
    let failure = failure_from_js(error);
    let center = page_center();
    let fallback = custom_message.as_deref().unwrap_or(DEFAULT_API_ERROR);
    let id = crate::util::handle_api_error(&center, &failure, fallback);
    center.dom_id(id)
}

#[wasm_bindgen(js_name = previewImage)]
pub fn preview_image(input: &HtmlInputElement, preview: &HtmlImageElement) -> bool {
    crate::util::preview_image(input, preview)
}

/// Wrap `func` so it runs once, `wait` ms after the last call, with that
/// call's arguments.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: Function, wait: f64) -> JsValue {
    let debounced = Debounced::new(browser_timer(), millis(wait), move |args: Array| {
        invoke(&func, &JsValue::UNDEFINED, &args);
    });
    forward_calls(move |_this, args| debounced.call(args))
}

/// Wrap `func` so it runs at most once per `limit` ms; extra calls are dropped.
#[wasm_bindgen(js_name = throttle)]
pub fn throttle(func: Function, limit: f64) -> JsValue {
    let throttled = Throttled::new(browser_timer(), millis(limit), move |(this, args): (JsValue, Array)| {
        invoke(&func, &this, &args);
    });
    forward_calls(move |this, args| {
        throttled.call((this, args));
    })
}

// =============================================================================
// WINDOW.APPUTILS
// =============================================================================

fn install_app_utils() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let utils = Object::new();
    for name in APP_UTILS_MEMBERS {
        let Some(func) = app_utils_member(name) else {
            log::warn!("{APP_UTILS_GLOBAL}.{name} has no binding");
            continue;
        };
        let _ = Reflect::set(&utils, &JsValue::from_str(name), &func);
    }
    if let Err(e) = Reflect::set(&window, &JsValue::from_str(APP_UTILS_GLOBAL), &utils) {
        log::warn!("could not install window.{APP_UTILS_GLOBAL}: {e:?}");
    }
}

fn app_utils_member(name: &str) -> Option<JsValue> {
    let func = match name {
        "formatFileSize" => Closure::<dyn Fn(f64) -> String>::new(format_file_size).into_js_value(),
        "validateFileType" => Closure::<dyn Fn(File, JsValue) -> bool>::new(|file: File, allowed: JsValue| {
            validate_file_type(&file, &allowed)
        })
        .into_js_value(),
        "previewImage" => Closure::<dyn Fn(HtmlInputElement, HtmlImageElement) -> bool>::new(
            |input: HtmlInputElement, preview: HtmlImageElement| preview_image(&input, &preview),
        )
        .into_js_value(),
        "showToast" => Closure::<dyn Fn(String, Option<String>) -> String>::new(
            |message: String, kind: Option<String>| show_toast(&message, kind),
        )
        .into_js_value(),
        "handleApiError" => Closure::<dyn Fn(JsValue, Option<String>) -> String>::new(
            |error: JsValue, custom: Option<String>| handle_api_error(&error, custom),
        )
        .into_js_value(),
        "debounce" => Closure::<dyn Fn(Function, f64) -> JsValue>::new(debounce).into_js_value(),
        "throttle" => Closure::<dyn Fn(Function, f64) -> JsValue>::new(throttle).into_js_value(),
        "getCsrfToken" => Closure::<dyn Fn() -> Option<String>>::new(get_csrf_token).into_js_value(),
        "sanitizeHtml" => {
            Closure::<dyn Fn(String) -> String>::new(|text: String| sanitize_html(&text)).into_js_value()
        }
        "escapeHtml" => Closure::<dyn Fn(String) -> String>::new(|text: String| escape_html(&text)).into_js_value(),
        "truncateText" => Closure::<dyn Fn(String, Option<u32>) -> String>::new(
            |text: String, max: Option<u32>| truncate_text(&text, max),
        )
        .into_js_value(),
        "capitalizeFirst" => {
            Closure::<dyn Fn(String) -> String>::new(|text: String| capitalize_first(&text)).into_js_value()
        }
        "generateRandomString" => {
            Closure::<dyn Fn(Option<u32>) -> String>::new(generate_random_string).into_js_value()
        }
        _ => return None,
    };
    Some(func)
}

// =============================================================================
// JS VALUE CONVERSION
// =============================================================================

fn browser_timer() -> Rc<dyn Timer> {
    Rc::new(GlooTimer::new())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis(ms: f64) -> Duration {
    // Saturating cast: NaN and negatives become 0.
    Duration::from_millis(ms as u64)
}

fn invoke(func: &Function, this: &JsValue, args: &Array) {
    if let Err(e) = func.apply(this, args) {
        log::warn!("wrapped function threw: {e:?}");
    }
}

/// JS function that hands its `this` and full argument list to `run`.
fn forward_calls(run: impl Fn(JsValue, Array) + 'static) -> JsValue {
    let run = Closure::<dyn Fn(JsValue, Array)>::new(run).into_js_value();
    let shim = Function::new_with_args("run", "return function (...args) { run(this, args); };");
    shim.call1(&JsValue::NULL, &run).unwrap_or_else(|e| {
        log::warn!("could not build forwarding function: {e:?}");
        JsValue::UNDEFINED
    })
}

fn field(target: &JsValue, name: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn failure_from_js(error: &JsValue) -> ApiFailure {
    if let Some(response) = field(error, "response") {
        let status = field(&response, "status")
            .and_then(|s| s.as_f64())
            .map_or(0, |s| s as u16);
        let body = field(&response, "data")
            .and_then(|data| JSON::stringify(&data).ok())
            .and_then(|raw| raw.as_string())
            .and_then(|raw| serde_json::from_str(&raw).ok());
        return ApiFailure::Response { status, body };
    }
    if field(error, "request").is_some() {
        return ApiFailure::NoResponse;
    }
    let message = field(error, "message")
        .and_then(|m| m.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_default();
    ApiFailure::Setup(message)
}
