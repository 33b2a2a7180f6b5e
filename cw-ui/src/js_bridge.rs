//! Typed wrappers around browser calls via `js_sys`.
//!
//! Anything evaluated as a script is wrapped in try/catch so a failing
//! browser API never takes the app down.

use chrono::{DateTime, Utc};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Milliseconds since the Unix epoch, from the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// `chrono` has no clock on `wasm32-unknown-unknown` without extra features;
/// read it from the browser instead.
pub fn wall_clock() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms() as i64).unwrap_or_default()
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Blocking browser alert, used for mock confirmations.
pub fn alert(message: &str) {
    let quoted = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    call_js(&format!("window.alert({});", quoted));
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

static GEOLOCATION_JS: &str = r#"
new Promise(function(resolve, reject) {
    if (!navigator.geolocation) {
        reject('Geolocation is not supported by this browser');
        return;
    }
    navigator.geolocation.getCurrentPosition(
        function(p) { resolve([p.coords.latitude, p.coords.longitude]); },
        function(e) { reject(e.message || 'Unable to get location'); }
    );
})
"#;

/// One-shot current position from the browser.
pub async fn current_position() -> Result<GeoFix, String> {
    let promise = js_sys::eval(GEOLOCATION_JS)
        .map_err(|e| e.as_string().unwrap_or_else(|| "geolocation unavailable".to_string()))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "geolocation did not return a promise".to_string())?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unable to get location".to_string()))?;
    let coords = js_sys::Array::from(&value);
    let latitude = coords.get(0).as_f64().ok_or("position has no latitude")?;
    let longitude = coords.get(1).as_f64().ok_or("position has no longitude")?;
    Ok(GeoFix { latitude, longitude })
}

/// Names of the files currently chosen in an `<input type="file">`.
pub fn selected_file_names(input_id: &str) -> Vec<String> {
    let quoted = serde_json::to_string(input_id).unwrap_or_else(|_| "\"\"".to_string());
    let code = format!(
        "(function() {{ var el = document.getElementById({}); \
         return el && el.files ? Array.from(el.files).map(function(f) {{ return f.name; }}) : []; }})()",
        quoted
    );
    match js_sys::eval(&code) {
        Ok(value) => js_sys::Array::from(&value)
            .iter()
            .filter_map(|v| v.as_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Open the file picker behind a hidden input.
pub fn click_element(id: &str) {
    let quoted = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    call_js(&format!("var el = document.getElementById({}); if (el) el.click();", quoted));
}
