//! WASM bindings for the Abacus expression engine.
//!
//! Exposes `evaluate()` and `scan()` to JavaScript via wasm-bindgen. The
//! keypad UI owns its text buffer and only calls in here when the user
//! presses `=`.

use wasm_bindgen::prelude::*;

/// Evaluate an expression.
///
/// Returns a JS object `{ ok: boolean, text: string }`. When `ok` is true,
/// `text` is the result; otherwise it is the three-line diagnostic, meant
/// to be shown with preserved line breaks.
#[wasm_bindgen]
pub fn evaluate(source: &str) -> Result<JsValue, JsError> {
    let (ok, text) = match abacus_format::evaluate_expression(source) {
        Ok(result) => (true, result),
        Err(diagnostic) => (false, diagnostic),
    };

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"ok".into(), &ok.into())
        .map_err(|_| JsError::new("Failed to set ok property"))?;
    js_sys::Reflect::set(&js_obj, &"text".into(), &text.into())
        .map_err(|_| JsError::new("Failed to set text property"))?;

    Ok(js_obj.into())
}

/// Scan an expression into an array of token objects
/// `{ symbol, value, message, column, length }`.
#[wasm_bindgen]
pub fn scan(source: &str) -> Result<JsValue, JsError> {
    let tokens = abacus_lexer::Scanner::scan(source);
    serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
