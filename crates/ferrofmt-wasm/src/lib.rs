//! WebAssembly bridge exposing the ferrofmt canonicalizer to JavaScript.
//!
//! The module stays resident for the lifetime of the host page, so there is
//! no keep-alive machinery here; `formatRust` is a plain synchronous call.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format Rust source text.
///
/// Returns the canonical form of `code`. If `code` does not parse, the
/// failure is logged to the console and the original text is returned
/// unchanged so the caller never loses its input. A missing argument
/// (`undefined` on the JS side) logs a diagnostic and returns `null`.
#[wasm_bindgen(js_name = "formatRust")]
pub fn format_rust(code: Option<String>) -> Option<String> {
    let Some(code) = code else {
        gloo_console::error!("formatRust: missing code argument");
        return None;
    };

    match ferrofmt::canonicalize(&code, &ferrofmt::Config::default()) {
        Ok(formatted) => Some(formatted),
        Err(err) => {
            // Hosts like Prettier expect the original text back when the
            // source does not parse.
            gloo_console::error!(format!("Error formatting Rust code: {err}"));
            Some(code)
        }
    }
}

/// Crate version, for host-side diagnostics.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
