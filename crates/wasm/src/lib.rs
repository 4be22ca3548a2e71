//! WASM bindings for resume extraction and portfolio export.
//!
//! This crate exposes the core to JavaScript so the editing UI can run the
//! extractor and exporters in the browser.

use folio_core::{normalize_link, HtmlExporter, Portfolio, ResumeDraft, ResumeExtractor, Theme};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects rather than ES Maps so the UI can spread them.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&format!("Serialization error: {}", e)))
}

fn from_js(value: JsValue) -> Result<Portfolio, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error(&format!("Invalid portfolio object: {}", e)))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Extract a draft from pasted resume text.
///
/// # Returns
/// A JavaScript object shaped like `ResumeDraft`, or throws when the text is
/// over the size limit.
#[wasm_bindgen]
pub fn extract_resume(text: &str) -> Result<JsValue, JsValue> {
    let draft = extract_resume_impl(text).map_err(|e| js_error(&e))?;
    to_js(&draft)
}

fn extract_resume_impl(text: &str) -> Result<ResumeDraft, String> {
    ResumeExtractor::new()
        .extract(text)
        .map_err(|e| e.to_string())
}

/// Load a portfolio from an uploaded JSON document.
#[wasm_bindgen]
pub fn import_portfolio(json: &str) -> Result<JsValue, JsValue> {
    let portfolio = Portfolio::from_json(json).map_err(|e| js_error(&e.to_string()))?;
    to_js(&portfolio)
}

/// Import JSON on top of the current portfolio.
///
/// `contact` is merged, presentation fields are kept unless the document
/// sets them, and everything else is replaced. Throws without returning a
/// partial result when the document is malformed.
#[wasm_bindgen]
pub fn merge_portfolio(current: JsValue, json: &str) -> Result<JsValue, JsValue> {
    let current = from_js(current)?;
    let merged = merge_portfolio_impl(current, json)?;
    to_js(&merged)
}

fn merge_portfolio_impl(mut current: Portfolio, json: &str) -> Result<Portfolio, String> {
    current.import_json(json).map_err(|e| e.to_string())?;
    Ok(current)
}

/// Serialize a portfolio for download.
#[wasm_bindgen]
pub fn export_portfolio(portfolio: JsValue) -> Result<String, JsValue> {
    let portfolio = from_js(portfolio)?;
    portfolio
        .export_json()
        .map_err(|e| js_error(&e.to_string()))
}

/// Render a standalone HTML page.
///
/// # Arguments
/// * `portfolio` - The portfolio object
/// * `theme` - Optional theme name overriding the portfolio's own theme
#[wasm_bindgen]
pub fn render_portfolio(portfolio: JsValue, theme: Option<String>) -> Result<String, JsValue> {
    let portfolio = from_js(portfolio)?;
    render_portfolio_impl(&portfolio, theme.as_deref()).map_err(|e| js_error(&e))
}

fn render_portfolio_impl(portfolio: &Portfolio, theme: Option<&str>) -> Result<String, String> {
    let mut exporter = HtmlExporter::new();
    if let Some(name) = theme.filter(|t| !t.trim().is_empty()) {
        exporter = exporter.with_theme(name.parse::<Theme>()?);
    }
    Ok(exporter.render(portfolio))
}

/// Normalize a link for an `href`, returning `#` for blank input.
#[wasm_bindgen]
pub fn normalize_url(raw: Option<String>) -> String {
    normalize_link(raw.as_deref())
}

/// Suggested download name for the page, e.g. `jane_doe_portfolio.html`.
#[wasm_bindgen]
pub fn html_file_name(portfolio: JsValue) -> Result<String, JsValue> {
    let portfolio = from_js(portfolio)?;
    Ok(format!("{}_portfolio.html", portfolio.file_stem()))
}

/// Suggested download name for the JSON export, e.g. `jane_doe_data.json`.
#[wasm_bindgen]
pub fn json_file_name(portfolio: JsValue) -> Result<String, JsValue> {
    let portfolio = from_js(portfolio)?;
    Ok(format!("{}_data.json", portfolio.file_stem()))
}
