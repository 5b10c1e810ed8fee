use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlHeadElement, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <head>")]
    NoHead,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("could not encode structured data: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn head() -> Result<HtmlHeadElement, DomError> {
    document()?.head().ok_or(DomError::NoHead)
}

pub fn document_element() -> Result<Element, DomError> {
    document()?
        .document_element()
        .ok_or(DomError::MissingElement("<html>"))
}
