// Errors raised while acquiring browser capabilities. The decorative layer
// never surfaces these to the user; callers log them and carry on without
// the capability.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2d rendering context unavailable")]
    NoContext,

    #[error("animation frame callback not installed")]
    FrameCallbackMissing,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
