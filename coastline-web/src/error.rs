use wasm_bindgen::JsValue;

/// Host failures while wiring or driving widgets.
///
/// These never reach the visitor; they are logged and the affected widget is
/// left inert.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Unexpected element type for {0}")]
    ElementType(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
