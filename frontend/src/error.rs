use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("invalid site content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("{0}")]
    Validation(&'static str),
}

impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_naturally() {
        assert_eq!(
            SiteError::UnknownTheme("blue".into()).to_string(),
            "unknown theme `blue`"
        );
        assert_eq!(
            SiteError::Validation("Please enter your name").to_string(),
            "Please enter your name"
        );
    }
}
