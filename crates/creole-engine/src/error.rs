use crate::render::TemplateError;

/// Rejected configuration or registration calls. A failed call leaves the
/// parser unchanged.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value for option `{key}`: expected {expected}")]
    InvalidOptionValue { key: String, expected: &'static str },
    #[error("Invalid template for option `{key}`: {source}")]
    InvalidTemplate {
        key: String,
        #[source]
        source: TemplateError,
    },
    #[error("Invalid macro name: {0:?}")]
    InvalidMacroName(String),
}
