use std::sync::Arc;

use crate::{
    error::EngineError,
    macros::{MacroHandler, MacroRegistry},
    options::{OptionKey, OptionValue, Options},
    parsing::{Rendered, render_document},
};

/// A reusable Creole to HTML converter.
///
/// Configuration and macro registration take `&mut self`; rendering takes
/// `&self` and keeps all per-document state in a fresh context, so one parser
/// can serve any number of documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
    macros: MacroRegistry,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            macros: MacroRegistry::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Registers a macro handler function under `name`.
    pub fn register_macro<F>(&mut self, name: &str, handler: F) -> Result<(), EngineError>
    where
        F: Fn(&[String], &str) -> String + Send + Sync + 'static,
    {
        self.macros.register(name, Arc::new(handler))
    }

    /// Registers a shared handler under `name`.
    pub fn register_handler(
        &mut self,
        name: &str,
        handler: Arc<dyn MacroHandler>,
    ) -> Result<(), EngineError> {
        self.macros.register(name, handler)
    }

    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.contains(name)
    }

    /// Sets an option by name. Unknown keys, values of the wrong kind and
    /// malformed templates are rejected and leave the parser unchanged.
    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) -> Result<(), EngineError> {
        let key: OptionKey = key.parse()?;
        self.options.set(key, value)
    }

    pub fn get_option(&self, key: &str) -> Result<OptionValue, EngineError> {
        let key: OptionKey = key.parse()?;
        Ok(self.options.get(key))
    }

    /// Renders a document to HTML.
    pub fn parse(&self, text: &str) -> String {
        self.parse_with_report(text).html
    }

    /// Renders a document and reports the recoverable problems met on the way.
    pub fn parse_with_report(&self, text: &str) -> Rendered {
        render_document(text, &self.options, &self.macros)
    }
}
