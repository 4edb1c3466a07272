//! Block macro handlers and their registry.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::EngineError;

/// Expands one macro block into HTML.
///
/// `args` are the whitespace-separated words after the macro name, `body` the
/// lines between the opening and closing lines. Both arrive entity-escaped,
/// so they can be placed in the output as they are; the returned HTML is
/// inserted as-is.
pub trait MacroHandler: Send + Sync {
    fn expand(&self, args: &[String], body: &str) -> String;
}

impl<F> MacroHandler for F
where
    F: Fn(&[String], &str) -> String + Send + Sync,
{
    fn expand(&self, args: &[String], body: &str) -> String {
        self(args, body)
    }
}

/// Macro name to handler map.
#[derive(Clone, Default)]
pub struct MacroRegistry {
    handlers: HashMap<String, Arc<dyn MacroHandler>>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any earlier handler.
    pub fn register(
        &mut self,
        name: &str,
        handler: Arc<dyn MacroHandler>,
    ) -> Result<(), EngineError> {
        if !is_valid_name(name) {
            return Err(EngineError::InvalidMacroName(name.to_string()));
        }
        if self.handlers.insert(name.to_string(), handler).is_some() {
            log::debug!("macro `{name}` re-registered");
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn MacroHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn shout(_args: &[String], body: &str) -> String {
        body.to_uppercase()
    }

    #[test]
    fn registers_and_expands() {
        let mut registry = MacroRegistry::new();
        registry.register("shout", Arc::new(shout)).unwrap();
        assert!(registry.contains("shout"));
        let handler = registry.get("shout").unwrap();
        assert_eq!(handler.expand(&[], "hi"), "HI");
    }

    #[test]
    fn closures_receive_args() {
        let mut registry = MacroRegistry::new();
        registry
            .register(
                "join",
                Arc::new(|args: &[String], _body: &str| args.join("+")),
            )
            .unwrap();
        let args = vec!["a".to_string(), "b".to_string()];
        assert_eq!(registry.get("join").unwrap().expand(&args, ""), "a+b");
    }

    #[rstest]
    #[case("")]
    #[case("two words")]
    #[case("tab\tname")]
    fn rejects_invalid_names(#[case] name: &str) {
        let mut registry = MacroRegistry::new();
        let err = registry.register(name, Arc::new(shout)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidMacroName(_)));
        assert!(registry.names().is_empty());
    }

    #[test]
    fn later_registration_wins() {
        let mut registry = MacroRegistry::new();
        registry.register("m", Arc::new(shout)).unwrap();
        registry
            .register("m", Arc::new(|_: &[String], _: &str| "second".to_string()))
            .unwrap();
        assert_eq!(registry.get("m").unwrap().expand(&[], "x"), "second");
        assert_eq!(format!("{registry:?}"), r#"{"m"}"#);
    }
}
