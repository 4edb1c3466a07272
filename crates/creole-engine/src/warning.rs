use std::fmt;

/// A recoverable condition met while rendering. The offending markup is kept
/// as literal text and rendering carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A macro block names a macro that was never registered.
    UnregisteredMacro { name: String, line: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnregisteredMacro { name, line } => {
                write!(f, "line {line}: unregistered macro `{name}`")
            }
        }
    }
}
