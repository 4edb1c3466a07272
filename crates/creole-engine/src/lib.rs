//! Creole wiki markup to HTML.
//!
//! ```
//! use creole_engine::Parser;
//!
//! let parser = Parser::new();
//! assert_eq!(parser.parse("**Hello**"), "<p><strong>Hello</strong></p>\n");
//! ```

pub mod error;
pub mod macros;
pub mod options;
pub mod pages;
pub mod parser;
pub mod parsing;
pub mod render;
pub mod warning;

// Re-export key types for easier usage
pub use error::EngineError;
pub use macros::{MacroHandler, MacroRegistry};
pub use options::{OptionKey, OptionValue, Options};
pub use pages::{PageCatalog, PageExists, slugify};
pub use parser::Parser;
pub use parsing::Rendered;
pub use render::{LinkRenderer, Renderer, Template, TemplateError};
pub use warning::Warning;
