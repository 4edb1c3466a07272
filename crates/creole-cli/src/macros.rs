//! Macros the command line registers on every parser.

use creole_engine::{EngineError, Parser};

pub fn register_builtin(parser: &mut Parser) -> Result<(), EngineError> {
    parser.register_macro("code", code_block)
}

/// `<<<code lang` renders its body as a code block. Macro input arrives
/// escaped, so it goes into the markup unchanged.
fn code_block(args: &[String], body: &str) -> String {
    match args.first() {
        Some(lang) => format!("<pre><code class=\"language-{lang}\">{body}</code></pre>"),
        None => format!("<pre><code>{body}</code></pre>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_block_escapes_body() {
        let mut parser = Parser::new();
        register_builtin(&mut parser).unwrap();
        assert_eq!(
            parser.parse("<<<code rust\nif a < b && c {}\n>>>"),
            "<pre><code class=\"language-rust\">if a &lt; b &amp;&amp; c {}</code></pre>\n"
        );
    }

    #[test]
    fn code_block_without_language() {
        assert_eq!(code_block(&[], "x"), "<pre><code>x</code></pre>");
    }
}
