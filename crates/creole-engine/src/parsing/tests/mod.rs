//! Pipeline tests over whole documents.


use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    macros::MacroRegistry,
    options::{OptionKey, Options},
    pages::PageCatalog,
    parsing::{Rendered, render_document},
    warning::Warning,
};

fn render(text: &str) -> String {
    let html = render_document(text, &Options::default(), &MacroRegistry::new()).html;
    invariants::check(&html);
    html
}

fn render_with_macros(text: &str) -> Rendered {
    let mut macros = MacroRegistry::new();
    macros
        .register(
            "wrap",
            Arc::new(|_: &[String], body: &str| format!("<div>{body}</div>")),
        )
        .unwrap();
    render_document(text, &Options::default(), &macros)
}

#[rstest]
#[case::empty("", "")]
#[case::blank_lines("\n\n  \n", "")]
#[case::paragraph("Hello world", "<p>Hello world</p>\n")]
#[case::two_paragraphs("one\n\ntwo", "<p>one</p>\n<p>two</p>\n")]
#[case::escaped("a < b & \"c\"", "<p>a &lt; b &amp; &quot;c&quot;</p>\n")]
#[case::heading("== Title ==", "<h2>Title</h2>\n")]
#[case::rule("----", "<hr />\n")]
#[case::crlf("a\r\n\r\nb", "<p>a</p>\n<p>b</p>\n")]
fn renders_documents(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render(input), expected);
}

#[test]
fn blocks_split_paragraphs() {
    assert_eq!(
        render("intro\n* one\n* two\nafter"),
        "<p>intro</p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>\n"
    );
}

#[test]
fn mixed_document() {
    let input = "= Title\n\nSome **bold** text.\n\n|=A|=B|\n|1|2|\n----\n{{{\n**raw**\n}}}\n# first\n# second";
    assert_eq!(
        render(input),
        concat!(
            "<h1>Title</h1>\n",
            "<p>Some <strong>bold</strong> text.</p>\n",
            "<table>\n<tr><th>A</th><th>B</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>\n",
            "<hr />\n",
            "<pre>**raw**</pre>\n",
            "<ol>\n<li>first</li>\n<li>second</li>\n</ol>\n",
        )
    );
}

#[test]
fn verbatim_block_content_is_not_formatted() {
    assert_eq!(
        render("{{{\n* not a list\n|not|table|\n== not heading\n}}}"),
        "<pre>* not a list\n|not|table|\n== not heading</pre>\n"
    );
}

#[test]
fn verbatim_block_keeps_escaping() {
    assert_eq!(render("{{{\n<b>&\n}}}"), "<pre>&lt;b&gt;&amp;</pre>\n");
}

#[test]
fn list_nesting_jump_is_left_as_text() {
    assert_eq!(render("* a\n*** c"), "<p>* a\n*** c</p>\n");
}

#[test]
fn bold_at_line_start_is_not_a_list() {
    assert_eq!(render("**bold** start"), "<p><strong>bold</strong> start</p>\n");
}

#[test]
fn registered_macro_is_expanded() {
    let rendered = render_with_macros("before\n<<<wrap\na < b\n>>>\nafter");
    assert_eq!(
        rendered.html,
        "<p>before</p>\n<div>a &lt; b</div>\n<p>after</p>\n"
    );
    assert!(rendered.warnings.is_empty());
}

#[test]
fn unregistered_macro_passes_through_with_warning() {
    let rendered = render_with_macros("text\n\n<<<missing arg\nbody\n>>>");
    assert_eq!(
        rendered.html,
        "<p>text</p>\n<p>&lt;&lt;&lt;missing arg\nbody\n&gt;&gt;&gt;</p>\n"
    );
    assert_eq!(
        rendered.warnings,
        vec![Warning::UnregisteredMacro {
            name: "missing".into(),
            line: 3
        }]
    );
}

#[test]
fn fresh_context_per_call() {
    let options = Options::default();
    let macros = MacroRegistry::new();
    let first = render_document("* only in first\n\n|t|", &options, &macros);
    let second = render_document("plain", &options, &macros);
    assert!(first.html.contains("<ul>"));
    assert_eq!(second.html, "<p>plain</p>\n");
}

#[test]
fn links_use_page_catalog() {
    let catalog: PageCatalog = ["Home"].into_iter().collect();
    let options = Options::default()
        .with(OptionKey::BaseUrl, "/w/")
        .unwrap()
        .with(OptionKey::Pages, catalog)
        .unwrap();
    let html = render_document("[[Home]] [[New Page]]", &options, &MacroRegistry::new()).html;
    assert_eq!(
        html,
        concat!(
            r#"<p><a class="internal" href="/w/Home">Home</a> "#,
            r#"<a class="internal missing" href="/w/New-Page" title="Create this page">New Page</a></p>"#,
            "\n"
        )
    );
}
