use creole_engine::{OptionKey, Options, PageCatalog, Parser, Warning};
use pretty_assertions::assert_eq;

#[test]
fn simple_unordered_list() {
    assert_eq!(
        Parser::new().parse("* Alpha\n* Beta"),
        "<ul>\n<li>Alpha</li>\n<li>Beta</li>\n</ul>\n"
    );
}

#[test]
fn nested_mixed_list() {
    assert_eq!(
        Parser::new().parse("* Item 1\n** Item 1.1\n* Item 2"),
        "<ul>\n<li>Item 1<ul>\n<li>Item 1.1</li>\n</ul>\n</li>\n<li>Item 2</li>\n</ul>\n"
    );
}

#[test]
fn table_with_header_row() {
    assert_eq!(
        Parser::new().parse("|=Name|=Age|\n|Paul|34|"),
        "<table>\n<tr><th>Name</th><th>Age</th></tr>\n<tr><td>Paul</td><td>34</td></tr>\n</table>\n"
    );
}

#[test]
fn external_versus_internal_link() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse("[[http://example.org|Example]]"),
        "<p><a class=\"external\" href=\"http://example.org\">Example</a></p>\n"
    );
    assert_eq!(
        parser.parse("[[MyPage]]"),
        "<p><a class=\"internal\" href=\"MyPage\">MyPage</a></p>\n"
    );

    let catalog: PageCatalog = ["OtherPage"].into_iter().collect();
    let parser = Parser::with_options(Options::default().with(OptionKey::Pages, catalog).unwrap());
    assert_eq!(
        parser.parse("[[MyPage]]"),
        "<p><a class=\"internal missing\" href=\"MyPage\" title=\"Create this page\">MyPage</a></p>\n"
    );
}

#[test]
fn unregistered_macro_passes_through() {
    let rendered = Parser::new().parse_with_report("<<<gallery big\nimg1\n>>>");
    assert_eq!(
        rendered.html,
        "<p>&lt;&lt;&lt;gallery big\nimg1\n&gt;&gt;&gt;</p>\n"
    );
    assert_eq!(
        rendered.warnings,
        vec![Warning::UnregisteredMacro {
            name: "gallery".into(),
            line: 1
        }]
    );
    assert_eq!(rendered.warnings[0].to_string(), "line 1: unregistered macro `gallery`");
}

#[test]
fn custom_templates_change_link_markup() {
    let mut parser = Parser::new();
    parser
        .set_option("external_link", "<a href=\"{url}\" rel=\"nofollow\">{text}</a>")
        .unwrap();
    parser.set_option("url_link", "<{url}>").unwrap();
    assert_eq!(
        parser.parse("[[http://a.org|A]] http://b.org"),
        "<p><a href=\"http://a.org\" rel=\"nofollow\">A</a> <http://b.org></p>\n"
    );
}
