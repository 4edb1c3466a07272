// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_creole_content(size: usize) -> String {
    let base = "= Title\n\n== Section ==\n\nParagraph with **bold**, //italic// and a [[Home|link]].\nSee http://example.org for more.\n\n* Bullet point\n** Nested item\n* Another item\n\n|=Name|=Value|\n|a|[[Page|b]]|\n\n{{{\nfn example() {}\n}}}\n\n----\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for item in 0..items {
        for level in 1..=depth {
            let marker = if level % 2 == 0 { "#" } else { "*" };
            content.push_str(&format!("{} Item {item}.{level}\n", marker.repeat(level)));
        }
    }
    content
}
