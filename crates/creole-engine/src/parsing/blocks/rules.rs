use super::{Claim, CreoleLineClassifier, LineKind, kinds::Rule};

/// Each `----` line becomes `<hr />`.
pub fn find_rules(text: &str) -> Vec<Claim> {
    let lines = CreoleLineClassifier.classify_all(text);
    (0..lines.len())
        .filter(|&i| lines[i].kind == LineKind::Rule)
        .map(|i| Claim::lines(&lines, i..i + 1, Rule::HTML.to_string()))
        .collect()
}
