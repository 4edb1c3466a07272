//! Macro blocks: `<<<name args`, body lines, `>>>`.

use log::{debug, warn};

use super::{Claim, CreoleLineClassifier, LineClass, LineKind};
use crate::{
    macros::MacroRegistry,
    parsing::escape::unescape,
    warning::Warning,
};

/// Finds macro blocks in `text` and expands the registered ones.
///
/// Unregistered macros produce a warning and stay in the text. `first_line`
/// is the 1-based line number of the start of `text` in the document.
pub fn find_macros(
    text: &str,
    first_line: usize,
    registry: &MacroRegistry,
    warnings: &mut Vec<Warning>,
) -> Vec<Claim> {
    let lines = CreoleLineClassifier.classify_all(text);
    let mut claims = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let LineKind::MacroOpen(open) = lines[i].kind else {
            i += 1;
            continue;
        };
        let Some(close) = (i + 1..lines.len()).find(|&j| lines[j].kind == LineKind::MacroClose)
        else {
            debug!("macro `{}` on line {} is never closed", open.name, first_line + i);
            i += 1;
            continue;
        };

        let name = unescape(open.name);
        match registry.get(&name) {
            Some(handler) => {
                let args: Vec<String> =
                    open.args.split_whitespace().map(str::to_string).collect();
                let body = body_text(&lines[i + 1..close]);
                debug!("expanding macro `{name}` with {} args", args.len());
                claims.push(Claim::lines(&lines, i..close + 1, handler.expand(&args, &body)));
            }
            None => {
                let line = first_line + i;
                warn!("unregistered macro `{name}` on line {line}");
                warnings.push(Warning::UnregisteredMacro { name, line });
            }
        }
        i = close + 1;
    }
    claims
}

fn body_text(lines: &[LineClass<'_>]) -> String {
    lines
        .iter()
        .map(|l| l.content)
        .collect::<Vec<_>>()
        .join("\n")
}
