//! # Table Reconstruction
//!
//! A run of lines starting with `|` is one table. Rows are split on `|`; a
//! split that lands inside `[[…|…]]` or `{{…|…}}` is undone by merging the
//! pieces back together.

use super::{Claim, CreoleLineClassifier, LineKind, kinds::TableRow, runs};
use crate::parsing::inline::{
    InlineFormatter,
    kinds::{ImageTag, LinkTag},
};

pub fn find_tables(text: &str, inline: &InlineFormatter<'_>) -> Vec<Claim> {
    let lines = CreoleLineClassifier.classify_all(text);
    runs(&lines, |k| matches!(k, LineKind::TableRow))
        .into_iter()
        .map(|run| {
            let mut html = String::from("<table>\n");
            for line in &lines[run.clone()] {
                html.push_str(&render_row(line.content, inline));
            }
            html.push_str("</table>\n");
            Claim::lines(&lines, run, html)
        })
        .collect()
}

fn render_row(line: &str, inline: &InlineFormatter<'_>) -> String {
    let mut html = String::from("<tr>");
    for cell in split_row(line) {
        let cell = cell.trim();
        match cell.strip_prefix(TableRow::HEADER) {
            Some(header) => {
                html.push_str("<th>");
                html.push_str(&inline.format(header.trim()));
                html.push_str("</th>");
            }
            None => {
                html.push_str("<td>");
                html.push_str(&inline.format(cell));
                html.push_str("</td>");
            }
        }
    }
    html.push_str("</tr>\n");
    html
}

/// Splits a row into cells, keeping `|` that belongs to a link or image.
pub fn split_row(line: &str) -> Vec<String> {
    let t = line.trim();
    let t = t.strip_prefix(TableRow::SEPARATOR).unwrap_or(t);
    let t = t.strip_suffix(TableRow::SEPARATOR).unwrap_or(t);

    let candidates: Vec<&str> = t.split(TableRow::SEPARATOR).collect();
    let mut cells = Vec::with_capacity(candidates.len());
    let mut i = 0;
    while i < candidates.len() {
        let mut cell = candidates[i].to_string();
        i += 1;
        while let Some(next) = candidates.get(i) {
            let open_link = unclosed(&cell, LinkTag::OPEN, LinkTag::CLOSE) && next.contains(LinkTag::CLOSE);
            let open_image =
                unclosed(&cell, ImageTag::OPEN, ImageTag::CLOSE) && next.contains(ImageTag::CLOSE);
            if !(open_link || open_image) {
                break;
            }
            cell.push(TableRow::SEPARATOR);
            cell.push_str(next);
            i += 1;
        }
        cells.push(cell);
    }
    cells
}

fn unclosed(cell: &str, open: &str, close: &str) -> bool {
    cell.matches(open).count() > cell.matches(close).count()
}
