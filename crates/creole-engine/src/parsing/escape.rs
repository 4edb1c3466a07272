use std::borrow::Cow;

use super::inline::SENTINELS;

/// Escapes HTML-significant characters of the whole input once.
///
/// Every later pass works on the escaped text, so the only tags in the output
/// are the ones the passes emit themselves. Line endings are normalised to
/// `\n` and the private-use characters reserved for inline raw zones are
/// replaced so they can never appear in user text. The same goes for the
/// sentinels that hide link targets from span formatting.
pub fn escape(text: &str) -> String {
    let normalized: Cow<'_, str> = if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let escaped = html_escape::encode_double_quoted_attribute(normalized.as_ref());
    if escaped.contains(SENTINELS) {
        escaped.replace(SENTINELS, "\u{FFFD}")
    } else {
        escaped.into_owned()
    }
}

/// Reverses [`escape`] for text handed to code that expects the raw markup.
pub fn unescape(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
