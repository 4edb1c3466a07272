//! # Inline Kinds
//!
//! Inline span styles own their delimiters and tags. The formatting passes
//! read these tables; they never hardcode `**` or `//`.

/// The escape marker. A delimiter directly after it is literal text.
pub const ESCAPE: u8 = b'~';

/// Characters the escape marker may protect; the marker is dropped before them.
pub const ESCAPABLE: &[u8] = b"*/-_^,#[]{}|=\\~";

/// The forced line break marker.
pub const LINE_BREAK: &[u8] = b"\\\\";

/// One delimiter-pair formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    pub name: &'static str,
    pub delimiter: &'static [u8],
    pub tag: &'static str,
    /// Whether a span may continue over line breaks.
    pub multiline: bool,
    /// Whether the span is rejected when other guarded delimiters inside it
    /// are unbalanced.
    pub guarded: bool,
    /// Whether a delimiter directly after `:` is literal (URL schemes).
    pub after_colon_is_literal: bool,
}

impl SpanStyle {
    pub const BOLD: SpanStyle = SpanStyle {
        name: "bold",
        delimiter: b"**",
        tag: "strong",
        multiline: true,
        guarded: true,
        after_colon_is_literal: false,
    };
    pub const ITALIC: SpanStyle = SpanStyle {
        name: "italic",
        delimiter: b"//",
        tag: "em",
        multiline: true,
        guarded: true,
        after_colon_is_literal: true,
    };
    pub const STRIKETHROUGH: SpanStyle = SpanStyle {
        name: "strikethrough",
        delimiter: b"--",
        tag: "del",
        multiline: false,
        guarded: true,
        after_colon_is_literal: false,
    };
    pub const UNDERLINE: SpanStyle = SpanStyle {
        name: "underline",
        delimiter: b"__",
        tag: "u",
        multiline: false,
        guarded: true,
        after_colon_is_literal: false,
    };
    pub const MONOSPACE: SpanStyle = SpanStyle {
        name: "monospace",
        delimiter: b"##",
        tag: "tt",
        multiline: false,
        guarded: true,
        after_colon_is_literal: false,
    };
    pub const SUPERSCRIPT: SpanStyle = SpanStyle {
        name: "superscript",
        delimiter: b"^^",
        tag: "sup",
        multiline: false,
        guarded: false,
        after_colon_is_literal: false,
    };
    pub const SUBSCRIPT: SpanStyle = SpanStyle {
        name: "subscript",
        delimiter: b",,",
        tag: "sub",
        multiline: false,
        guarded: false,
        after_colon_is_literal: false,
    };

    /// Every style, in the order the passes apply them.
    pub const ALL: [SpanStyle; 7] = [
        SpanStyle::BOLD,
        SpanStyle::ITALIC,
        SpanStyle::STRIKETHROUGH,
        SpanStyle::UNDERLINE,
        SpanStyle::MONOSPACE,
        SpanStyle::SUPERSCRIPT,
        SpanStyle::SUBSCRIPT,
    ];
}

/// Bracketed link syntax.
pub struct LinkTag;

impl LinkTag {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const SEPARATOR: char = '|';
}

/// Bracketed image syntax.
pub struct ImageTag;

impl ImageTag {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";
    pub const SEPARATOR: char = '|';
}
