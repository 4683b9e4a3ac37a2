//! Inline markup used throughout the content tree.
//!
//! Four tags are recognised:
//!
//! | Tag        | Meaning     |
//! |------------|-------------|
//! | `~i...~i`  | italic      |
//! | `~b...~b`  | bold        |
//! | `~u...~u`  | underline   |
//! | `~n`       | line break  |
//!
//! Tags nest (`~u~bHELLO~b~u world` is bold and underlined "HELLO" followed
//! by plain " world"). A tag without a closer is kept as literal text.
//!
//! The closer for `~X` is the first literal `~X` after the opener, so two
//! nested tags of the same type close early: `~b a ~b b ~b c~b` yields
//! bold " a ", plain " b " and bold " c".
//!
//! Boundaries only surround outermost spans. Everything inside a span stays
//! unpadded, including text after a nested closer or a `~n`, so in
//! `~uA ~bB~b C ~iD~i~u` neither `B` nor `D` is padded. Earlier renderers
//! padded `D` here; that behaviour is intentionally not kept.
//!
//! ```rust
//! use supdash_core::markup::{render, to_plain, Fragment, NBSP};
//!
//! let fragments = render("~bhello~b world");
//! assert_eq!(fragments[1], Fragment::Bold(vec![Fragment::Text("hello".into())]));
//! assert_eq!(to_plain(&fragments), format!("{NBSP}hello{NBSP} world"));
//! ```

use serde::Serialize;

/// Boundary character placed around outermost styled spans.
pub const NBSP: char = '\u{a0}';

/// Characters that suppress the trailing boundary after a closing tag.
const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '}', ']'];

const LINE_BREAK: &str = "~n";

/// Rendered markup node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Fragment {
    Text(String),
    Break,
    Bold(Vec<Fragment>),
    Italic(Vec<Fragment>),
    Underline(Vec<Fragment>),
}

impl Fragment {
    /// Children of a styled fragment.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Bold(children) | Self::Italic(children) | Self::Underline(children) => children,
            Self::Text(_) | Self::Break => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Italic,
    Bold,
    Underline,
}

impl Style {
    const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'i' => Some(Self::Italic),
            b'b' => Some(Self::Bold),
            b'u' => Some(Self::Underline),
            _ => None,
        }
    }

    const fn marker(self) -> &'static str {
        match self {
            Self::Italic => "~i",
            Self::Bold => "~b",
            Self::Underline => "~u",
        }
    }

    const fn wrap(self, children: Vec<Fragment>) -> Fragment {
        match self {
            Self::Italic => Fragment::Italic(children),
            Self::Bold => Fragment::Bold(children),
            Self::Underline => Fragment::Underline(children),
        }
    }
}

/// Parse `text` into display fragments.
///
/// Empty input yields no fragments; input without tags yields a single
/// [`Fragment::Text`].
pub fn render(text: &str) -> Vec<Fragment> {
    let mut out = Vec::new();
    parse_into(text, false, &mut out);
    out
}

fn parse_into(input: &str, nested: bool, out: &mut Vec<Fragment>) {
    let mut rest = input;

    while !rest.is_empty() {
        let line_break = rest.find(LINE_BREAK);
        let opening = find_opening(rest);

        if let Some(br) = line_break {
            if opening.is_none_or(|(at, _)| br < at) {
                push_text(out, &rest[..br]);
                out.push(Fragment::Break);
                rest = &rest[br + LINE_BREAK.len()..];
                continue;
            }
        }

        let Some((at, style)) = opening else {
            push_text(out, rest);
            return;
        };

        let content_start = at + 2;
        let Some(offset) = rest[content_start..].find(style.marker()) else {
            // Unmatched opener: everything left is literal.
            push_text(out, rest);
            return;
        };
        let close = content_start + offset;
        let after = &rest[close + 2..];

        push_text(out, &rest[..at]);

        let mut inner = Vec::new();
        parse_into(&rest[content_start..close], true, &mut inner);

        if nested {
            out.push(style.wrap(inner));
        } else {
            out.push(boundary());
            out.push(style.wrap(inner));
            if !after.starts_with(PUNCTUATION) {
                out.push(boundary());
            }
        }

        rest = after;
    }
}

/// Leftmost `~i`, `~b` or `~u`.
fn find_opening(text: &str) -> Option<(usize, Style)> {
    let bytes = text.as_bytes();
    bytes.windows(2).enumerate().find_map(|(idx, pair)| {
        if pair[0] == b'~' {
            Style::from_tag(pair[1]).map(|style| (idx, style))
        } else {
            None
        }
    })
}

fn push_text(out: &mut Vec<Fragment>, text: &str) {
    if !text.is_empty() {
        out.push(Fragment::Text(text.to_string()));
    }
}

fn boundary() -> Fragment {
    Fragment::Text(NBSP.to_string())
}

/// Remove every `~i`, `~b`, `~u` and `~n` marker without rendering.
pub fn strip(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '~' && matches!(chars.peek(), Some('i' | 'b' | 'u' | 'n')) {
            chars.next();
            continue;
        }
        stripped.push(ch);
    }

    stripped
}

/// Flatten fragments to plain text; breaks become newlines.
pub fn to_plain(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    push_plain(fragments, &mut out);
    out
}

fn push_plain(fragments: &[Fragment], out: &mut String) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Break => out.push('\n'),
            styled => push_plain(styled.children(), out),
        }
    }
}
