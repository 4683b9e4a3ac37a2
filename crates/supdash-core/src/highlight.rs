//! Term highlighting for search result display strings.
//!
//! Terms are matched case-insensitively against the display string itself
//! (label, title, info), never the internal search text. At each position the
//! first term that matches wins and scanning resumes after it; matches from
//! different terms are not merged.

use serde::Serialize;

/// A run of display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum Span {
    Plain(String),
    Match(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Match(text) => text,
        }
    }

    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Split `text` into plain and matched spans.
///
/// `terms` are expected lowercase (see [`crate::search::terms`]); empty
/// terms are ignored. Concatenating the span texts gives back `text`.
pub fn highlight(text: &str, terms: &[String]) -> Vec<Span> {
    let terms: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|term| !term.is_empty())
        .collect();

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = terms.iter().find_map(|term| match_len(rest, term));

        if let Some(len) = hit {
            if plain_start < pos {
                spans.push(Span::Plain(text[plain_start..pos].to_string()));
            }
            spans.push(Span::Match(rest[..len].to_string()));
            pos += len;
            plain_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        spans.push(Span::Plain(text[plain_start..].to_string()));
    }

    spans
}

/// Byte length of the prefix of `text` that equals `term` ignoring case.
fn match_len(text: &str, term: &str) -> Option<usize> {
    let mut wanted = term.chars().peekable();
    let mut consumed = 0;

    for ch in text.chars() {
        for lower in ch.to_lowercase() {
            if wanted.next() != Some(lower) {
                return None;
            }
        }
        consumed += ch.len_utf8();
        if wanted.peek().is_none() {
            return Some(consumed);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::terms;

    fn plain(text: &str) -> Span {
        Span::Plain(text.to_string())
    }

    fn hit(text: &str) -> Span {
        Span::Match(text.to_string())
    }

    #[test]
    fn test_case_insensitive_match_keeps_original_case() {
        assert_eq!(
            highlight("Teams > Tier 1", &terms("tier")),
            vec![plain("Teams > "), hit("Tier"), plain(" 1")]
        );
    }

    #[test]
    fn test_every_occurrence_is_marked() {
        assert_eq!(
            highlight("Tier 1 and tier 2", &terms("TIER")),
            vec![hit("Tier"), plain(" 1 and "), hit("tier"), plain(" 2")]
        );
    }

    #[test]
    fn test_terms_matched_independently() {
        assert_eq!(
            highlight("Tier 1 agents", &terms("1 agent")),
            vec![plain("Tier "), hit("1"), plain(" "), hit("agent"), plain("s")]
        );
    }

    #[test]
    fn test_first_term_wins_at_a_position() {
        // Both terms start at 0; the earlier term claims the text.
        assert_eq!(
            highlight("operations", &terms("op operations")),
            vec![hit("op"), plain("erations")]
        );
        assert_eq!(
            highlight("operations", &terms("operations op")),
            vec![hit("operations")]
        );
    }

    #[test]
    fn test_no_terms_or_no_match() {
        assert_eq!(highlight("Walker", &[]), vec![plain("Walker")]);
        assert_eq!(highlight("Walker", &terms("xyz")), vec![plain("Walker")]);
        assert!(highlight("", &terms("a")).is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let spans = highlight("Équipe été", &terms("été"));
        assert_eq!(spans, vec![plain("Équipe "), hit("été")]);

        let spans = highlight("ÉTÉ", &terms("été"));
        assert_eq!(spans, vec![hit("ÉTÉ")]);
    }

    #[test]
    fn test_spans_reassemble_input() {
        let text = "Teams > Tier 2 > Full-Time Agents";
        let spans = highlight(text, &terms("t a"));
        let joined: String = spans.iter().map(Span::text).collect();
        assert_eq!(joined, text);
        assert!(spans.iter().any(Span::is_match));
    }
}
