//! Logos-based lexer and bracket handling for release titles.
//!
//! Release titles separate fields with runs of dots or spaces; everything
//! else (hyphens, `@`, digits) stays inside a token because it carries
//! meaning for the group, size, and resolution matchers. Bracket handling
//! runs on the raw string before tokenizing.

use logos::Logos;

/// Token pattern for release titles.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[. ]+")]
enum RawToken<'src> {
    /// Any run of characters that is not a dot or space separator.
    #[regex(r"[^. ]+")]
    Fragment(&'src str),
}

/// Split a title into its ordered field tokens.
///
/// Empty tokens are discarded; left-to-right order is preserved.
pub fn tokenize(input: &str) -> Vec<&str> {
    RawToken::lexer(input)
        .filter_map(|token| match token {
            Ok(RawToken::Fragment(text)) => Some(text),
            Err(()) => None,
        })
        .collect()
}

/// Drop a leading bracketed alternate title.
///
/// Some sites prefix releases with a localized title in square brackets;
/// everything through the matching `]` is removed. Without a matching
/// bracket the (trimmed) input is returned unchanged.
pub fn strip_leading_bracket(s: &str) -> &str {
    let s = s.trim();
    if let Some(rest) = s.strip_prefix('[') {
        if let Some(close) = rest.find(']') {
            return &rest[close + 1..];
        }
    }
    s
}

/// Split off a trailing bracketed size annotation.
///
/// Returns the remainder and the bracket contents, or the (trimmed) input
/// and an empty string when no annotation is present. Only the last
/// `[...]` pair is considered; nested brackets are not handled, and a
/// bracket opening at position 0 is the whole title, not an annotation.
pub fn split_trailing_bracket(s: &str) -> (&str, &str) {
    let s = s.trim();
    if s.ends_with(']') {
        if let Some(open) = s.rfind('[') {
            if open > 0 {
                return (&s[..open], &s[open + 1..s.len() - 1]);
            }
        }
    }
    (s, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_dots_and_spaces() {
        assert_eq!(
            tokenize("Man.in.Black.1997.UHDTV.4K.HEVC-HDCTV"),
            vec!["Man", "in", "Black", "1997", "UHDTV", "4K", "HEVC-HDCTV"]
        );
        assert_eq!(
            tokenize("Made in Hong Kong 1997 720p"),
            vec!["Made", "in", "Hong", "Kong", "1997", "720p"]
        );
    }

    #[test]
    fn tokenize_discards_empty_tokens() {
        assert_eq!(tokenize("a..b  c. d"), vec!["a", "b", "c", "d"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" .. . ").is_empty());
    }

    #[test]
    fn tokenize_preserves_inner_punctuation() {
        assert_eq!(
            tokenize("DTS-HD.MA.5.1-Huan@HDSky.iso"),
            vec!["DTS-HD", "MA", "5", "1-Huan@HDSky", "iso"]
        );
    }

    #[test]
    fn strip_leading_bracket_drops_alternate_title() {
        assert_eq!(strip_leading_bracket("[影] Shadow 2018"), " Shadow 2018");
        assert_eq!(strip_leading_bracket("  [abc]rest"), "rest");
        assert_eq!(strip_leading_bracket("[]rest"), "rest");
    }

    #[test]
    fn strip_leading_bracket_leaves_other_titles_alone() {
        assert_eq!(strip_leading_bracket("Shadow 2018"), "Shadow 2018");
        assert_eq!(strip_leading_bracket("[no close"), "[no close");
        assert_eq!(strip_leading_bracket(""), "");
    }

    #[test]
    fn split_trailing_bracket_extracts_size() {
        assert_eq!(
            split_trailing_bracket("Arizona 2018[2.94 GB]"),
            ("Arizona 2018", "2.94 GB")
        );
        // Only the last pair counts.
        assert_eq!(split_trailing_bracket("a[b]c[d]"), ("a[b]c", "d"));
    }

    #[test]
    fn split_trailing_bracket_ignores_whole_bracket_titles() {
        assert_eq!(split_trailing_bracket("[7.33 GB]"), ("[7.33 GB]", ""));
    }

    #[test]
    fn split_trailing_bracket_without_annotation() {
        assert_eq!(split_trailing_bracket("Metro.2013"), ("Metro.2013", ""));
        assert_eq!(split_trailing_bracket("a[b"), ("a[b", ""));
        assert_eq!(split_trailing_bracket(""), ("", ""));
    }
}
