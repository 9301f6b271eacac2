//! Whitespace normalization
//!
//! Collapses the layout characters that plain-text documents carry (hard
//! wraps, tabs, form feeds) into single spaces so that sentence segmentation
//! sees one continuous line of text.

/// Normalize layout whitespace in raw document text.
///
/// Form feed, tab, and newline each become a single space; carriage returns
/// are removed entirely. Every other character passes through untouched, so
/// the result is the same length or shorter and all sentence content stays
/// verbatim.
pub fn clean_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{000C}' | '\t' | '\n' => out.push(' '),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_layout_whitespace_with_spaces() {
        assert_eq!(clean_whitespace("a\tb\nc\u{000C}d"), "a b c d");
    }

    #[test]
    fn test_strips_carriage_returns() {
        assert_eq!(clean_whitespace("line one.\r\nline two."), "line one. line two.");
    }

    #[test]
    fn test_leaves_other_characters_alone() {
        let text = "Prices rose 3.14%!  (Really.)";
        assert_eq!(clean_whitespace(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_whitespace(""), "");
    }
}
