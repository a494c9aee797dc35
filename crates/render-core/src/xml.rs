//! Minimal XML text escaping shared by markup backends.

use std::borrow::Cow;

/// Escape the five XML-special characters, borrowing the input when
/// nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    let first = match text
        .bytes()
        .position(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''))
    {
        Some(index) => index,
        None => return Cow::Borrowed(text),
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<div>"), "&lt;div&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn prefix_before_first_special_character_is_kept() {
        assert_eq!(escape("head<tail"), "head&lt;tail");
    }

    #[test]
    fn multibyte_text_passes_through() {
        assert!(matches!(escape("héllo … 日本語"), Cow::Borrowed(_)));
        assert_eq!(escape("héllo & 日本語"), "héllo &amp; 日本語");
    }
}
