use unicode_width::UnicodeWidthChar;

/// Truncates `s` to at most `max_width` display columns, appending
/// "..." when anything was cut. Width-aware so wide characters in
/// prompts or image paths do not overflow their panel.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_no_truncation() {
        assert_eq!(truncate_to_width("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_to_width(s, 20);
        assert_eq!(result, "This is a very lo...");
    }

    #[test]
    fn test_truncate_exact_width() {
        assert_eq!(truncate_to_width("Exactly twenty!!", 20), "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_to_width("", 20), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK glyph is two columns wide.
        let result = truncate_to_width("データブリックス認定試験", 10);
        assert!(result.ends_with("..."));
        let width: usize = result
            .chars()
            .map(|c| c.width().unwrap_or(1))
            .sum();
        assert!(width <= 10);
    }
}
