//! Greedy word-wrap for menu text.

use crate::model::BULLET;

/// Wrap every line of a text block, preserving the line structure.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap one logical line to a column width.
///
/// Words are packed greedily and measured in characters, not bytes. A
/// single word longer than the width is kept whole on its own line. An
/// empty input yields exactly one empty output line. Lines starting with
/// the bullet marker keep the marker on the first output line and indent
/// continuations by the marker's width; their column budget shrinks by
/// the same amount.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let (bulleted, content, budget) = match line.strip_prefix(BULLET) {
        Some(rest) => (true, rest, width.saturating_sub(BULLET.len())),
        None => (false, line, width),
    };

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in content.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= budget {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            wrapped.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if current_len > 0 {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    if bulleted {
        let indent = " ".repeat(BULLET.len());
        wrapped
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{BULLET}{line}")
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect()
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_packing() {
        assert_eq!(wrap_line("aa bb cc", 5), vec!["aa bb", "cc"]);
    }

    #[test]
    fn test_exact_fit() {
        assert_eq!(wrap_line("aa bb", 5), vec!["aa bb"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_line() {
        assert_eq!(wrap_line("", 80), vec![""]);
    }

    #[test]
    fn test_overlong_word_is_never_split() {
        assert_eq!(
            wrap_line("antidisestablishmentarianism now", 10),
            vec!["antidisestablishmentarianism", "now"]
        );
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        // 11 characters but more bytes; must still fit on one line.
        assert_eq!(wrap_line("h\u{e9}llo w\u{f6}rld", 11), vec!["héllo wörld"]);
    }

    #[test]
    fn test_bullet_fits_on_one_line() {
        assert_eq!(wrap_line("  * one two three", 84), vec!["  * one two three"]);
    }

    #[test]
    fn test_bullet_marker_and_indent() {
        assert_eq!(
            wrap_line("  * one two three", 9),
            vec!["  * one", "    two", "    three"]
        );
    }

    #[test]
    fn test_bullet_budget_shrinks_by_marker_width() {
        // Four columns go to the marker, so "aa bb" no longer fits at 7.
        assert_eq!(wrap_line("aa bb", 7), vec!["aa bb"]);
        assert_eq!(wrap_line("  * aa bb", 7), vec!["  * aa", "    bb"]);
    }

    #[test]
    fn test_wrap_text_preserves_line_structure() {
        assert_eq!(
            wrap_text("first line\n\nsecond line", 80),
            vec!["first line", "", "second line"]
        );
    }

    #[test]
    fn test_wrap_text_wraps_each_line() {
        assert_eq!(
            wrap_text("aa bb cc\ndd", 5),
            vec!["aa bb", "cc", "dd"]
        );
    }
}
