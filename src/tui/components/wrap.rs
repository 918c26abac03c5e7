//! Word-aware wrapping for brochure copy.

/// Wrap `text` to `width` columns, breaking words longer than a line.
/// Explicit newlines start a new line; blank lines are kept.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for logical in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in logical.split_whitespace() {
            let word_len = word.chars().count();
            let needed = current_len + usize::from(current_len != 0) + word_len;

            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            // Hard-break words that cannot fit on any line
            for ch in word.chars() {
                if current_len == width {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(ch);
                current_len += 1;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn words_move_to_the_next_line() {
        assert_eq!(wrap("hello world", 7), vec!["hello", "world"]);
        assert_eq!(wrap("a b c", 3), vec!["a b", "c"]);
    }

    #[test]
    fn long_words_are_broken() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("ab abcdef", 4), vec!["ab", "abcd", "ef"]);
    }

    #[test]
    fn newlines_are_kept() {
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn zero_width() {
        assert_eq!(wrap("anything", 0), vec![String::new()]);
    }
}
