/// Corpus preprocessing — rejoins hard-wrapped lines into paragraphs.
///
/// Project Gutenberg-style texts wrap at a fixed column, which would litter
/// the token stream with newline sentinels mid-sentence. This pass merges
/// wrapped lines back together so the only sentinels left are real
/// paragraph breaks.

/// Default wrap column assumed when none is given.
pub const DEFAULT_WIDTH: usize = 80;

/// Characters a full line of prose plausibly ends a paragraph with.
const PARAGRAPH_ENDERS: &[char] = &['.', ':', '!', '\'', '"', '\u{201d}'];

/// Decide whether `line` was wrapped onto `next_line` by the typesetter.
///
/// A line is wrapped when its first following word would not have fit
/// within `width`. Lines close to the limit that do not end in punctuation
/// are assumed wrapped too, since some sources wrap on rendered width
/// rather than character count. Shorter lines are breaks on purpose.
fn is_wrapped_line(line: &str, next_line: &str, width: usize) -> bool {
    let next_word = match next_line.split_whitespace().next() {
        Some(word) => word,
        // Blank next line: end of paragraph.
        None => return false,
    };

    let joined = line.chars().count() + 1 + next_word.chars().count();
    if joined > width {
        return true;
    }

    if joined as f64 > width as f64 * 0.66 {
        let last = line.trim_end().chars().last();
        return !matches!(last, Some(c) if PARAGRAPH_ENDERS.contains(&c));
    }

    false
}

/// Merge wrapped lines in `text`, keeping intentional line breaks.
pub fn unwrap_paragraphs(text: &str, width: usize) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.len() < 2 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for pair in lines.windows(2) {
        let (line, next_line) = (pair[0], pair[1]);
        if is_wrapped_line(line, next_line, width) {
            out.push_str(line.strip_suffix('\n').unwrap_or(line));
            out.push(' ');
        } else {
            out.push_str(line);
        }
    }
    out.push_str(lines[lines.len() - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_lines_wrapped_at_the_column() {
        let text = "It was a dark and stormy night and the rain fell in torrents except at\noccasional intervals when it was checked by a violent gust of wind.\n";
        let result = unwrap_paragraphs(text, DEFAULT_WIDTH);
        assert!(result.contains("at occasional"));
        assert_eq!(result.matches('\n').count(), 1);
    }

    #[test]
    fn keeps_paragraph_breaks() {
        let text = "First paragraph ends here.\n\nSecond paragraph starts here.\n";
        let result = unwrap_paragraphs(text, DEFAULT_WIDTH);
        assert_eq!(result, text);
    }

    #[test]
    fn keeps_deliberately_short_lines() {
        let text = "CHAPTER ONE\n\nThe story begins.\n";
        let result = unwrap_paragraphs(text, DEFAULT_WIDTH);
        assert_eq!(result, text);
    }

    #[test]
    fn near_width_line_without_punctuation_is_wrapped() {
        // 60 wide: the first line lands inside the wiggle-room band and
        // ends mid-sentence.
        let text = "the quick brown fox jumped over the sleeping dog and\nthen it ran away.\n";
        let result = unwrap_paragraphs(text, 60);
        assert!(result.contains("and then"));
    }

    #[test]
    fn near_width_line_with_punctuation_stays() {
        let text = "the quick brown fox jumped over the sleeping dog.\nA new paragraph.\n";
        let result = unwrap_paragraphs(text, 60);
        assert_eq!(result, text);
    }

    #[test]
    fn single_line_is_untouched() {
        assert_eq!(unwrap_paragraphs("just one line\n", 80), "just one line\n");
        assert_eq!(unwrap_paragraphs("", 80), "");
    }
}
