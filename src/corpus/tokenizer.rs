/// Story tokenizer — turns raw story text into the token stream models are
/// trained on, and reassembles token streams back into readable text.
///
/// Three token kinds: words (alphanumerics plus apostrophes), punctuation
/// runs, and the newline sentinel. Anything else is dropped. A run of
/// whitespace containing a newline collapses to a single sentinel token.

use crate::core::markov::{Token, NEWLINE_TOKEN};

/// Characters that form punctuation tokens. Consecutive punctuation is kept
/// together as one token ("?!", "...").
pub const PUNCTUATION: &[char] = &[',', '.', '-', '!', '?', ':', '&'];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}

fn is_punctuation_char(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// True for tokens that attach to the previous word when rendering.
pub fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_punctuation_char)
}

/// Tokenize a story. The stream always begins with the newline sentinel, so
/// a model trained on it is enterable from the initial `["\n"]` state.
pub fn tokenize_story(story: &str) -> Vec<Token> {
    let mut tokens = vec![NEWLINE_TOKEN.to_string()];
    let mut chars = story.chars().peekable();

    while let Some(&c) = chars.peek() {
        if is_word_char(c) {
            let mut word = String::new();
            while let Some(&c) = chars.peek() {
                if !is_word_char(c) {
                    break;
                }
                word.push(c);
                chars.next();
            }
            tokens.push(word);
        } else if is_punctuation_char(c) {
            let mut punct = String::new();
            while let Some(&c) = chars.peek() {
                if !is_punctuation_char(c) {
                    break;
                }
                punct.push(c);
                chars.next();
            }
            tokens.push(punct);
        } else if c == '\n' {
            // Swallow the whole whitespace run, blank lines included.
            chars.next();
            while let Some(&c) = chars.peek() {
                if !c.is_whitespace() {
                    break;
                }
                chars.next();
            }
            tokens.push(NEWLINE_TOKEN.to_string());
        } else {
            chars.next();
        }
    }

    tokens
}

/// Reassemble tokens into readable text: a space before each word, nothing
/// before punctuation, the sentinel as a line break.
pub fn reassemble_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token == NEWLINE_TOKEN {
            out.push('\n');
            continue;
        }
        if !is_punctuation_token(token) && !out.is_empty() && !out.ends_with('\n') {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leads_with_the_sentinel() {
        assert_eq!(tokenize_story(""), vec!["\n"]);
        assert_eq!(tokenize_story("hello"), vec!["\n", "hello"]);
    }

    #[test]
    fn splits_words_and_punctuation() {
        let tokens = tokenize_story("Once upon a time.");
        assert_eq!(tokens, vec!["\n", "Once", "upon", "a", "time", "."]);
    }

    #[test]
    fn keeps_apostrophes_inside_words() {
        assert_eq!(tokenize_story("don't stop"), vec!["\n", "don't", "stop"]);
        assert_eq!(tokenize_story("don\u{2019}t"), vec!["\n", "don\u{2019}t"]);
    }

    #[test]
    fn punctuation_runs_stay_together() {
        let tokens = tokenize_story("Wait... what?!");
        assert_eq!(tokens, vec!["\n", "Wait", "...", "what", "?!"]);
    }

    #[test]
    fn newline_collapses_surrounding_whitespace() {
        let tokens = tokenize_story("one\n\n   two\nthree");
        assert_eq!(tokens, vec!["\n", "one", "\n", "two", "\n", "three"]);
    }

    #[test]
    fn drops_characters_it_does_not_know() {
        let tokens = tokenize_story("(hello \"world\")");
        assert_eq!(tokens, vec!["\n", "hello", "world"]);
    }

    #[test]
    fn reassemble_attaches_punctuation() {
        let tokens: Vec<Token> = ["Hello", ",", "world", "..."]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(reassemble_tokens(&tokens), "Hello, world...");
    }

    #[test]
    fn reassemble_renders_sentinel_as_break() {
        let tokens: Vec<Token> = ["\n", "One", ".", "\n", "Two"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(reassemble_tokens(&tokens), "\nOne.\nTwo");
    }

    #[test]
    fn round_trip_reads_naturally() {
        let tokens = tokenize_story("It was dark, and the dog didn't bark.");
        assert_eq!(
            reassemble_tokens(&tokens[1..]),
            "It was dark, and the dog didn't bark."
        );
    }
}
