//! Minimal Java tokenizer for the recovery passes.
//!
//! Tree-sitter exposes no token stream for text that fails to parse, so the
//! recovery passes tokenize on their own. Only what they need is recognized:
//! words, single-byte punctuation, and the spans of literals and comments
//! (whose contents must never be mistaken for code).

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Identifier, keyword or number.
    Word(Range<usize>),
    /// Any other non-whitespace byte.
    Punct(usize, u8),
    /// String, text block or character literal, delimiters included.
    Literal(Range<usize>),
    /// Line or block comment.
    Comment(Range<usize>),
}

impl Token {
    pub(crate) fn start(&self) -> usize {
        match self {
            Token::Word(r) | Token::Literal(r) | Token::Comment(r) => r.start,
            Token::Punct(pos, _) => *pos,
        }
    }

    pub(crate) fn is_trivia(&self) -> bool {
        matches!(self, Token::Comment(_))
    }
}

pub(crate) struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            src: source.as_bytes(),
            pos: 0,
        }
    }

    fn starts_with(&self, at: usize, pat: &[u8]) -> bool {
        self.src.get(at..at + pat.len()) == Some(pat)
    }

    /// End of a quoted literal opened at `start` with `quote`. Unterminated
    /// literals end at the line break, like the compiler reports them.
    fn quoted_end(&self, start: usize, quote: u8) -> usize {
        let mut i = start + 1;
        while i < self.src.len() {
            match self.src[i] {
                b'\\' => i += 2,
                b'\n' => return i,
                b if b == quote => return i + 1,
                _ => i += 1,
            }
        }
        self.src.len()
    }

    fn text_block_end(&self, start: usize) -> usize {
        let mut i = start + 3;
        while i < self.src.len() {
            if self.src[i] == b'\\' {
                i += 2;
            } else if self.starts_with(i, b"\"\"\"") {
                return i + 3;
            } else {
                i += 1;
            }
        }
        self.src.len()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.src.len() && self.src[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.src.len() {
            return None;
        }
        let start = self.pos;
        let b = self.src[start];
        let token = if self.starts_with(start, b"//") {
            let end = self.src[start..]
                .iter()
                .position(|&c| c == b'\n')
                .map_or(self.src.len(), |n| start + n);
            Token::Comment(start..end)
        } else if self.starts_with(start, b"/*") {
            let end = self.src[start + 2..]
                .windows(2)
                .position(|w| w == b"*/")
                .map_or(self.src.len(), |n| start + 2 + n + 2);
            Token::Comment(start..end)
        } else if self.starts_with(start, b"\"\"\"") {
            Token::Literal(start..self.text_block_end(start))
        } else if b == b'"' || b == b'\'' {
            Token::Literal(start..self.quoted_end(start, b))
        } else if is_word_byte(b) {
            let len = self.src[start..]
                .iter()
                .position(|&c| !is_word_byte(c))
                .unwrap_or(self.src.len() - start);
            Token::Word(start..start + len)
        } else {
            Token::Punct(start, b)
        };
        self.pos = match &token {
            Token::Word(r) | Token::Literal(r) | Token::Comment(r) => r.end.min(self.src.len()),
            Token::Punct(pos, _) => pos + 1,
        };
        Some(token)
    }
}

/// Byte ranges covered by literals and comments, in order.
pub(crate) fn opaque_spans(source: &str) -> Vec<Range<usize>> {
    Lexer::new(source)
        .filter_map(|token| match token {
            Token::Literal(r) | Token::Comment(r) => Some(r),
            _ => None,
        })
        .collect()
}

/// True when `pos` falls inside one of the sorted `spans`.
pub(crate) fn in_spans(spans: &[Range<usize>], pos: usize) -> bool {
    let idx = spans.partition_point(|r| r.end <= pos);
    spans.get(idx).is_some_and(|r| r.contains(&pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(source: &str) -> Vec<&str> {
        Lexer::new(source)
            .filter_map(|t| match t {
                Token::Word(r) => Some(&source[r]),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_skips_literals_and_comments() {
        let src = r#"a "enum { }" b '{' c // enum x
        d /* interface { */ e """
        record R() {
        """ f"#;
        assert_eq!(words(src), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_escaped_quotes_stay_inside_literal() {
        let src = r#"x = "a\"b{"; y"#;
        assert_eq!(words(src), vec!["x", "y"]);
        let puncts: Vec<u8> = Lexer::new(src)
            .filter_map(|t| match t {
                Token::Punct(_, b) => Some(b),
                _ => None,
            })
            .collect();
        assert_eq!(puncts, vec![b'=', b';']);
    }

    #[test]
    fn test_span_lookup() {
        let src = "a \"xy\" b /* c */ d";
        let spans = opaque_spans(src);
        assert_eq!(spans.len(), 2);
        assert!(in_spans(&spans, 3));
        assert!(!in_spans(&spans, 0));
        assert!(in_spans(&spans, 11));
        assert!(!in_spans(&spans, src.len() - 1));
    }
}
