// Whitespace tokenizer for input sources
//
// The scanner streams bytes from any reader and splits them on ASCII
// whitespace, tracking the 1-based line and column of each token's first
// byte. Columns count bytes, delimiters included; a newline starts a new
// line at column 1.

mod clean;

pub use clean::{LEADING_PUNCTUATION, clean};

use std::io::{self, BufRead, BufReader, Read};

use spell_core::MAX_WORD_BYTES;
use spell_core::character::is_space;
use spell_core::token::{Location, Token};

/// Streaming iterator over the whitespace-delimited tokens of a reader.
///
/// Tokens longer than [`MAX_WORD_BYTES`] are truncated; the dropped bytes
/// still advance the column. A read error is yielded once and ends the
/// iteration.
pub struct Scanner<R> {
    reader: BufReader<R>,
    cursor: Location,
    done: bool,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner positioned at line 1, column 1.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            cursor: Location::default(),
            done: false,
        }
    }

    /// The position of the next unread byte.
    pub fn position(&self) -> Location {
        self.cursor
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut text: Vec<u8> = Vec::new();
        let mut start: Option<Location> = None;

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            if buf.is_empty() {
                self.done = true;
                return start.map(|location| Ok(Token::new(text, location)));
            }

            let mut consumed = 0;
            let mut finished = false;
            for &b in buf {
                consumed += 1;
                if is_space(b) {
                    if b == b'\n' {
                        self.cursor.line += 1;
                        self.cursor.column = 1;
                    } else {
                        self.cursor.column += 1;
                    }
                    if start.is_some() {
                        finished = true;
                        break;
                    }
                } else {
                    if start.is_none() {
                        start = Some(self.cursor);
                    }
                    if text.len() < MAX_WORD_BYTES {
                        text.push(b);
                    }
                    self.cursor.column += 1;
                }
            }
            self.reader.consume(consumed);

            if finished {
                return start.map(|location| Ok(Token::new(text, location)));
            }
        }
    }
}

/// Collect all tokens of an in-memory text.
pub fn tokens(text: &[u8]) -> Vec<Token> {
    // Reading from a slice cannot fail.
    Scanner::new(text).filter_map(Result::ok).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(String, usize, usize)> {
        tokens(text.as_bytes())
            .into_iter()
            .map(|t| {
                (
                    String::from_utf8_lossy(&t.text).into_owned(),
                    t.line(),
                    t.column(),
                )
            })
            .collect()
    }

    fn span(word: &str, line: usize, column: usize) -> (String, usize, usize) {
        (word.to_string(), line, column)
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokens(b"").is_empty());
        assert!(tokens(b" \t\r\n ").is_empty());
    }

    #[test]
    fn single_line_columns() {
        assert_eq!(
            spans("I visited paris"),
            vec![span("I", 1, 1), span("visited", 1, 3), span("paris", 1, 11)]
        );
    }

    #[test]
    fn newline_resets_column() {
        assert_eq!(
            spans("one two\nthree\n  four"),
            vec![
                span("one", 1, 1),
                span("two", 1, 5),
                span("three", 2, 1),
                span("four", 3, 3),
            ]
        );
    }

    #[test]
    fn delimiters_count_as_columns() {
        // Tabs and carriage returns advance the column by one byte each.
        assert_eq!(
            spans("\tword\r\nnext"),
            vec![span("word", 1, 2), span("next", 2, 1)]
        );
    }

    #[test]
    fn vertical_tab_and_form_feed_delimit() {
        assert_eq!(
            spans("a\x0Bb\x0Cc"),
            vec![span("a", 1, 1), span("b", 1, 3), span("c", 1, 5)]
        );
    }

    #[test]
    fn consecutive_blank_lines() {
        assert_eq!(spans("a\n\n\nb"), vec![span("a", 1, 1), span("b", 4, 1)]);
    }

    #[test]
    fn punctuation_stays_in_token() {
        assert_eq!(
            spans("(hello), world."),
            vec![span("(hello),", 1, 1), span("world.", 1, 10)]
        );
    }

    #[test]
    fn token_at_end_without_newline() {
        assert_eq!(spans("last"), vec![span("last", 1, 1)]);
    }

    #[test]
    fn long_tokens_are_truncated() {
        let mut text = vec![b'x'; MAX_WORD_BYTES + 10];
        text.extend_from_slice(b" y");
        let toks = tokens(&text);
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0].text.len(), MAX_WORD_BYTES);
        // The dropped bytes still advance the column.
        assert_eq!(toks[1].column(), MAX_WORD_BYTES + 12);
    }

    #[test]
    fn tokens_span_buffer_boundaries() {
        // Larger than the default BufReader capacity.
        let word = "abcdefg ";
        let text = word.repeat(2000);
        let toks = tokens(text.as_bytes());
        assert_eq!(toks.len(), 2000);
        assert!(toks.iter().all(|t| t.text == b"abcdefg"));
        assert_eq!(toks[1999].column(), 1999 * 8 + 1);
    }

    #[test]
    fn position_tracks_cursor() {
        let mut scanner = Scanner::new(&b"ab\ncd "[..]);
        let first = scanner.next().unwrap().unwrap();
        assert_eq!(first.location, Location::new(1, 1));
        assert_eq!(scanner.position(), Location::new(2, 1));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn read_error_is_yielded_once() {
        let mut scanner = Scanner::new(FailingReader);
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }
}
