use crate::ir::Position;
use std::iter::Peekable;
use std::str::Chars;

/// Single-character-lookahead reader over template text.
///
/// The cursor starts before the first character; call [`CharCursor::advance`]
/// once to load it. Once `advance` returns `None` the stream is exhausted and
/// `current` stays `None`.
pub struct CharCursor<'a> {
    chars: Peekable<Chars<'a>>,
    current: Option<char>,
    position: Position,
}

impl<'a> CharCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            current: None,
            position: Position { line: 1, column: 0 },
        }
    }

    pub fn advance(&mut self) -> Option<char> {
        if self.current == Some('\n') {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        self.current = self.chars.next();
        self.current
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Position of the current character
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_whitespace(&self) -> bool {
        self.current.is_some_and(char::is_whitespace)
    }

    pub fn is_letter(&self) -> bool {
        self.current.is_some_and(char::is_alphabetic)
    }

    /// `<#`
    pub fn at_block_start(&mut self) -> bool {
        self.current == Some('<') && self.peek() == Some('#')
    }

    /// `#>`
    pub fn at_block_end(&mut self) -> bool {
        self.current == Some('#') && self.peek() == Some('>')
    }

    pub fn skip_whitespace(&mut self) {
        while self.is_whitespace() {
            self.advance();
        }
    }

    /// Read a run of letters starting at the current character
    pub fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();
        while self.is_letter() {
            identifier.extend(self.current);
            self.advance();
        }
        identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_until_exhausted() {
        let mut cursor = CharCursor::new("ab");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn tracks_lines_and_columns() {
        let mut cursor = CharCursor::new("a\nbc");
        cursor.advance();
        assert_eq!(cursor.position(), Position { line: 1, column: 1 });
        cursor.advance();
        assert_eq!(cursor.position(), Position { line: 1, column: 2 });
        cursor.advance();
        assert_eq!(cursor.position(), Position { line: 2, column: 1 });
        cursor.advance();
        assert_eq!(cursor.position(), Position { line: 2, column: 2 });
    }

    #[test]
    fn markers() {
        let mut cursor = CharCursor::new("<#x#>");
        cursor.advance();
        assert!(cursor.at_block_start());
        assert!(!cursor.at_block_end());
        cursor.advance();
        assert!(!cursor.at_block_start());
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_block_end());
    }

    #[test]
    fn identifier_stops_at_non_letter() {
        let mut cursor = CharCursor::new("output extension");
        cursor.advance();
        assert!(cursor.is_letter());
        assert_eq!(cursor.read_identifier(), "output");
        assert!(cursor.is_whitespace());
        cursor.skip_whitespace();
        assert_eq!(cursor.read_identifier(), "extension");
        assert_eq!(cursor.current(), None);
    }
}
