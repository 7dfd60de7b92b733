use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
///
/// Two tokens are equal when their kind and text match; the position is only
/// carried along for diagnostics.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Literal text the token was scanned from
    pub text: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Returns true for the arithmetic operators that may head a call
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}('{}')", self.kind, self.text)
    }
}

/// All token types in bsharp
///
/// Serialized and displayed with the uppercase spellings consuming tools expect
/// (`PLUS`, `LROUND`, `EOF`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,
    /// Colon (:)
    Colon,
    /// Quote (')
    Quote,

    // Delimiters
    /// Left parenthesis (
    LRound,
    /// Right parenthesis )
    RRound,
    /// Left brace {
    LCurly,
    /// Right brace }
    RCurly,
    /// Left bracket [
    LSquare,
    /// Right bracket ]
    RSquare,

    // Literals
    /// Run of digits and dots, unvalidated
    Number,
    /// Run of letters
    Ident,
    /// Raw text between quotes
    String,

    // Special
    /// End of input marker
    Eof,
    /// Character outside the language
    Illegal,
}

impl TokenKind {
    /// Arithmetic operators are callable names
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }

    /// Map a single-character symbol to its kind
    pub fn symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            ':' => TokenKind::Colon,
            '\'' => TokenKind::Quote,
            '(' => TokenKind::LRound,
            ')' => TokenKind::RRound,
            '{' => TokenKind::LCurly,
            '}' => TokenKind::RCurly,
            '[' => TokenKind::LSquare,
            ']' => TokenKind::RSquare,
            _ => return None,
        };
        Some(kind)
    }

    /// The exact external spelling of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Colon => "COLON",
            TokenKind::Quote => "QUOTE",
            TokenKind::LRound => "LROUND",
            TokenKind::RRound => "RROUND",
            TokenKind::LCurly => "LCURLY",
            TokenKind::RCurly => "RCURLY",
            TokenKind::LSquare => "LSQUARE",
            TokenKind::RSquare => "RSQUARE",
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        assert_eq!(TokenKind::symbol('+'), Some(TokenKind::Plus));
        assert_eq!(TokenKind::symbol('['), Some(TokenKind::LSquare));
        assert_eq!(TokenKind::symbol('\''), Some(TokenKind::Quote));
        assert_eq!(TokenKind::symbol('%'), None);
    }

    #[test]
    fn test_is_operator() {
        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::Slash.is_operator());
        assert!(!TokenKind::Colon.is_operator());
        assert!(!TokenKind::Ident.is_operator());
    }

    #[test]
    fn test_equality_ignores_position() {
        let a = Token::new(TokenKind::Ident, "foo", 1, 1);
        let b = Token::new(TokenKind::Ident, "foo", 3, 9);
        assert_eq!(a, b);
        assert_ne!(a, Token::new(TokenKind::Ident, "bar", 1, 1));
        assert_ne!(a, Token::new(TokenKind::String, "foo", 1, 1));
    }

    #[test]
    fn test_spellings_match_serde() {
        for kind in [TokenKind::LRound, TokenKind::RSquare, TokenKind::Eof] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
