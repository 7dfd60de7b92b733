use super::token::{Token, TokenKind};

/// Characters skipped between tokens
const WHITESPACE: [char; 3] = [' ', '\t', '\n'];

/// Pull-based lexer for bsharp source
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the input is
/// exhausted every further call returns an `EOF` token.
pub struct Lexer {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Position of the next unread character
    current: usize,
    /// Line of `current` (1-indexed)
    line: usize,
    /// Column of `current` (1-indexed)
    column: usize,
}

impl Lexer {
    /// Creates a new lexer over the given source
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the next token, leaving the cursor just past its text
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.current;
        let (line, column) = (self.line, self.column);

        let Some(c) = self.advance() else {
            return Token::new(TokenKind::Eof, String::new(), line, column);
        };

        let (kind, text) = match c {
            c if c.is_ascii_digit() => {
                self.consume_while(|c| c.is_ascii_digit() || c == '.');
                (TokenKind::Number, self.lexeme(self.start, self.current))
            }
            c if c.is_alphabetic() => {
                self.consume_while(char::is_alphabetic);
                (TokenKind::Ident, self.lexeme(self.start, self.current))
            }
            '"' => (TokenKind::String, self.scan_string()),
            c => match TokenKind::symbol(c) {
                Some(kind) => (kind, c.to_string()),
                None => (TokenKind::Illegal, c.to_string()),
            },
        };

        tracing::trace!(%kind, %text, line, column, "scanned token");
        Token::new(kind, text, line, column)
    }

    /// Scans all remaining tokens, up to and including the first `EOF`
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// True once every character of the source has been consumed
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| WHITESPACE.contains(&c)) {
            self.advance();
        }
    }

    /// Raw characters up to the closing quote, which is consumed but not kept.
    /// A missing closing quote runs the string to end of input.
    fn scan_string(&mut self) -> String {
        let content_start = self.current;
        self.consume_while(|c| c != '"');
        let text = self.lexeme(content_start, self.current);
        self.advance();
        text
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    fn lexeme(&self, from: usize, to: usize) -> String {
        self.source[from..to].iter().collect()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }
}
