use super::ast::{Expression, Identifier, Program};
use crate::error::{Diagnostic, Error, Result};
use crate::lexer::{Lexer, Token, TokenKind};

/// Keyword that opens a function declaration: `(fn name [params] body...)`
pub const FUNCTION_KEYWORD: &str = "fn";

/// Recursive-descent parser over a pulled token stream
///
/// The parser never fails: problems are recorded as [`Diagnostic`]s and the
/// offending construct produces no expression, while its siblings keep parsing.
pub struct Parser {
    lexer: Lexer,
    errors: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a parser driving the given lexer
    pub fn new(lexer: Lexer) -> Self {
        Parser {
            lexer,
            errors: Vec::new(),
        }
    }

    /// Parses every top-level expression until end of input
    pub fn parse_program(&mut self) -> Program {
        let mut expressions = Vec::new();

        let mut token = self.lexer.next_token();
        while token.kind != TokenKind::Eof {
            if let Some(expression) = self.parse_expression(token) {
                expressions.push(expression);
            }
            token = self.lexer.next_token();
        }

        tracing::debug!(
            expressions = expressions.len(),
            diagnostics = self.errors.len(),
            "parsed program"
        );
        Program { expressions }
    }

    /// Diagnostics recorded so far, in detection order
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Diagnostics rendered as messages
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|d| d.to_string()).collect()
    }

    /// True when at least one diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the parser, returning its diagnostics
    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }

    /// Parse the expression starting at `token`
    fn parse_expression(&mut self, token: Token) -> Option<Expression> {
        match token.kind {
            TokenKind::Number => Some(Expression::Number {
                value: token.text.clone(),
                token,
            }),
            TokenKind::String => Some(Expression::String {
                value: token.text.clone(),
                token,
            }),
            TokenKind::Ident => Some(Expression::Identifier(Identifier::new(token))),
            TokenKind::LSquare => self.parse_array(token),
            TokenKind::LRound => self.parse_round_bracket(token),
            _ => {
                self.error(Diagnostic::NoParseExpression {
                    kind: token.kind,
                    line: token.line,
                    column: token.column,
                });
                None
            }
        }
    }

    /// Parse `[elem ...]`
    fn parse_array(&mut self, open: Token) -> Option<Expression> {
        let elements = self.parse_sequence(TokenKind::RSquare, "array")?;
        Some(Expression::Array {
            token: open,
            elements,
        })
    }

    /// Parse a round-bracket form; the head token decides what it is
    fn parse_round_bracket(&mut self, open: Token) -> Option<Expression> {
        let head = self.lexer.next_token();

        match head.kind {
            TokenKind::Ident if head.text == FUNCTION_KEYWORD => self.parse_function(open),
            TokenKind::Ident => self.parse_call(open, head),
            _ if head.is_operator() => self.parse_call(open, head),
            _ => {
                self.error(Diagnostic::InvalidFunctionName {
                    kind: head.kind,
                    line: head.line,
                    column: head.column,
                });
                self.skip_form(Self::open_depth(&head));
                None
            }
        }
    }

    /// Parse `(name arg ...)` once the name has been read
    fn parse_call(&mut self, open: Token, function: Token) -> Option<Expression> {
        let args = self.parse_sequence(TokenKind::RRound, "call")?;
        Some(Expression::Call {
            token: open,
            function,
            args,
        })
    }

    /// Parse `(fn name [params] body ...)` once `fn` has been read
    fn parse_function(&mut self, open: Token) -> Option<Expression> {
        let name = self.lexer.next_token();
        match name.kind {
            TokenKind::Eof => {
                self.eof_error("function declaration", &name);
                return None;
            }
            TokenKind::LRound
            | TokenKind::RRound
            | TokenKind::LSquare
            | TokenKind::RSquare
            | TokenKind::LCurly
            | TokenKind::RCurly => {
                self.error(Diagnostic::InvalidFunctionName {
                    kind: name.kind,
                    line: name.line,
                    column: name.column,
                });
                self.skip_form(Self::open_depth(&name));
                return None;
            }
            _ => {}
        }

        let params_token = self.lexer.next_token();
        let (line, column) = (params_token.line, params_token.column);
        match params_token.kind {
            TokenKind::Eof => {
                self.eof_error("function declaration", &params_token);
                return None;
            }
            TokenKind::RRound => {
                self.error(Diagnostic::ExpectedParameterList {
                    got: params_token.kind.to_string(),
                    line,
                    column,
                });
                return None;
            }
            _ => {}
        }

        let params = match self.parse_expression(params_token) {
            Some(Expression::Array { elements, .. }) => self.parameters(elements),
            // input ran out inside the parameter list, already reported
            None if self.last_error_is_eof() => return None,
            other => {
                let got = other
                    .map(|e| e.node_name().to_string())
                    .unwrap_or_else(|| "nothing".to_string());
                self.error(Diagnostic::ExpectedParameterList { got, line, column });
                self.skip_form(1);
                return None;
            }
        };

        let body = self.parse_sequence(TokenKind::RRound, "function body")?;

        Some(Expression::Function {
            token: open,
            name,
            params,
            body,
        })
    }

    /// Keep the identifiers of a parameter array, diagnosing everything else
    fn parameters(&mut self, elements: Vec<Expression>) -> Vec<Identifier> {
        let mut params = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Expression::Identifier(ident) => params.push(ident),
                other => {
                    let token = other.token();
                    let (line, column) = (token.line, token.column);
                    self.error(Diagnostic::ExpectedIdentifier {
                        got: other.to_string(),
                        line,
                        column,
                    });
                }
            }
        }
        params
    }

    /// Parse expressions until `close`.
    ///
    /// A failed element is diagnosed and dropped; end of input abandons the
    /// whole sequence.
    fn parse_sequence(
        &mut self,
        close: TokenKind,
        construct: &'static str,
    ) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        loop {
            let token = self.lexer.next_token();
            if token.kind == close {
                return Some(items);
            }
            if token.kind == TokenKind::Eof {
                self.eof_error(construct, &token);
                return None;
            }

            let first = token.clone();
            match self.parse_expression(token) {
                Some(expression) => items.push(expression),
                None => self.error(Diagnostic::ElementNotParsed { token: first }),
            }
        }
    }

    /// Round-bracket nesting still open after reading `token` inside a form
    fn open_depth(token: &Token) -> usize {
        match token.kind {
            TokenKind::RRound | TokenKind::Eof => 0,
            TokenKind::LRound => 2,
            _ => 1,
        }
    }

    /// Discard tokens until `depth` round brackets have been closed
    fn skip_form(&mut self, mut depth: usize) {
        while depth > 0 {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::LRound => depth += 1,
                TokenKind::RRound => depth -= 1,
                TokenKind::Eof => {
                    self.eof_error("round-bracket form", &token);
                    return;
                }
                _ => {}
            }
        }
    }

    fn last_error_is_eof(&self) -> bool {
        matches!(self.errors.last(), Some(Diagnostic::UnexpectedEof { .. }))
    }

    fn eof_error(&mut self, construct: &'static str, token: &Token) {
        self.error(Diagnostic::UnexpectedEof {
            construct,
            line: token.line,
            column: token.column,
        });
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "parse diagnostic");
        self.errors.push(diagnostic);
    }
}

/// Lex and parse `source`, returning the program and every diagnostic
pub fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Lex and parse `source`, failing if any diagnostic was recorded
pub fn parse_strict(source: &str) -> Result<Program> {
    let (program, diagnostics) = parse_source(source);
    if diagnostics.is_empty() {
        Ok(program)
    } else {
        Err(Error::Parse { diagnostics })
    }
}
