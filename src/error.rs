//! Error and diagnostic types for the bsharp front end

use crate::lexer::{Token, TokenKind};
use thiserror::Error;

/// A problem detected while parsing.
///
/// Diagnostics are collected by the parser rather than returned as errors, so one
/// malformed form never hides the problems that follow it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Input ended inside a bracketed construct
    ///
    /// **Triggered by:** An unterminated list, call or function body
    /// **Example:** `(+ 1 2` or `[1 2`
    #[error("Reached end of input while parsing {construct} at line {line}, column {column}")]
    UnexpectedEof {
        /// Construct being parsed when input ran out
        construct: &'static str,
        /// Line of the EOF token
        line: usize,
        /// Column of the EOF token
        column: usize,
    },

    /// Disallowed token in the head position of a round-bracket form
    ///
    /// **Example:** `(1 2)`, `("hello")`, `()`
    #[error("Function name cannot be {kind} at line {line}, column {column}")]
    InvalidFunctionName {
        /// Kind of the offending head token
        kind: TokenKind,
        /// Line of the head token
        line: usize,
        /// Column of the head token
        column: usize,
    },

    /// Token that does not start any expression
    ///
    /// **Example:** `)`, `{`, `:` at the top level or as an argument
    #[error("No parse expression for token {kind} at line {line}, column {column}")]
    NoParseExpression {
        /// Kind of the offending token
        kind: TokenKind,
        /// Line of the token
        line: usize,
        /// Column of the token
        column: usize,
    },

    /// An element of an array, call or function body failed to parse
    #[error("Element at token {token} was not parsed")]
    ElementNotParsed {
        /// First token of the element
        token: Token,
    },

    /// Non-identifier in a parameter list
    ///
    /// **Example:** `(fn foo [x 1] x)`
    #[error("Expected identifier, got {got} at line {line}, column {column}")]
    ExpectedIdentifier {
        /// Rendering of the offending expression
        got: String,
        /// Line of the expression
        line: usize,
        /// Column of the expression
        column: usize,
    },

    /// Function declaration without an array of parameters
    ///
    /// **Example:** `(fn foo x 10)`
    #[error("Expected parameter list, got {got} at line {line}, column {column}")]
    ExpectedParameterList {
        /// What was found instead
        got: String,
        /// Line where the parameter list was expected
        line: usize,
        /// Column where the parameter list was expected
        column: usize,
    },
}

/// Diagnostic severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The enclosing construct was abandoned
    Fatal,
    /// Parsing of sibling expressions carried on
    Recoverable,
}

impl Diagnostic {
    /// Classify diagnostic severity
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnexpectedEof { .. } => Severity::Fatal,
            Diagnostic::InvalidFunctionName { .. } => Severity::Fatal,
            Diagnostic::ExpectedParameterList { .. } => Severity::Fatal,

            Diagnostic::NoParseExpression { .. } => Severity::Recoverable,
            Diagnostic::ElementNotParsed { .. } => Severity::Recoverable,
            Diagnostic::ExpectedIdentifier { .. } => Severity::Recoverable,
        }
    }
}

/// Errors returned by the crate's fallible helpers
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Strict parsing found problems
    #[error("Parse failed with {} diagnostic(s): {}", .diagnostics.len(), join_messages(.diagnostics))]
    Parse {
        /// Every diagnostic recorded, in order
        diagnostics: Vec<Diagnostic>,
    },

    /// Numeric conversion of a literal failed
    ///
    /// **Triggered by:** Multi-dot runs such as `1.2.3`, or a non-number node
    #[error("Cannot evaluate {text} as a number")]
    InvalidNumber {
        /// Literal text that failed to convert
        text: String,
    },

    /// Rendering a tree as JSON failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn join_messages(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for bsharp operations
pub type Result<T> = std::result::Result<T, Error>;
