//! # bsharp - front end for a small S-expression language
//!
//! bsharp (b#) is a lisp aimed at making shell pipelines easier to write. This crate
//! holds its front end: it turns source text into a typed abstract syntax tree.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Tokens → Parser → AST (+ diagnostics)
//! ```
//!
//! - [`Lexer`] - Pulls one [`Token`] at a time out of the source
//! - [`Parser`] - Recursive descent over the pulled tokens, building a [`Program`]
//! - [`Expression`] - AST node variants
//! - [`Diagnostic`] - Non-fatal parse problems, collected instead of raised
//!
//! ## Basic Usage
//!
//! ```rust
//! use bsharp::{Expression, Lexer, Parser, TokenKind};
//!
//! let lexer = Lexer::new("(+ 1 2)");
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.len(), 1);
//!
//! match &program.expressions[0] {
//!     Expression::Call { function, args, .. } => {
//!         assert_eq!(function.kind, TokenKind::Plus);
//!         assert_eq!(args.len(), 2);
//!     }
//!     other => panic!("unexpected {}", other),
//! }
//! ```
//!
//! ## Error Handling
//!
//! The parser never stops at the first problem. Each malformed construct is
//! reported and skipped, and parsing resumes with the next expression:
//!
//! ```rust
//! use bsharp::parse_source;
//!
//! let (program, diagnostics) = parse_source("(1 2) (+ 3 4)");
//!
//! assert_eq!(program.len(), 1);
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics[0].to_string().contains("Function name cannot be NUMBER"));
//! ```
//!
//! Use [`parse_strict`] to turn any diagnostic into an [`Error`].

/// Version of the bsharp front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Diagnostic, Error, Result, Severity};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{
    parse_source, parse_strict, Expression, Identifier, Parser, Program, FUNCTION_KEYWORD,
};
