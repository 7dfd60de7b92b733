//! bsharp Parser Module
//!
//! Parses S-expressions pulled from a [`Lexer`](crate::lexer::Lexer) into an
//! Abstract Syntax Tree (AST).

mod ast;
mod sexpr_parser;

pub use ast::{Expression, Identifier, Program};
pub use sexpr_parser::{parse_source, parse_strict, Parser, FUNCTION_KEYWORD};
