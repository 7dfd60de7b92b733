//! Lexical analysis for bsharp
//!
//! Converts source text into tokens, one token per [`Lexer::next_token`] call.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};
