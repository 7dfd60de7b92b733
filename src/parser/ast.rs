use crate::error::{Error, Result};
use crate::lexer::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete parsed input
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level expressions in source order
    pub expressions: Vec<Expression>,
}

impl Program {
    /// Number of top-level expressions
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// True when no expression was produced
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Iterate over the top-level expressions in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.expressions.iter()
    }

    /// Render the tree as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}

/// An identifier together with the token it was read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// IDENT token
    pub token: Token,
    /// Identifier text
    pub name: String,
}

impl Identifier {
    /// Build an identifier from its token
    pub fn new(token: Token) -> Self {
        let name = token.text.clone();
        Identifier { token, name }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Numeric literal, kept as written: `20.1`
    Number {
        /// NUMBER token
        token: Token,
        /// Literal text; not validated as a number
        value: String,
    },

    /// String literal without escape processing: `"hello"`
    String {
        /// STRING token
        token: Token,
        /// Raw content between the quotes
        value: String,
    },

    /// Identifier reference: `x`
    Identifier(Identifier),

    /// Array literal: `[1 2 3]`
    Array {
        /// Opening `[` token
        token: Token,
        /// Elements in source order
        elements: Vec<Expression>,
    },

    /// Function call: `(+ 1 2)`, `(sin x)`
    Call {
        /// Opening `(` token
        token: Token,
        /// Called name: an IDENT or one of `+ - * /`
        function: Token,
        /// Arguments in source order
        args: Vec<Expression>,
    },

    /// Function declaration: `(fn name [params] body...)`
    Function {
        /// Opening `(` token
        token: Token,
        /// Function name token
        name: Token,
        /// Parameter names
        params: Vec<Identifier>,
        /// Body expressions in evaluation order
        body: Vec<Expression>,
    },
}

impl Expression {
    /// The token this node was produced from
    pub fn token(&self) -> &Token {
        match self {
            Expression::Number { token, .. }
            | Expression::String { token, .. }
            | Expression::Array { token, .. }
            | Expression::Call { token, .. }
            | Expression::Function { token, .. } => token,
            Expression::Identifier(ident) => &ident.token,
        }
    }

    /// Name of the node kind, used in diagnostics
    pub fn node_name(&self) -> &'static str {
        match self {
            Expression::Number { .. } => "NumberExpression",
            Expression::String { .. } => "StringExpression",
            Expression::Identifier(_) => "IdentifierExpression",
            Expression::Array { .. } => "ArrayExpression",
            Expression::Call { .. } => "CallExpression",
            Expression::Function { .. } => "FunctionExpression",
        }
    }

    /// Convert a number literal to its value.
    ///
    /// The parser accepts any run of digits and dots, so malformed literals such
    /// as `1.2.3` are only rejected here.
    pub fn number_value(&self) -> Result<f64> {
        match self {
            Expression::Number { value, .. } => value.parse().map_err(|_| Error::InvalidNumber {
                text: value.clone(),
            }),
            other => Err(Error::InvalidNumber {
                text: other.to_string(),
            }),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Identifier({})", self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number { value, .. } => write!(f, "Number({})", value),
            Expression::String { value, .. } => write!(f, "String({})", value),
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Array { elements, .. } => {
                write!(f, "Array[")?;
                write_list(f, elements)?;
                write!(f, "]")
            }
            Expression::Call { function, args, .. } => {
                write!(f, "Call({}; ", function.text)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Expression::Function {
                name, params, body, ..
            } => {
                write!(f, "Function({}; [", name.text)?;
                write_list(f, params)?;
                write!(f, "]; ")?;
                write_list(f, body)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for expression in &self.expressions {
            writeln!(f, "{}", expression)?;
        }
        Ok(())
    }
}
