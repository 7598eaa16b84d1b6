//! Front-end for a minimal ML-family expression language:
//! text -> [`lexer::Lexer`] -> tokens -> [`parser::Parser`] -> [`ast::Expr`]
//! -> any [`ast::Visitor`], e.g. the [`printer::PrettyPrinter`].

pub use error::{Error, Result};
pub use parser::parse;

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;
