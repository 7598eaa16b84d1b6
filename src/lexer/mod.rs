pub use error::{Error, Result};
pub use lexer::Lexer;
pub use token::{KEYWORDS, Literal, SYMBOLS, Token, TokenKind};

mod error;
mod lexer;
mod token;
