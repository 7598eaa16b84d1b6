use crate::{lexer, parser};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] lexer::Error),

    #[error(transparent)]
    Parse(#[from] parser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
