use crate::span::Span;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{1}: unrecognized character '{0}'")]
    UnrecognizedCharacter(char, Span),
}

pub type Result<T> = std::result::Result<T, Error>;
