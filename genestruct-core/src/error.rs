use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("translation error: {msg}")]
    Translation { msg: String },

    #[error("sequence io error: {0}")]
    Io(#[from] io::Error),
}

pub type GeneResult<T> = Result<T, GeneError>;
