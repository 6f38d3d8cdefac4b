use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unrecognized spirit base: {0:?}")]
    UnknownSpirit(String),
    #[error("unrecognized flavor type: {0:?}")]
    UnknownFlavor(String),
    #[error("unrecognized complexity level: {0:?}")]
    UnknownComplexity(String),
    #[error("unrecognized mood descriptor: {0:?}")]
    UnknownMood(String),
}
