use thiserror::Error;

/// Errors raised by the strict parsing entry points.
///
/// The per-frame paths never return these; they fall back and log instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoseError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("invalid hex color `{0}`")]
    InvalidHexColor(String),
    #[error("petal {petal} of tree {tree} does not exist")]
    PetalOutOfRange { tree: usize, petal: usize },
}

pub type Result<T> = std::result::Result<T, RoseError>;
