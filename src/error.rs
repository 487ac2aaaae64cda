use thiserror::Error;

/// Recoverable failures. Broken geometry (zero-length rays and the like) is
/// not in here; that panics at the point of use.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
    #[error("could not write image")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
