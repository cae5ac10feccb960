use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarouselError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("slide index {index} out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },

    #[error("carousel has been destroyed")]
    Destroyed,
}
