use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("buffer of {actual} bytes is too small for a {expected} byte value")]
    BufferTooSmall { expected: usize, actual: usize },
    #[error("expected a {expected} byte image, got {actual} bytes")]
    Length { expected: usize, actual: usize },
}
