/// Errors from constructing render types out of raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("heading level {0} is outside 1..=6")]
    InvalidHeadingLevel(u8),

    #[error("wrap width must be at least 1")]
    ZeroWidth,
}
