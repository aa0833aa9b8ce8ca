use thiserror::Error;

/// Error produced by cube lookups and rotations.
///
/// Every variant is a programming error on the caller's side (or in the
/// descriptor catalog). Nothing here is transient, so nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// No descriptor with this slice id
    #[error("no slice with id {0}")]
    InvalidSlice(usize),
    /// Negative repetition count
    #[error("repetition count must be non-negative, got {0}")]
    InvalidArgument(i64),
    /// Cell coordinate outside `[0, 2]`
    #[error("cell ({row}, {col}) is outside the 3x3 grid")]
    IndexOutOfBounds { row: usize, col: usize },
    /// Descriptor whose starting face is not on its axis cycle
    ///
    /// Walking such a chain would never return to the start.
    #[error("slice {slice} starts on a face outside its axis cycle")]
    MalformedDescriptor { slice: usize },
}
