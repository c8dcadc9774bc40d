use thiserror::Error;

/// The result type used by the stringify operation
pub type Result<T> = std::result::Result<T, Error>;

/// The errors that can occur while stringifying a value graph
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The active encode path revisited a container that was already being encoded
    ///
    /// Only a path that revisits one of its own ancestors produces this error; a sub-structure
    /// that's reachable via several sibling paths encodes successfully, with its contents
    /// duplicated in the output.
    #[error("circular reference encountered while stringifying")]
    CircularReference,
}
