use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// An offset or length recorded by the writer disagrees with the bytes
    /// actually emitted. Always a programmer error; rendering aborts rather
    /// than producing a document no conforming reader could open.
    #[error("document invariant violated: {0}")]
    Invariant(String),

    /// The text contained a character the literal-string escaper has no
    /// representation for.
    #[error("unencodable text: {0}")]
    Encode(String),
}
