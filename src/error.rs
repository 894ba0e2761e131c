use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Fatal failures at the document-parse boundary.
///
/// Everything that can go wrong *inside* a render pass (unknown component
/// kinds, dangling child references, malformed property values) is absorbed
/// locally and never becomes an error: the only user-visible failure mode is
/// the single "unable to render" fallback produced when one of these is hit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("document is not valid JSON: {message}")]
    InvalidJson { message: String },

    #[error("top level of the document must be a JSON object of node entries")]
    NotAnObject,

    #[error("document has no \"ROOT\" entry")]
    MissingRoot,
}
