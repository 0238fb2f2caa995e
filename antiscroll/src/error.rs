//! Error types for pane construction and configuration.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors surfaced to the caller. Runtime interaction never fails; only
/// creating a pane and loading options can.
#[derive(Debug, Error)]
pub enum Error {
    /// The container handed to [`Pane::create`](crate::Pane::create) is not in the document.
    #[error("container {0} is not attached to the document")]
    MissingContainer(NodeId),

    /// The container holds no `.antiscroll-inner` element.
    #[error("container {0} has no `.antiscroll-inner` element")]
    MissingInner(NodeId),

    /// Options could not be deserialized.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
