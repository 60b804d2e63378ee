use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open file {path}")]
    DocumentUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read document {path}: {reason}")]
    DocumentDecodeFailed { path: String, reason: String },

    /// A caller broke an API precondition, e.g. asked for a mesh of a non-polygon object.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error(
        "object '{object}': polygon {polygon} references point {index}, but only {point_count} points exist"
    )]
    PointIndexOutOfRange {
        object: String,
        polygon: usize,
        index: u32,
        point_count: usize,
    },

    #[error(
        "object '{object}' expands to {vertex_count} vertices, more than u32 face indices address"
    )]
    MeshTooLarge { object: String, vertex_count: usize },

    /// Raised for cycles and for objects shared by several parents alike.
    #[error("object '{object}' is reachable more than once from the document root")]
    CycleDetected { object: String },

    #[error("object hierarchy is deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    /// Hierarchy walk failed. Everything it built has been released already.
    #[error("scene traversal aborted")]
    TraversalAborted(#[source] Box<ImportError>),
}

impl ImportError {
    /// The failure underneath any [`ImportError::TraversalAborted`] wrapper.
    pub fn root_cause(&self) -> &ImportError {
        match self {
            Self::TraversalAborted(inner) => inner.root_cause(),
            other => other,
        }
    }
}
