use crate::graph::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat, payload-free classification of every failure this crate can report.
///
/// Hosts use this to pick a user-facing message or icon without matching on the
/// richer error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    MissingEntry,
    EntryMustHaveSingleChild,
    MaxChildrenReached,
    CannotConnectToEntry,
    HasAlwaysTrueLoop,
    NotAllElementsReachable,
    UnscriptedElements,
    DiamondArrowNoLabel,
    Graph,
    Definition,
    Artifact,
}

/// Structural problems found by the diagram validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The diagram must have an entry element")]
    MissingEntry,

    #[error("The entry element may only connect to a single element, but it connects to {children}")]
    EntryMustHaveSingleChild { children: usize },

    #[error("Element {node} already has the maximum of {capacity} outgoing arrows")]
    MaxChildrenReached { node: NodeId, capacity: usize },

    #[error("Arrows cannot point at the entry element")]
    CannotConnectToEntry,

    #[error("Connecting {from} to {to} would create a loop made only of conditions")]
    HasAlwaysTrueLoop { from: NodeId, to: NodeId },

    #[error("Not all elements are reachable from the entry element (first unreachable: {node})")]
    NotAllElementsReachable { node: NodeId },

    #[error("Element {node} has no script")]
    UnscriptedElements { node: NodeId },

    #[error("Condition element {node} needs exactly one 'yes' and one 'no' arrow")]
    DiamondArrowNoLabel { node: NodeId },
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingEntry => ErrorCode::MissingEntry,
            ValidationError::EntryMustHaveSingleChild { .. } => ErrorCode::EntryMustHaveSingleChild,
            ValidationError::MaxChildrenReached { .. } => ErrorCode::MaxChildrenReached,
            ValidationError::CannotConnectToEntry => ErrorCode::CannotConnectToEntry,
            ValidationError::HasAlwaysTrueLoop { .. } => ErrorCode::HasAlwaysTrueLoop,
            ValidationError::NotAllElementsReachable { .. } => ErrorCode::NotAllElementsReachable,
            ValidationError::UnscriptedElements { .. } => ErrorCode::UnscriptedElements,
            ValidationError::DiamondArrowNoLabel { .. } => ErrorCode::DiamondArrowNoLabel,
        }
    }
}

/// Errors that can occur while compiling a diagram into a script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("The diagram must have an entry element")]
    MissingEntry,

    #[error("The entry element may only connect to a single element, but it connects to {children}")]
    EntryMustHaveSingleChild { children: usize },

    /// Only produced when the compiler was built with `validate_first(true)`.
    #[error("The diagram failed validation: {0}")]
    Invalid(ValidationError),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::MissingEntry => ErrorCode::MissingEntry,
            CompileError::EntryMustHaveSingleChild { .. } => ErrorCode::EntryMustHaveSingleChild,
            CompileError::Invalid(inner) => inner.code(),
        }
    }
}

impl From<ValidationError> for CompileError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingEntry => CompileError::MissingEntry,
            ValidationError::EntryMustHaveSingleChild { children } => {
                CompileError::EntryMustHaveSingleChild { children }
            }
            other => CompileError::Invalid(other),
        }
    }
}

/// Edits refused by the graph model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Element {0} does not exist in the diagram")]
    NodeNotFound(NodeId),

    #[error("Arrow {0} does not exist in the diagram")]
    EdgeNotFound(EdgeId),

    #[error("The diagram already has an entry element ({0})")]
    DuplicateEntry(NodeId),

    #[error("Arrow {0} is already anchored at both ends")]
    EdgeAlreadyAnchored(EdgeId),

    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

impl GraphError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GraphError::Rejected(inner) => inner.code(),
            _ => ErrorCode::Graph,
        }
    }
}

/// Errors that can occur when importing a diagram definition.
#[derive(Error, Debug, Clone)]
pub enum DefinitionError {
    #[error("Failed to parse diagram JSON: {0}")]
    JsonParseError(String),

    #[error("Element '{0}' is declared more than once")]
    DuplicateKey(String),

    #[error("Arrow from '{source_key}' refers to unknown element '{missing_key}'")]
    UnknownElement {
        missing_key: String,
        source_key: String,
    },

    #[error("Element '{key}' could not be added: {error}")]
    RejectedEdit { key: String, error: GraphError },
}

impl DefinitionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DefinitionError::RejectedEdit { error, .. } => error.code(),
            _ => ErrorCode::Definition,
        }
    }
}

/// Errors that can occur when saving or loading a compiled script artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}

impl ArtifactError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Artifact
    }
}
