pub mod artifact;
pub mod conversion;
pub mod definition;

pub use artifact::*;
pub use conversion::*;
pub use definition::*;

use crate::graph::Graph;

/// A named flowchart: the graph a user edits plus the metadata carried into the
/// compiled script.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub name: String,
    pub description: String,
    /// The name the diagram was first saved under, when it has since been renamed.
    pub original_name: Option<String>,
    pub version: u32,
    pub graph: Graph,
}

impl Diagram {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}
