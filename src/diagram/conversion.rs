use super::{Diagram, DiagramDefinition};
use crate::error::DefinitionError;

/// A trait for host data models that can be turned into a `DiagramDefinition`.
///
/// This is the extension point for bringing diagrams in from an editor's own
/// storage. Implement it on your structs and call [`IntoDefinition::into_diagram`]
/// to get a checked [`Diagram`].
///
/// # Example
///
/// ```rust,no_run
/// use flochart::prelude::*;
/// use flochart::error::DefinitionError;
///
/// struct Block { label: String, code: String }
/// struct Sketch { blocks: Vec<Block> }
///
/// impl IntoDefinition for Sketch {
///     fn into_definition(self) -> std::result::Result<DiagramDefinition, DefinitionError> {
///         let mut nodes = vec![NodeDefinition {
///             key: "start".to_string(),
///             kind: NodeKind::Entry,
///             script: None,
///         }];
///         let mut edges = Vec::new();
///         let mut previous = "start".to_string();
///         for block in self.blocks {
///             edges.push(EdgeDefinition {
///                 source: previous,
///                 target: block.label.clone(),
///                 condition: None,
///             });
///             previous = block.label.clone();
///             nodes.push(NodeDefinition {
///                 key: block.label,
///                 kind: NodeKind::Action,
///                 script: Some(block.code),
///             });
///         }
///         Ok(DiagramDefinition {
///             name: "sketch".to_string(),
///             description: String::new(),
///             nodes,
///             edges,
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoDefinition: Sized {
    /// Consumes the object and converts it into a diagram definition.
    fn into_definition(self) -> Result<DiagramDefinition, DefinitionError>;

    /// Converts and replays the definition through the editing API.
    fn into_diagram(self) -> Result<Diagram, DefinitionError> {
        self.into_definition()?.build()
    }
}

impl IntoDefinition for DiagramDefinition {
    fn into_definition(self) -> Result<DiagramDefinition, DefinitionError> {
        Ok(self)
    }
}
