//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most hosts need to edit, validate and
//! compile a diagram.
//!
//! # Example
//!
//! ```rust,no_run
//! use flochart::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/diagram.json")?;
//! let diagram = DiagramDefinition::from_json(&json)?.build()?;
//!
//! for problem in report(&diagram.graph) {
//!     println!("{}", problem);
//! }
//! let script = compile(&diagram)?;
//! println!("{}", script.source_text());
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{Condition, Edge, EdgeId, Graph, Node, NodeId, NodeKind};

// Diagrams, definitions and compiled output
pub use crate::diagram::{
    CompiledScript, Diagram, DiagramDefinition, EdgeDefinition, IntoDefinition, NodeDefinition,
    ScriptKind,
};

// Validation and compilation
pub use crate::compiler::{Compiler, CompilerBuilder, CompilerOptions, compile};
pub use crate::validator::{report, validate};

// Error types
pub use crate::error::{
    ArtifactError, CompileError, DefinitionError, ErrorCode, GraphError, ValidationError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
