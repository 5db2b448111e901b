//! # Flochart - Flowchart to Script Compiler
//!
//! **Flochart** turns a visually built flowchart into an executable, trampoline-style
//! script. A diagram is a directed graph of elements (one entry, any number of
//! actions and two-way branches) joined by arrows, and compiles into one callable
//! unit per element plus a small driver loop that runs them.
//!
//! ## Core Workflow
//!
//! 1.  **Edit**: Build a [`graph::Graph`] through its editing API. Edits that would
//!     break a structural rule (arrow capacity, arrows into the entry, loops made only
//!     of branches) are refused on the spot.
//! 2.  **Validate**: Run [`validator::validate`] (first failure) or [`validator::report`]
//!     (all failures) before compiling.
//! 3.  **Compile**: Use [`compiler::Compiler`] (or its builder) to produce a
//!     [`diagram::CompiledScript`].
//!
//! Diagrams kept in another format can be brought in through
//! [`diagram::IntoDefinition`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flochart::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut diagram = Diagram::new("greeter", "Says hello when asked to");
//!     let graph = &mut diagram.graph;
//!
//!     let entry = graph.add_node(NodeKind::Entry, None)?;
//!     let ask = graph.add_node(NodeKind::Branch, Some("return env.vars.polite;".into()))?;
//!     let hello = graph.add_node(NodeKind::Action, Some("floApi.say('hello');".into()))?;
//!     let bye = graph.add_node(NodeKind::Action, Some("floApi.say('bye');".into()))?;
//!
//!     graph.add_edge(entry, ask, None)?;
//!     graph.add_edge(ask, hello, Some(Condition::Yes))?;
//!     graph.add_edge(ask, bye, Some(Condition::No))?;
//!
//!     validate(&diagram.graph)?;
//!     let script = Compiler::builder().with_max_iterations(500).build().compile(&diagram)?;
//!     println!("{}", script.source_text());
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod diagram;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod validator;
