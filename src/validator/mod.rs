//! # Structural Validator
//!
//! Independent, side-effect free checks over a [`Graph`]. Each returns the specific
//! reason it failed. The editor runs the arrow checks interactively while an arrow
//! is dragged, and [`validate`] (or [`report`]) before asking for a compile.
//!
//! Order of the pre-compile sequence:
//!
//! 1. entry element exists and has a single child
//! 2. arrow capacity and entry-target limits
//! 3. every element reachable from the entry
//! 4. every non-entry element scripted
//! 5. every branch has one `yes` and one `no` arrow

mod arrows;
mod structure;

pub use arrows::*;
pub use structure::*;

use crate::error::ValidationError;
use crate::graph::Graph;

/// Runs the full pre-compile sequence, stopping at the first failure.
pub fn validate(graph: &Graph) -> Result<(), ValidationError> {
    tracing::debug!(elements = graph.node_count(), "validating diagram");
    check_entry(graph)?;
    check_arrow_limits(graph)?;
    check_reachability(graph)?;
    check_scripts(graph)?;
    check_branch_labels(graph)?;
    Ok(())
}

/// Runs every pre-compile check and collects all failures instead of stopping
/// at the first. An empty report means the diagram is ready to compile.
pub fn report(graph: &Graph) -> Vec<ValidationError> {
    let mut problems = Vec::new();

    if let Err(err) = check_entry(graph) {
        problems.push(err);
    }
    if let Err(err) = check_arrow_limits(graph) {
        problems.push(err);
    }
    // A missing entry was already reported above.
    if let Ok(unreachable) = unreachable_nodes(graph) {
        problems.extend(
            unreachable
                .into_iter()
                .map(|node| ValidationError::NotAllElementsReachable { node }),
        );
    }
    problems.extend(
        unscripted_nodes(graph)
            .into_iter()
            .map(|node| ValidationError::UnscriptedElements { node }),
    );
    problems.extend(
        mislabelled_branches(graph)
            .into_iter()
            .map(|node| ValidationError::DiamondArrowNoLabel { node }),
    );

    tracing::debug!(problems = problems.len(), "diagram report finished");
    problems
}
