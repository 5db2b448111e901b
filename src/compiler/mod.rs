//! # Diagram to Script Compiler
//!
//! Turns a [`Diagram`] into a [`CompiledScript`]: one callable unit per element,
//! each pushing its successor onto a shared stack, hosted inside a trampoline
//! driver so deep flowcharts never grow the host call stack.
//!
//! The compiler re-checks only the entry rules (`MissingEntry` and
//! `EntryMustHaveSingleChild`), because edits after an earlier validation can
//! break them. Unreachable, unscripted or mislabelled elements are the
//! validator's business: on such graphs the compiler emits whatever is present,
//! empty bodies included. Build with [`CompilerBuilder::validate_first`] to run
//! the full validator sequence first.

mod emitter;
mod names;
pub mod shell;

use crate::diagram::{CompiledScript, Diagram, ScriptKind};
use crate::error::CompileError;
use crate::validator;
use emitter::UnitEmitter;
use names::NameTable;

/// Identifier the runtime starts the trampoline from.
pub const DEFAULT_ENTRY_SYMBOL: &str = "entryFunction";
/// Prefix of generated unit identifiers.
pub const DEFAULT_NAME_PREFIX: &str = "function";
/// Units the driver may run before it reports a stack overflow.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    pub entry_symbol: String,
    pub name_prefix: String,
    pub max_iterations: u32,
    pub validate_first: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            entry_symbol: DEFAULT_ENTRY_SYMBOL.to_string(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            validate_first: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerBuilder {
    options: CompilerOptions,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_entry_symbol(mut self, symbol: &str) -> Self {
        self.options.entry_symbol = symbol.to_string();
        self
    }
    pub fn with_name_prefix(mut self, prefix: &str) -> Self {
        self.options.name_prefix = prefix.to_string();
        self
    }
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.options.max_iterations = max_iterations;
        self
    }
    pub fn validate_first(mut self, enabled: bool) -> Self {
        self.options.validate_first = enabled;
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            options: self.options,
        }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn compile(&self, diagram: &Diagram) -> Result<CompiledScript, CompileError> {
        let graph = &diagram.graph;
        tracing::info!(
            name = %diagram.name,
            elements = graph.node_count(),
            arrows = graph.edge_count(),
            "compiling diagram"
        );

        if self.options.validate_first {
            validator::validate(graph)?;
        }
        let entry = validator::check_entry(graph).map_err(|err| {
            tracing::warn!(error = %err, "compilation refused");
            CompileError::from(err)
        })?;

        let names = NameTable::allocate(
            graph,
            &self.options.entry_symbol,
            &self.options.name_prefix,
        );
        tracing::debug!(names = names.len(), "unit names allocated");

        let mut code = shell::preamble();
        let (units, emitted) = UnitEmitter::new(graph, &names).emit_from(entry);
        code.push_str(&units);
        code.push_str(&shell::epilogue(
            &self.options.entry_symbol,
            self.options.max_iterations,
        ));

        tracing::info!(units = emitted, bytes = code.len(), "compilation successful");
        Ok(CompiledScript::new(
            code,
            diagram.name.clone(),
            ScriptKind::Function,
            diagram.description.clone(),
        ))
    }
}

/// Compiles a diagram with the default options.
pub fn compile(diagram: &Diagram) -> Result<CompiledScript, CompileError> {
    Compiler::new().compile(diagram)
}
