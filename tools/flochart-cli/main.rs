use clap::{Parser, ValueEnum};
use flochart::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// How the compiled script is written out.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The generated source text only
    Source,
    /// The full compiled script with its metadata, as JSON
    Json,
}

/// Validate and compile a flowchart diagram into a trampoline script
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the diagram definition JSON file
    diagram_path: String,

    /// Print the generated script in this format
    #[arg(short, long, value_enum, default_value = "source")]
    format: OutputFormat,

    /// Also save the compiled script as a binary artifact at this path
    #[arg(short, long)]
    artifact: Option<String>,

    /// Compile even when the validator reports problems
    #[arg(long)]
    force: bool,

    /// Load arrows without the edit-time checks, so every problem shows up in the report
    #[arg(long)]
    unchecked: bool,

    /// Reserved identifier of the entry unit
    #[arg(long, default_value = flochart::compiler::DEFAULT_ENTRY_SYMBOL)]
    entry_symbol: String,

    /// Prefix of generated unit identifiers
    #[arg(long, default_value = flochart::compiler::DEFAULT_NAME_PREFIX)]
    name_prefix: String,

    /// Units the driver may run before reporting a stack overflow
    #[arg(long, default_value_t = flochart::compiler::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let json = fs::read_to_string(&cli.diagram_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read diagram file '{}': {}",
            &cli.diagram_path, e
        ))
    });
    let diagram = DiagramDefinition::from_json(&json)
        .and_then(|definition| {
            if cli.unchecked {
                definition.build_unchecked()
            } else {
                definition.into_diagram()
            }
        })
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load diagram: {}", e)));

    // --- 2. Validation ---
    let problems = report(&diagram.graph);
    if !problems.is_empty() {
        eprintln!("Validator found {} problem(s):", problems.len());
        for problem in &problems {
            eprintln!("  - [{:?}] {}", problem.code(), problem);
        }
        if !cli.force {
            exit_with_error("Diagram is not valid; pass --force to compile anyway");
        }
    }

    // --- 3. Compilation ---
    let compile_start = Instant::now();
    let compiler = Compiler::builder()
        .with_entry_symbol(&cli.entry_symbol)
        .with_name_prefix(&cli.name_prefix)
        .with_max_iterations(cli.max_iterations)
        .build();
    let script = compiler
        .compile(&diagram)
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();

    // --- 4. Output ---
    match cli.format {
        OutputFormat::Source => print!("{}", script.source_text()),
        OutputFormat::Json => {
            let json = script
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", json);
        }
    }

    if let Some(path) = cli.artifact {
        script
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        eprintln!("Saved compiled script to '{}'", path);
    }

    eprintln!(
        "Compiled '{}' ({} elements) in {:?}, total {:?}",
        script.name(),
        diagram.graph.node_count(),
        compile_duration,
        total_start.elapsed()
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
