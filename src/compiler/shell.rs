//! Text templates for the generated script: the outer wrapper, one template per
//! callable-unit shape, and the trampoline driver.

/// Name of the outer function the runtime calls.
pub const RUNNER_SYMBOL: &str = "runScript";

/// Host object the driver reports runaway scripts through.
pub const HOST_API: &str = "floApi";

const INDENT: &str = "    ";

pub(super) fn preamble() -> String {
    format!("function {} (env) {{\n", RUNNER_SYMBOL)
}

/// Unit with no successor.
pub(super) fn terminal_unit(name: &str, body: &str) -> String {
    let mut code = unit_header(name);
    push_body(&mut code, "", body);
    code.push_str(&format!("{INDENT}}}\n"));
    code
}

/// Unit that schedules `next` once its body has run.
pub(super) fn chained_unit(name: &str, body: &str, next: &str) -> String {
    let mut code = unit_header(name);
    push_body(&mut code, "", body);
    code.push_str(&format!("{INDENT}{INDENT}env.execute({next});\n"));
    code.push_str(&format!("{INDENT}}}\n"));
    code
}

/// Unit that schedules `yes` when its body evaluates truthy and `no` otherwise.
pub(super) fn branch_unit(name: &str, body: &str, yes: &str, no: &str) -> String {
    let mut code = unit_header(name);
    push_body(&mut code, "var outcome = ", body);
    code.push_str(&format!("{INDENT}{INDENT}if (outcome) {{\n"));
    code.push_str(&format!("{INDENT}{INDENT}{INDENT}env.execute({yes});\n"));
    code.push_str(&format!("{INDENT}{INDENT}}} else {{\n"));
    code.push_str(&format!("{INDENT}{INDENT}{INDENT}env.execute({no});\n"));
    code.push_str(&format!("{INDENT}{INDENT}}}\n"));
    code.push_str(&format!("{INDENT}}}\n"));
    code
}

/// The trampoline driver. Each unit pushes its successor through `env.execute`
/// and returns; the loop pops and runs units until the stack drains or the
/// iteration guard trips. The runner reports whether the stack drained.
pub(super) fn epilogue(entry_symbol: &str, max_iterations: u32) -> String {
    let lines = [
        "var env = env || {};".to_string(),
        "env.vars = env.vars || {};".to_string(),
        format!("var max_iter = {max_iterations};"),
        "var iter = 0;".to_string(),
        "var function_stack = [];".to_string(),
        "var old_exec = env.execute;".to_string(),
        "env.execute = function (next_fun) {".to_string(),
        format!("{INDENT}function_stack.push(next_fun);"),
        "};".to_string(),
        format!("function_stack.push({entry_symbol});"),
        "while (function_stack.length != 0) {".to_string(),
        format!("{INDENT}var top_fun = function_stack.pop();"),
        format!("{INDENT}top_fun(env);"),
        format!("{INDENT}iter++;"),
        format!("{INDENT}if (iter > max_iter) {{"),
        format!(
            "{INDENT}{INDENT}{HOST_API}.errorMessage(\"Stack overflow error. Stack depth is \" + max_iter);"
        ),
        format!("{INDENT}{INDENT}break;"),
        format!("{INDENT}}}"),
        "}".to_string(),
        "env.execute = old_exec;".to_string(),
        "return function_stack.length == 0;".to_string(),
    ];

    let mut code = String::new();
    for line in lines {
        code.push_str(INDENT);
        code.push_str(&line);
        code.push('\n');
    }
    code.push_str("}\n");
    code
}

fn unit_header(name: &str) -> String {
    format!("{INDENT}function {name}(env) {{\n")
}

/// Wraps the user fragment in an immediately invoked function. For branch units
/// its return value is the outcome.
fn push_body(code: &mut String, binding: &str, body: &str) {
    code.push_str(&format!("{INDENT}{INDENT}{binding}(function () {{\n"));
    for line in body.lines() {
        if line.trim().is_empty() {
            code.push('\n');
        } else {
            code.push_str(&format!("{INDENT}{INDENT}{INDENT}{line}\n"));
        }
    }
    code.push_str(&format!("{INDENT}{INDENT}}})();\n"));
}
