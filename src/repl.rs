use std::io::{self, Write};

use itertools::Itertools;

use calcrs::{backend::builtins, evaluate, evaluate_ast, parse_expression, EvaluationError};

/// Evaluates one expression into the text to print: its value, optionally
/// preceded by the tree it parsed into.
pub fn render_evaluation(expression: &str, inspect_tree: bool) -> Result<String, EvaluationError> {
    if inspect_tree {
        let ast = parse_expression(expression)?;
        let val = evaluate_ast(&ast)?;
        Ok(format!("{ast:#?}\n{val}"))
    } else {
        evaluate(expression).map(|val| val.to_string())
    }
}

pub fn evaluate_and_print(expression: &str, inspect_tree: bool) -> Result<(), EvaluationError> {
    println!("{}", render_evaluation(expression, inspect_tree)?);
    Ok(())
}

// Read-Eval-Print-Loop over stdin. Errors are printed and the loop goes on,
// only `exit`, `quit` or the end of input stop it.
pub fn calculator_driver(inspect_tree: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input_buf = String::new();

    loop {
        print!("calculator> ");
        io::stdout().flush()?;

        input_buf.clear();
        if stdin.read_line(&mut input_buf)? == 0 {
            println!();
            return Ok(());
        }

        match input_buf.trim() {
            "" => continue,

            "exit" | "quit" => return Ok(()),

            expression => {
                if let Err(err) = evaluate_and_print(expression, inspect_tree) {
                    eprintln!("{err}");
                }
            }
        }
    }
}

/// Constants with their values, then function names grouped by arity.
pub fn catalog() -> String {
    let mut lines = vec!["Constants:".to_owned()];

    for (name, val) in builtins::CONSTANTS.iter().sorted_by_key(|(name, _)| **name) {
        lines.push(format!("  {name:<8} {val}"));
    }

    lines.push("Functions:".to_owned());

    let by_arity = builtins::FUNCTIONS
        .iter()
        .map(|(name, function)| (function.arity(), *name))
        .sorted()
        .group_by(|(arity, _)| *arity);

    for (arity, group) in &by_arity {
        lines.push(format!(
            "  {arity} args: {}",
            group.map(|(_, name)| name).join(", ")
        ));
    }

    lines.join("\n")
}

pub fn print_catalog() {
    println!("{}", catalog());
}
