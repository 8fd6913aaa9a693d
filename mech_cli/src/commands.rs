//! CLI command implementations.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use mech_core::calculations::{calculate_batch, parse_requests, FormulaResult};
use mech_core::equations::{generate_equations_markdown, Equation, EquationTracker, ALL_EQUATIONS};
use mech_core::CalcError;

/// Everything `eval` prints: results plus the equations they relied on.
#[derive(Debug, Serialize)]
struct EvalReport {
    results: Vec<FormulaResult>,
    equations_used: Vec<Equation>,
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        Ok(buffer)
    } else {
        let contents =
            fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
        Ok(contents)
    }
}

fn evaluate(json: &str) -> Result<EvalReport> {
    let requests = parse_requests(json).context("Failed to parse calculation requests")?;
    info!("evaluating {} request(s)", requests.len());

    let mut tracker = EquationTracker::new();
    let results = calculate_batch(&requests, &mut tracker).context("Calculation failed")?;

    Ok(EvalReport {
        results,
        equations_used: tracker.unique_equations(),
    })
}

/// Evaluate requests from a file or stdin and print the results as JSON.
pub fn eval(path: &str) -> Result<()> {
    let json = read_source(path)?;
    let report = evaluate(&json)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print a table of registered equations.
pub fn list() -> Result<()> {
    let width = ALL_EQUATIONS
        .iter()
        .map(|eq| eq.function_name().len())
        .max()
        .unwrap_or(0);

    for category in Equation::all_categories() {
        println!("{}", category.display_name());
        for equation in Equation::in_category(category) {
            let meta = equation.metadata();
            println!("  {:<width$}  {}", equation.function_name(), meta.formula_plain, width = width);
        }
    }
    Ok(())
}

/// Print the markdown reference, or write it to `output`.
pub fn equations(output: Option<&str>) -> Result<()> {
    let markdown = generate_equations_markdown();
    match output {
        Some(path) => {
            fs::write(path, &markdown).map_err(|e| CalcError::file_error("write", path, e.to_string()))?;
            info!("wrote {} bytes to {}", markdown.len(), path);
        }
        None => print!("{markdown}"),
    }
    Ok(())
}
