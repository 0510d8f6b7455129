use super::EquilibriumSolver::NotFound;
use super::Interpreter::Interpretation;
use super::ReactionSpec::{EquilibriumResult, ReactionSpec};
use log::error;
use prettytable::{Table, row};
use std::io::{self, Write};

/// shown instead of the result table when the scan fails
pub const NOT_FOUND_MESSAGE: &str = "Could not compute the equilibrium with the given data.";

/// how the result was obtained, printed before the interpretation
pub const METHOD_EXPLANATION: [&str; 3] = [
    "The equilibrium was computed by shifting concentrations according to the stoichiometric coefficients.",
    "The value of x was found for which the reaction quotient Q approaches Kc.",
    "Concentrations were checked to stay non-negative.",
];

////////////////////////INPUT/OUTPUT////////////////////////////////////////////////////////

/// table with initial and equilibrium concentrations, equilibrium values rounded to 3 decimals
pub fn result_table(spec: &ReactionSpec, result: &EquilibriumResult) -> Table {
    let mut table = Table::new();
    table.add_row(row!["substance", "coefficient", "initial, mol/L", "equilibrium, mol/L"]);
    let coefficients = spec.coefficients();
    let initial = spec.concentrations();
    let rounded = result.rounded();
    for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
        table.add_row(row![name, coefficients[i], initial[i], rounded[i]]);
    }
    table
}

/// Writes the report of a successful computation: the result table, how it was
/// obtained and the three interpretation statements.
pub fn write_report<W: Write>(
    writer: &mut W,
    spec: &ReactionSpec,
    result: &EquilibriumResult,
    interpretation: &Interpretation,
) -> io::Result<()> {
    writeln!(writer, "Equilibrium concentrations:")?;
    write!(writer, "{}", result_table(spec, result))?;
    for line in METHOD_EXPLANATION {
        writeln!(writer, "{}", line)?;
    }
    for statement in interpretation.statements() {
        writeln!(writer, "{}", statement)?;
    }
    Ok(())
}

pub fn pretty_print_result(
    spec: &ReactionSpec,
    result: &EquilibriumResult,
    interpretation: &Interpretation,
) {
    println!("__________EQUILIBRIUM, Kc = {}__________", spec.kc);
    if let Err(e) = write_report(&mut io::stdout(), spec, result, interpretation) {
        error!("Failed to print the report: {}", e);
    }
    println!("_____________________________________________________________");
}

pub fn print_not_found(reason: &NotFound) {
    println!("\x1b[31m{}\x1b[0m", NOT_FOUND_MESSAGE);
    println!("({})", reason);
}
