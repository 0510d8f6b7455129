use crate::Equilibrium::EquilibriumOutput::{NOT_FOUND_MESSAGE, write_report};
use crate::Equilibrium::EquilibriumSolver::{NotFound, solve};
use crate::Equilibrium::Interpreter::interpret;
use crate::Equilibrium::ReactionSpec::{EquilibriumResult, ReactionSpec};
use crate::History::HistoryLog;
use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// prompts in the order the nine numbers are read
pub const FIELD_PROMPTS: [&str; 9] = [
    "Coefficient of A (a)",
    "Coefficient of B (b)",
    "Coefficient of C (c)",
    "Coefficient of D (d)",
    "Initial concentration of A, mol/L",
    "Initial concentration of B, mol/L",
    "Initial concentration of C, mol/L",
    "Initial concentration of D, mol/L",
    "Equilibrium constant Kc",
];

pub fn parse_number(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Empty input, a number is expected".to_string());
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", trimmed))
}

/// Reads the 9 fields (a, b, c, d, [A]0, [B]0, [C]0, [D]0, Kc), one per line.
/// Only the numeric parse happens here; sign checks are done by `ReactionSpec::validate`.
pub fn read_reaction_spec<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<ReactionSpec, String> {
    let mut values = [0.0; 9];
    for (value, prompt) in values.iter_mut().zip(FIELD_PROMPTS.iter()) {
        write!(writer, "\x1b[36m{}: \x1b[0m", prompt).map_err(|e| e.to_string())?;
        writer.flush().map_err(|e| e.to_string())?;
        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("Input ended before all fields were entered".to_string());
        }
        *value = parse_number(&line).map_err(|e| format!("{}: {}", prompt, e))?;
    }
    let [a, b, c, d, conc_a, conc_b, conc_c, conc_d, kc] = values;
    Ok(ReactionSpec::new([a, b, c, d], [conc_a, conc_b, conc_c, conc_d], kc))
}

/// Solves, prints the report and, on success only, appends to the history.
/// Returns the result so the caller can decide whether to persist the log.
pub fn compute_and_report<W: Write>(
    spec: &ReactionSpec,
    history: &mut HistoryLog,
    writer: &mut W,
) -> Result<Result<EquilibriumResult, NotFound>, String> {
    if let Err(e) = spec.validate() {
        // computed anyway: most malformed specs end as NotFound, the rest are reported and recorded
        warn!("suspicious input: {}", e);
    }
    let outcome = solve(spec);
    match &outcome {
        Ok(result) => {
            let interpretation = interpret(spec, result);
            write_report(writer, spec, result, &interpretation).map_err(|e| e.to_string())?;
            history.push(spec, result);
            info!("exercise {} added to history", history.len());
        }
        Err(reason) => {
            writeln!(writer, "{}", NOT_FOUND_MESSAGE).map_err(|e| e.to_string())?;
            info!("no equilibrium: {}", reason);
        }
    }
    Ok(outcome)
}

/// interactive variant used by the main menu
pub fn equilibrium_menu(history: &mut HistoryLog, history_path: &Path) {
    println!("\n=== Equilibrium aA + bB <=> cC + dD ===");
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    let spec = match read_reaction_spec(&mut reader, &mut stdout) {
        Ok(spec) => spec,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    match compute_and_report(&spec, history, &mut stdout) {
        Ok(Ok(_)) => {
            if let Err(e) = history.save(history_path) {
                error!("{}", e);
            }
        }
        Ok(Err(_)) => {}
        Err(e) => println!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1.5\n"), Ok(1.5));
        assert_eq!(parse_number("0,25"), Ok(0.25));
        assert_eq!(parse_number("1e-3"), Ok(0.001));
        assert!(parse_number("").is_err());
        assert!(parse_number("abc").is_err());
    }

    #[test]
    fn test_read_reaction_spec() {
        let mut input = Cursor::new("2\n1\n1\n1\n1\n1\n0\n0\n0.5\n");
        let mut output = Vec::new();
        let spec = read_reaction_spec(&mut input, &mut output).unwrap();
        assert_eq!(
            spec,
            ReactionSpec::new([2.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 0.5)
        );
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Equilibrium constant Kc"));
    }

    #[test]
    fn test_read_reaction_spec_errors() {
        let mut input = Cursor::new("1\n1\nx\n");
        let mut output = Vec::new();
        let err = read_reaction_spec(&mut input, &mut output).unwrap_err();
        assert!(err.contains("Coefficient of C"));

        let mut input = Cursor::new("1\n1\n");
        let err = read_reaction_spec(&mut input, &mut output).unwrap_err();
        assert!(err.contains("Input ended"));
    }

    #[test]
    fn test_success_is_reported_and_recorded() {
        let spec = ReactionSpec::new([1.0; 4], [1.0, 1.0, 0.0, 0.0], 1.0);
        let mut history = HistoryLog::new();
        let mut output = Vec::new();
        let outcome = compute_and_report(&spec, &mut history, &mut output).unwrap();
        assert!(outcome.is_ok());
        assert_eq!(history.len(), 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("0.500"));
        assert!(text.contains("balanced"));
        assert!(!text.contains(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_not_found_skips_history() {
        let spec = ReactionSpec::new([1.0; 4], [0.1, 0.1, 0.0, 0.0], 1e9);
        let mut history = HistoryLog::new();
        let mut output = Vec::new();
        let outcome = compute_and_report(&spec, &mut history, &mut output).unwrap();
        assert!(outcome.is_err());
        assert!(history.is_empty());
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.trim(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_malformed_spec_is_still_solved() {
        // a zero coefficient fails validation, yet the scan runs and the result is kept:
        // A is inert, Q = x^2 / (1 - x) reaches 1 near x = 0.618
        let spec = ReactionSpec::new([0.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 1.0);
        assert!(spec.validate().is_err());
        let mut history = HistoryLog::new();
        let mut output = Vec::new();
        let res = compute_and_report(&spec, &mut history, &mut output)
            .unwrap()
            .unwrap();
        assert_eq!(res.a(), 1.0);
        assert_relative_eq!(res.b(), 0.382, epsilon = 1e-3);
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].spec.coef_a, 0.0);
        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains(NOT_FOUND_MESSAGE));
    }
}
