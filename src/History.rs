//! # History Module
//!
//! ## Purpose
//! Keeps the list of solved exercises. The log is an ordinary value owned by the caller
//! (the CLI session) and passed around explicitly; nothing here is global.
//!
//! ## File Format
//! JSON array, one object per exercise, keys in camelCase:
//! ```json
//! [
//!   { "coefA": 1.0, "coefB": 1.0, "coefC": 1.0, "coefD": 1.0,
//!     "concA": 1.0, "concB": 1.0, "concC": 0.0, "concD": 0.0,
//!     "kc": 1.0,
//!     "resA": 0.5, "resB": 0.5, "resC": 0.5, "resD": 0.5 }
//! ]
//! ```
//! A missing file is an empty history.

use crate::Equilibrium::ReactionSpec::{EquilibriumResult, ReactionSpec};
use log::{info, warn};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// one solved exercise: the input specification and its equilibrium concentrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub spec: ReactionSpec,
    pub res_a: f64,
    pub res_b: f64,
    pub res_c: f64,
    pub res_d: f64,
}

impl HistoryEntry {
    pub fn new(spec: &ReactionSpec, result: &EquilibriumResult) -> Self {
        Self {
            spec: *spec,
            res_a: result.a(),
            res_b: result.b(),
            res_c: result.c(),
            res_d: result.d(),
        }
    }

    pub fn result(&self) -> EquilibriumResult {
        EquilibriumResult::new(self.res_a, self.res_b, self.res_c, self.res_d)
    }

}

/// ordered log of solved exercises, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, spec: &ReactionSpec, result: &EquilibriumResult) {
        self.entries.push(HistoryEntry::new(spec, result));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Loads the log from a JSON file. A missing file gives an empty log,
    /// a file that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        if !path.exists() {
            info!("no history file at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            warn!("history file {} is empty", path.display());
            return Ok(Self::new());
        }
        let entries: Vec<HistoryEntry> = serde_json::from_str(&content)?;
        info!(
            "loaded {} exercises from {}",
            entries.len(),
            path.display()
        );
        Ok(Self { entries })
    }

    /// writes the whole log, replacing the file
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, content)?;
        info!("saved {} exercises to {}", self.entries.len(), path.display());
        Ok(())
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "#", "a", "b", "c", "d", "[A]0", "[B]0", "[C]0", "[D]0", "Kc", "[A]", "[B]", "[C]",
            "[D]"
        ]);
        for (i, entry) in self.entries.iter().enumerate() {
            let s = &entry.spec;
            let number = i + 1;
            let [ra, rb, rc, rd] = entry.result().rounded();
            table.add_row(row![
                number,
                s.coef_a,
                s.coef_b,
                s.coef_c,
                s.coef_d,
                s.conc_a,
                s.conc_b,
                s.conc_c,
                s.conc_d,
                s.kc,
                ra,
                rb,
                rc,
                rd
            ]);
        }
        table
    }

    pub fn pretty_print(&self) {
        if self.entries.is_empty() {
            println!("History is empty");
            return;
        }
        println!("___________________EXERCISE HISTORY________________________");
        self.to_table().printstd();
        println!("_____________________________________________________________");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Equilibrium::EquilibriumSolver::solve;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn solved_log() -> HistoryLog {
        let mut log = HistoryLog::new();
        let spec1 = ReactionSpec::new([1.0; 4], [1.0, 1.0, 0.0, 0.0], 1.0);
        let spec2 = ReactionSpec::new([2.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 0.5);
        log.push(&spec1, &solve(&spec1).unwrap());
        log.push(&spec2, &solve(&spec2).unwrap());
        log
    }

    #[test]
    fn test_entry_json_keys() {
        let log = solved_log();
        let value = serde_json::to_value(&log.entries()[0]).unwrap();
        for key in [
            "coefA", "coefB", "coefC", "coefD", "concA", "concB", "concC", "concD", "kc", "resA",
            "resB", "resC", "resD",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value.as_object().unwrap().len(), 13);
    }

    #[test]
    fn test_save_and_load_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let log = solved_log();
        log.save(&path).unwrap();

        let loaded = HistoryLog::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        for (saved, restored) in log.entries().iter().zip(loaded.entries()) {
            assert_eq!(saved.spec, restored.spec);
            for (x, y) in saved
                .result()
                .as_array()
                .iter()
                .zip(restored.result().as_array().iter())
            {
                assert_relative_eq!(*x, *y, epsilon = 1e-15);
            }
        }
        assert_eq!(loaded.entries()[1].spec.coef_a, 2.0);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let log = HistoryLog::load(&dir.path().join("nothing_here.json")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_load_camel_case_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"coefA":1,"coefB":1,"coefC":1,"coefD":1,"concA":1,"concB":1,"concC":0,"concD":0,"kc":1,"resA":0.5000000000000387,"resB":0.5000000000000387,"resC":0.49999999999996125,"resD":0.49999999999996125}}]"#
        )
        .unwrap();
        let log = HistoryLog::load(file.path()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].spec.kc, 1.0);
        assert_eq!(log.entries()[0].result().rounded()[2], "0.500");
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[{{\"coefA\": 1,").unwrap();
        assert!(matches!(
            HistoryLog::load(file.path()),
            Err(HistoryError::Json(_))
        ));
    }

    #[test]
    fn test_table_and_clear() {
        let mut log = solved_log();
        let table = log.to_table();
        // header + two exercises, numbered from 1
        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("0.500"));
        assert!(rendered.contains("| 2 "));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.to_table().len(), 1);
    }
}
