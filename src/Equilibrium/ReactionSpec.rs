//! # Reaction specification and equilibrium result
//!
//! Plain value records for the reaction `aA + bB <=> cC + dD`:
//! - **ReactionSpec**: stoichiometric coefficients, initial concentrations (mol/L) and Kc
//! - **EquilibriumResult**: equilibrium concentrations found by the solver
//!
//! Both serialize with the camelCase keys used in the history file
//! (`coefA`, `concA`, `kc`, ...).
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// caller errors in a reaction specification
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
    #[error("field '{0}' is not a finite number")]
    NonFinite(&'static str),
    #[error("stoichiometric coefficient '{name}' must be positive, got {value}")]
    NonPositiveCoefficient { name: &'static str, value: f64 },
    #[error("initial concentration '{name}' must not be negative, got {value}")]
    NegativeConcentration { name: &'static str, value: f64 },
    #[error("equilibrium constant must be positive, got {0}")]
    NonPositiveKc(f64),
}

/// reaction aA + bB <=> cC + dD with initial concentrations and the equilibrium constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSpec {
    pub coef_a: f64,
    pub coef_b: f64,
    pub coef_c: f64,
    pub coef_d: f64,
    pub conc_a: f64,
    pub conc_b: f64,
    pub conc_c: f64,
    pub conc_d: f64,
    /// equilibrium constant Kc
    pub kc: f64,
}

impl ReactionSpec {
    /// coefficients are given as [a, b, c, d], concentrations as [A0, B0, C0, D0]
    pub fn new(coefficients: [f64; 4], concentrations: [f64; 4], kc: f64) -> Self {
        let [coef_a, coef_b, coef_c, coef_d] = coefficients;
        let [conc_a, conc_b, conc_c, conc_d] = concentrations;
        Self {
            coef_a,
            coef_b,
            coef_c,
            coef_d,
            conc_a,
            conc_b,
            conc_c,
            conc_d,
            kc,
        }
    }

    pub fn coefficients(&self) -> [f64; 4] {
        [self.coef_a, self.coef_b, self.coef_c, self.coef_d]
    }

    pub fn concentrations(&self) -> [f64; 4] {
        [self.conc_a, self.conc_b, self.conc_c, self.conc_d]
    }

    /// Checks the invariants of a well-formed specification:
    /// every field finite, coefficients > 0, concentrations >= 0, Kc > 0.
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), SpecError> {
        let coefficients = [
            ("coefA", self.coef_a),
            ("coefB", self.coef_b),
            ("coefC", self.coef_c),
            ("coefD", self.coef_d),
        ];
        let concentrations = [
            ("concA", self.conc_a),
            ("concB", self.conc_b),
            ("concC", self.conc_c),
            ("concD", self.conc_d),
        ];
        for (name, value) in coefficients
            .iter()
            .chain(concentrations.iter())
            .chain([("kc", self.kc)].iter())
        {
            if !value.is_finite() {
                return Err(SpecError::NonFinite(*name));
            }
        }
        for (name, value) in coefficients {
            if value <= 0.0 {
                return Err(SpecError::NonPositiveCoefficient { name, value });
            }
        }
        for (name, value) in concentrations {
            if value < 0.0 {
                return Err(SpecError::NegativeConcentration { name, value });
            }
        }
        if self.kc <= 0.0 {
            return Err(SpecError::NonPositiveKc(self.kc));
        }
        Ok(())
    }

    /// concentrations of A, B, C, D at reaction progress x
    pub fn concentrations_at(&self, x: f64) -> [f64; 4] {
        [
            self.conc_a - self.coef_a * x,
            self.conc_b - self.coef_b * x,
            self.conc_c + self.coef_c * x,
            self.conc_d + self.coef_d * x,
        ]
    }

    /// Q = (C^c * D^d) / (A^a * B^b) for the given concentrations
    pub fn quotient_of(&self, concentrations: [f64; 4]) -> f64 {
        let [a, b, c, d] = concentrations;
        (c.powf(self.coef_c) * d.powf(self.coef_d)) / (a.powf(self.coef_a) * b.powf(self.coef_b))
    }
}

/// Equilibrium concentrations of A, B, C, D.
/// Built by the solver (or restored from history); read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl EquilibriumResult {
    pub(crate) fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn a(&self) -> f64 {
        self.a
    }
    pub fn b(&self) -> f64 {
        self.b
    }
    pub fn c(&self) -> f64 {
        self.c
    }
    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// values rounded to 3 decimal places, the way they are shown to the user
    pub fn rounded(&self) -> [String; 4] {
        self.as_array().map(|v| format!("{:.3}", v))
    }
}
