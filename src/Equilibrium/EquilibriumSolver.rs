//! # Equilibrium solver
//!
//! Forward scan over the reaction progress variable `x` for `aA + bB <=> cC + dD`:
//!
//! ```text
//! A = A0 - a*x,  B = B0 - b*x,  C = C0 + c*x,  D = D0 + d*x
//! Q(x) = (C^c * D^d) / (A^a * B^b)
//! ```
//!
//! `x` starts at 0 and grows by [`STEP`] up to [`MAX_ITERATIONS`] times. The first `x`
//! with `|Q - Kc| < TOLERANCE` is returned as is, without refinement. The scan stops
//! with [`NotFound`] as soon as a concentration becomes negative or the cap is reached.
//!
//! ## Known limitation
//! `x` never goes below zero, so a mixture that must shift towards the reactants
//! (initial Q > Kc) always ends with [`NotFound`].
//!
//! # Examples
//! ```
//! use KcEquilibrium::Equilibrium::EquilibriumSolver::solve;
//! use KcEquilibrium::Equilibrium::ReactionSpec::ReactionSpec;
//! let spec = ReactionSpec::new([1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 1.0);
//! let res = solve(&spec).unwrap();
//! assert!((res.a() - 0.5).abs() < 1e-6);
//! assert!((res.c() - 0.5).abs() < 1e-6);
//! ```
use super::ReactionSpec::{EquilibriumResult, ReactionSpec, SpecError};
use log::{debug, info};
use thiserror::Error;

/// increment of the progress variable
pub const STEP: f64 = 0.0001;
/// accepted absolute deviation of Q from Kc
pub const TOLERANCE: f64 = 0.0005;
/// maximal number of scan steps
pub const MAX_ITERATIONS: usize = 100_000;

/// the scan ended without meeting the tolerance
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NotFound {
    #[error("concentration would become negative at step {step} (x = {x})")]
    NegativeConcentration { step: usize, x: f64 },
    #[error("no match within {iterations} steps")]
    IterationCapReached { iterations: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EquilibriumError {
    #[error("invalid reaction specification: {0}")]
    InvalidSpec(#[from] SpecError),
    #[error("equilibrium not found: {0}")]
    NotFound(#[from] NotFound),
}

/// reaction quotient at progress x
pub fn reaction_quotient(spec: &ReactionSpec, x: f64) -> f64 {
    spec.quotient_of(spec.concentrations_at(x))
}

/// Scans x = STEP, 2*STEP, ... and returns the concentrations at the first x where
/// |Q - Kc| < TOLERANCE.
/// Malformed input is not rejected here: NaN comparisons never succeed, so such a spec
/// runs to the cap and yields `NotFound`. Use [`solve_checked`] to reject it up front.
pub fn solve(spec: &ReactionSpec) -> Result<EquilibriumResult, NotFound> {
    let mut x = 0.0;
    for step in 1..=MAX_ITERATIONS {
        x += STEP;
        let concentrations = spec.concentrations_at(x);
        if concentrations.iter().any(|&c| c < 0.0) {
            debug!("negative concentration at step {}, x = {}", step, x);
            return Err(NotFound::NegativeConcentration { step, x });
        }
        let q = spec.quotient_of(concentrations);
        if (q - spec.kc).abs() < TOLERANCE {
            let [a, b, c, d] = concentrations;
            info!("equilibrium found at step {}, x = {}, Q = {}", step, x, q);
            return Ok(EquilibriumResult::new(a, b, c, d));
        }
    }
    debug!("scan exhausted after {} steps, x = {}", MAX_ITERATIONS, x);
    Err(NotFound::IterationCapReached {
        iterations: MAX_ITERATIONS,
    })
}

/// rejects a malformed `ReactionSpec` before scanning
pub fn solve_checked(spec: &ReactionSpec) -> Result<EquilibriumResult, EquilibriumError> {
    spec.validate()?;
    Ok(solve(spec)?)
}
