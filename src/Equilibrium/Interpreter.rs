//! Qualitative reading of a solved equilibrium: which side is favoured, what the
//! magnitude of Kc means and whether the mixture moved noticeably.
use super::ReactionSpec::{EquilibriumResult, ReactionSpec};
use std::fmt;

/// Kc above this value means products predominate
pub const HIGH_KC: f64 = 10.0;
/// Kc below this value means reactants predominate
pub const LOW_KC: f64 = 0.1;
/// both summed changes below this value count as no shift
pub const NEGLIGIBLE_CHANGE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Products,
    Reactants,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude {
    High(f64),
    Low(f64),
    Moderate(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    Negligible,
    Shifted,
}

/// three statements, always in the order direction, magnitude, significance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpretation {
    pub direction: Direction,
    pub magnitude: Magnitude,
    pub significance: Significance,
    /// (A0 - A) + (B0 - B)
    pub reactant_change: f64,
    /// (C - C0) + (D - D0)
    pub product_change: f64,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Products => write!(f, "The reaction favors the formation of products."),
            Direction::Reactants => write!(f, "The reaction favors the reactants."),
            Direction::Balanced => write!(
                f,
                "Changes in reactants and products are similar, the equilibrium is balanced."
            ),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::High(kc) => write!(
                f,
                "The equilibrium constant (Kc = {}) is high, so products predominate at equilibrium.",
                kc
            ),
            Magnitude::Low(kc) => write!(
                f,
                "The equilibrium constant (Kc = {}) is low, so reactants predominate at equilibrium.",
                kc
            ),
            Magnitude::Moderate(kc) => write!(
                f,
                "The equilibrium constant (Kc = {}) is moderate, so significant amounts of both reactants and products are present at equilibrium.",
                kc
            ),
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::Negligible => write!(
                f,
                "Concentration changes are very small, the mixture was almost at equilibrium from the start."
            ),
            Significance::Shifted => write!(
                f,
                "Concentration changes show a reaction that shifted to reach equilibrium."
            ),
        }
    }
}

impl Interpretation {
    pub fn statements(&self) -> [String; 3] {
        [
            self.direction.to_string(),
            self.magnitude.to_string(),
            self.significance.to_string(),
        ]
    }
}

impl Magnitude {
    pub fn of(kc: f64) -> Self {
        if kc > HIGH_KC {
            Magnitude::High(kc)
        } else if kc < LOW_KC {
            Magnitude::Low(kc)
        } else {
            Magnitude::Moderate(kc)
        }
    }
}

pub fn interpret(spec: &ReactionSpec, result: &EquilibriumResult) -> Interpretation {
    let delta_a = spec.conc_a - result.a();
    let delta_b = spec.conc_b - result.b();
    let delta_c = result.c() - spec.conc_c;
    let delta_d = result.d() - spec.conc_d;
    let reactant_change = delta_a + delta_b;
    let product_change = delta_c + delta_d;

    let direction = if product_change > reactant_change {
        Direction::Products
    } else if reactant_change > product_change {
        Direction::Reactants
    } else {
        Direction::Balanced
    };
    let significance =
        if reactant_change.abs() < NEGLIGIBLE_CHANGE && product_change.abs() < NEGLIGIBLE_CHANGE {
            Significance::Negligible
        } else {
            Significance::Shifted
        };
    Interpretation {
        direction,
        magnitude: Magnitude::of(spec.kc),
        significance,
        reactant_change,
        product_change,
    }
}
