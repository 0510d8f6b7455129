/// reaction aA + bB <=> cC + dD: input specification, equilibrium result and validation
pub mod ReactionSpec;
/// forward scan over the reaction progress variable until Q matches Kc
/// # Examples
/// ```
/// use KcEquilibrium::Equilibrium::EquilibriumSolver::{solve, NotFound};
/// use KcEquilibrium::Equilibrium::Interpreter::interpret;
/// use KcEquilibrium::Equilibrium::ReactionSpec::ReactionSpec;
/// // A + B <=> C + D, [A]0 = [B]0 = 1 mol/L, Kc = 1
/// let spec = ReactionSpec::new([1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 1.0);
/// match solve(&spec) {
///     Ok(res) => {
///         println!("A = {:.3}, C = {:.3}", res.a(), res.c());
///         for statement in interpret(&spec, &res).statements() {
///             println!("{}", statement);
///         }
///     }
///     Err(NotFound::NegativeConcentration { step, .. }) => println!("depleted at step {}", step),
///     Err(e) => println!("{}", e),
/// }
/// ```
pub mod EquilibriumSolver;
/// qualitative summary of a solved equilibrium
pub mod Interpreter;
/// tables and text for the terminal
pub mod EquilibriumOutput;
