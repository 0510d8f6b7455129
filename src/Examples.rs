/// numbered demonstrations of the solver and the interpreter
pub mod equilibrium_examples;
