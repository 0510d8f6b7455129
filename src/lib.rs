#[allow(non_snake_case)]
pub mod Equilibrium;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod History;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
