/// terminal menus
pub mod cli_equilibrium;
pub mod cli_examples;
pub mod cli_main;
