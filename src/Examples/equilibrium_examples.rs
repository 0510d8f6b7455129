use crate::Equilibrium::EquilibriumOutput::{pretty_print_result, print_not_found};
use crate::Equilibrium::EquilibriumSolver::{NotFound, reaction_quotient, solve};
use crate::Equilibrium::Interpreter::{Direction, interpret};
use crate::Equilibrium::ReactionSpec::ReactionSpec;
use approx::assert_relative_eq;

pub fn equilibrium_examples(task: usize) {
    //
    match task {
        0 => {
            // A + B <=> C + D, [A]0 = [B]0 = 1 mol/L, Kc = 1: x = 0.5
            let spec = ReactionSpec::new([1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 1.0);
            let res = solve(&spec).unwrap();
            assert_relative_eq!(res.a(), 0.5, epsilon = 1e-6);
            assert_relative_eq!(res.d(), 0.5, epsilon = 1e-6);
            let interpretation = interpret(&spec, &res);
            assert_eq!(interpretation.direction, Direction::Balanced);
            pretty_print_result(&spec, &res, &interpretation);
        }
        1 => {
            // 2A + B <=> C + D
            let spec = ReactionSpec::new([2.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 0.5);
            let res = solve(&spec).unwrap();
            let q = spec.quotient_of(res.as_array());
            println!("Q at the found point: {}, Kc: {}", q, spec.kc);
            assert_relative_eq!(q, spec.kc, epsilon = 5e-4);
            pretty_print_result(&spec, &res, &interpret(&spec, &res));
        }
        2 => {
            // Q grows without bound as A and B approach zero, yet never hits 1e9 on the grid
            let spec = ReactionSpec::new([1.0, 1.0, 1.0, 1.0], [0.1, 0.1, 0.0, 0.0], 1e9);
            match solve(&spec) {
                Ok(res) => println!("unexpected result {:?}", res),
                Err(reason) => print_not_found(&reason),
            }
        }
        3 => {
            // initial Q = 25 > Kc = 1: equilibrium lies at x < 0
            let spec = ReactionSpec::new([1.0, 1.0, 1.0, 1.0], [0.2, 0.2, 1.0, 1.0], 1.0);
            println!("Q at x = 0: {}", reaction_quotient(&spec, 0.0));
            match solve(&spec) {
                Ok(res) => println!("unexpected result {:?}", res),
                Err(reason) => {
                    assert!(matches!(reason, NotFound::NegativeConcentration { .. }));
                    print_not_found(&reason);
                    println!("the scan only moves towards the products");
                }
            }
        }
        4 => {
            let spec = ReactionSpec::new([1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], 0.01);
            let res = solve(&spec).unwrap();
            let interpretation = interpret(&spec, &res);
            println!(
                "change of reactants: {}, change of products: {}",
                interpretation.reactant_change, interpretation.product_change
            );
            pretty_print_result(&spec, &res, &interpretation);
        }
        _ => println!("no such example: {}", task),
    }
}
