//! Subcommands, with help shown when none is given.

use argent_core::{Bindings, Handler, params};
use argent_demos::{exit_with, init_logging, run, tree};

const INPUTS: &str = "--a: The first input.\n--b: The second input.";

fn gate(name: &str, summary: &str, op: fn(bool, bool) -> bool) -> Handler<Option<bool>> {
    Handler::new(name, move |args: &Bindings| {
        Some(op(args.flag("__a"), args.flag("__b")))
    })
    .params(params![__a, __b])
    .doc(format!("{summary}\n\n{INPUTS}"))
}

fn main() {
    init_logging();

    let mut tree = tree(
        Handler::new("logical_operations", |_: &Bindings| None)
            .doc("Emulate some sea-moss logic ICs."),
    )
    .unwrap_or_else(|err| exit_with(err));

    let gates = [
        gate("AND", "4081 quad 2-input AND gate.", |a, b| a && b),
        gate("OR", "4071 quad 2-input OR gate.", |a, b| a || b),
        gate("NAND", "4093 quad 2-input NAND (with Schmitt triggers!)", |a, b| !(a && b)),
    ];
    for gate in gates {
        if let Err(err) = tree.subcommand(gate) {
            exit_with(err);
        }
    }

    run(&tree, |output| match output {
        Some(on) => println!("{on}"),
        None => tree.help(),
    });
}
