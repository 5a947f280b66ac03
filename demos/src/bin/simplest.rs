//! A handler with no parameters.

use argent_core::{Bindings, Handler};
use argent_demos::{exit_with, init_logging, run, tree};

fn main() {
    init_logging();

    let tree = tree(
        Handler::new("simplest", |_: &Bindings| println!("hello!"))
            .doc("Prints hello when you call it."),
    )
    .unwrap_or_else(|err| exit_with(err));

    run(&tree, |()| {});
}
