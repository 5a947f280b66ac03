//! One necessary positional argument.

use argent_core::{Bindings, Handler};
use argent_demos::{exit_with, init_logging, run, tree};

fn main() {
    init_logging();

    let tree = tree(
        Handler::new("positional", |args: &Bindings| {
            args.text_or("something", "").to_string()
        })
        .param("something")
        .doc("Prints whatever you want.\n\nsomething: the argument that will be printed."),
    )
    .unwrap_or_else(|err| exit_with(err));

    run(&tree, |something| println!("{something}"));
}
