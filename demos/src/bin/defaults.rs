//! An optional positional with a default.

use argent_core::{Bindings, Handler};
use argent_demos::{exit_with, init_logging, run, tree};

const SOMETHING: &str = "hello";

fn main() {
    init_logging();

    let tree = tree(
        Handler::new("default_positional", |args: &Bindings| {
            args.text_or("something", SOMETHING).to_string()
        })
        .param_default("something", SOMETHING)
        .doc(
            "Prints whatever you please.\n\n\
             something: the argument that will be printed; defaults to \"hello\".",
        ),
    )
    .unwrap_or_else(|err| exit_with(err));

    run(&tree, |something| println!("{something}"));
}
