//! Flags with alternate spellings from the doc comment.

use argent_core::{Bindings, Handler, params};
use argent_demos::{exit_with, init_logging, run, tree};

fn main() {
    init_logging();

    // Leading underscores mark flags; on the command line these are --a and --b.
    let tree = tree(
        Handler::new("xor", |args: &Bindings| args.flag("__a") ^ args.flag("__b"))
            .params(params![__a, __b])
            .doc(
                "A boolean xor operation.\n\n\
                 --a, --i1: The first input.\n\
                 --b, --i2: The second input.",
            ),
    )
    .unwrap_or_else(|err| exit_with(err));

    run(&tree, |on| println!("{on}"));
}
