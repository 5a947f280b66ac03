//! Nested subcommands and a custom flag convention.
//!
//! Parameters named `no_*` are switches here, so `--no-exclaim` turns the
//! trailing exclamation mark off.

use argent_core::{Bindings, CommandTree, Handler, SchemaBuilder, SchemaError, params};
use argent_demos::{exit_with, help_config, init_logging, run};
use argent_help::TextPresenter;

const GREETED: &str = "world";
const LEAVING: &str = "friend";

fn negated(name: &str) -> bool {
    name.starts_with("no_") || name.starts_with("no-")
}

fn punctuate(args: &Bindings, text: String) -> String {
    if args.flag("no_exclaim") { text } else { format!("{text}!") }
}

fn greeter() -> Result<CommandTree<Option<String>>, SchemaError> {
    let builder = SchemaBuilder::new().with_flag_convention(negated);
    let mut tree = CommandTree::with_builder(
        builder,
        Handler::new("greeter", |args: &Bindings| {
            let text = format!("Hello, {}", args.text_or("name", GREETED));
            Some(punctuate(args, text))
        })
        .params(params![name = GREETED, no_exclaim])
        .doc(
            "Greets someone.\n\n\
             name: Who to greet.\n\
             no-exclaim, no-bang: Leave off the exclamation mark.",
        ),
    )?;

    let farewell = tree.subcommand(
        Handler::new("farewell", |_: &Bindings| None)
            .doc("Says goodbye. Pick a register with a subcommand."),
    )?;
    farewell.subcommand(
        Handler::new("casual", |args: &Bindings| {
            Some(punctuate(args, format!("Bye, {}", args.text_or("name", LEAVING))))
        })
        .params(params![name = LEAVING, no_exclaim])
        .doc("A quick goodbye.\n\nname: Who is leaving."),
    )?;
    farewell.subcommand(
        Handler::new("formal", |args: &Bindings| {
            let text = format!(
                "Farewell, {} {}",
                args.text_or("title", ""),
                args.text_or("name", "")
            );
            Some(punctuate(args, text))
        })
        .params(params![title, name, no_exclaim])
        .doc("A proper goodbye.\n\ntitle: Honorific.\nname: Family name."),
    )?;

    Ok(tree)
}

fn main() {
    init_logging();

    let tree = greeter()
        .unwrap_or_else(|err| exit_with(err))
        .with_presenter(TextPresenter::new(help_config()));

    run(&tree, |output| match output {
        Some(text) => println!("{text}"),
        None => {
            tree.help_for(&["farewell"]);
        }
    });
}
