//! Necessary and optional positionals together.

use argent_core::{Bindings, Handler, params};
use argent_demos::{exit_with, init_logging, run, tree};

const SECOND: &str = "b";
const THIRD: &str = "c";

const DOC: &str = "\
Prints the first three letters of the alphabet, if you can decipher its secrets...

first: A cryptic glyph whose nature is not yet known.
second: A powerful symbol with many names; to the ancients, \"bet\".
third: A relatively recent invention, though still many lifetimes old.";

fn position(letter: &str) -> Option<usize> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some(usize::from(c.to_ascii_lowercase() as u8 - b'a'))
        }
        _ => None,
    }
}

fn consecutive(letters: &[String]) -> bool {
    let positions: Option<Vec<usize>> = letters.iter().map(|l| position(l)).collect();
    positions.is_some_and(|p| p.windows(2).all(|w| w[0] + 1 == w[1]))
}

fn alphabet() -> Handler<Vec<String>> {
    Handler::new("alphabet", |args: &Bindings| {
        vec![
            args.text_or("first", "").to_string(),
            args.text_or("second", SECOND).to_string(),
            args.text_or("third", THIRD).to_string(),
        ]
    })
    .params(params![first, second = SECOND, third = THIRD])
    .doc(DOC)
}

fn main() {
    init_logging();

    let tree = tree(alphabet()).unwrap_or_else(|err| exit_with(err));

    run(&tree, |letters| {
        for letter in &letters {
            println!("{letter}");
        }
        if consecutive(&letters) {
            println!("Only twenty-three more to go.");
        }
    });
}
