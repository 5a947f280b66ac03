use std::sync::{Arc, Mutex};

use argent_core::{
    Bindings, CommandTree, Dispatch, Handler, HelpView, ParseError, Presenter, params,
};

/// Presenter that records which node asked for help.
#[derive(Clone, Default)]
struct Recorder {
    shown: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl Presenter for Recorder {
    fn present(&self, view: &HelpView<'_>) {
        self.shown.lock().unwrap().push(view.usage_path("prog").join(" "));
    }
}

fn first_case(recorder: &Recorder) -> CommandTree<String> {
    let mut tree = CommandTree::new(
        Handler::new("parser", |_: &Bindings| "Some stuff.".to_string())
            .doc("A test parser using argent."),
    )
    .unwrap()
    .with_presenter(recorder.clone());

    tree.subcommand(
        Handler::new("hello", |args: &Bindings| {
            if args.flag("__f") {
                args.text_or("something", "hello").to_string()
            } else {
                "goodbye".to_string()
            }
        })
        .params(params![__f, something = "hello"])
        .doc("Return `something` if '--f' flag is given; else 'goodbye'"),
    )
    .unwrap();

    tree.subcommand(
        Handler::new("something", |args: &Bindings| {
            format!("{}{}", args.text_or("a", ""), args.text_or("b", ""))
        })
        .params(params![a, b]),
    )
    .unwrap();

    tree
}

fn completed(tree: &CommandTree<String>, tokens: &[&str]) -> String {
    match tree.parse(tokens) {
        Ok(Dispatch::Completed(value)) => value,
        other => panic!("expected completion for {tokens:?}, got {other:?}"),
    }
}

#[test]
fn test_base_command() {
    let tree = first_case(&Recorder::default());

    assert_eq!(completed(&tree, &[]), "Some stuff.");
}

#[test]
fn test_flag_error() {
    let tree = first_case(&Recorder::default());

    assert_eq!(
        tree.parse(&["--n"]),
        Err(ParseError::IllegalFlag {
            command: "parser".to_string(),
            flag: "--n".to_string(),
        })
    );
}

#[test]
fn test_arg_error() {
    let tree = first_case(&Recorder::default());

    assert!(matches!(
        tree.parse(&["boo"]),
        Err(ParseError::TooManyArguments { max: 0, given: 1, .. })
    ));
}

#[test]
fn test_not_enough_args() {
    let tree = first_case(&Recorder::default());

    assert!(matches!(
        tree.parse(&["something"]),
        Err(ParseError::TooFewArguments { required: 2, given: 0, .. })
    ));
    assert_eq!(completed(&tree, &["something", "x", "y"]), "xy");
}

#[test]
fn test_subcommand() {
    let tree = first_case(&Recorder::default());

    assert_eq!(completed(&tree, &["hello"]), "goodbye");
}

#[test]
fn test_boolean_flags() {
    let tree = first_case(&Recorder::default());

    assert_eq!(completed(&tree, &["hello", "--f"]), "hello");
}

#[test]
fn test_positional_arguments() {
    let tree = first_case(&Recorder::default());

    assert_eq!(completed(&tree, &["hello", "--f", "vuiqqwibuqw"]), "vuiqqwibuqw");
    assert_eq!(completed(&tree, &["hello", "vuiqqwibuqw", "--f"]), "vuiqqwibuqw");
}

#[test]
fn test_guess_optional_arguments() {
    let tree = first_case(&Recorder::default());
    let hello = tree.find(&["hello"]).unwrap();

    assert!(hello.optional().iter().any(|arg| arg.canonical_name == "something"));
}

#[test]
fn test_guess_necessary_arguments() {
    let tree = first_case(&Recorder::default());
    let something = tree.find(&["something"]).unwrap();

    let necessary: Vec<_> = something
        .necessary()
        .iter()
        .map(|arg| arg.canonical_name.as_str())
        .collect();
    assert_eq!(necessary, vec!["a", "b"]);
}

#[test]
fn test_guess_flags() {
    let tree = first_case(&Recorder::default());
    let hello = tree.find(&["hello"]).unwrap();

    assert!(hello.flags().iter().any(|flag| flag.canonical_name == "--f"));
}

#[test]
fn test_help_at_each_level() {
    let recorder = Recorder::default();
    let tree = first_case(&recorder);

    assert!(tree.parse(&["--help"]).unwrap().is_help());
    assert!(tree.parse(&["hello", "--f", "--h"]).unwrap().is_help());
    assert_eq!(recorder.shown(), vec!["prog".to_string(), "prog hello".to_string()]);
}

#[test]
fn test_unknown_first_token_falls_through_to_root() {
    let tree = first_case(&Recorder::default());

    assert!(matches!(
        tree.parse(&["not-hello"]),
        Err(ParseError::TooManyArguments { .. })
    ));
}
