//! Command-line interfaces built from handler declarations.
//!
//! A handler declares its parameters and documentation once; this crate
//! compiles that declaration into an argument schema and dispatches token
//! lists against it:
//!
//! - [`Handler`]: a body plus its ordered [`Param`]s and doc text.
//! - [`SchemaBuilder`]: turns a handler into a [`CommandNode`]: necessary
//!   positionals, optional positionals and flags, each an [`ArgumentSpec`]
//!   with synonyms and a description taken from the doc comment.
//! - [`CommandTree`]: a root node, its subcommands and a [`Presenter`] for
//!   help. [`CommandTree::parse`] routes tokens to a node and resolves them
//!   into [`Bindings`] for the handler.
//!
//! Parameter names starting with `_` or `-` are flags; everything else is
//! positional. A parameter without a default must be supplied. Every node
//! answers to `--h`/`--help` by handing its [`HelpView`] to the presenter
//! instead of running the handler.
//!
//! # Example
//!
//! ```
//! use argent_core::*;
//!
//! let tree = CommandTree::new(
//!     Handler::new("alphabet", |args: &Bindings| {
//!         format!(
//!             "{}{}{}",
//!             args.text_or("first", "?"),
//!             args.text_or("second", "b"),
//!             args.text_or("third", "c"),
//!         )
//!     })
//!     .params(params![first, second = "b", third = "c"])
//!     .doc("Prints the first three letters of the alphabet.\n\nfirst: A cryptic glyph."),
//! )
//! .unwrap();
//!
//! assert_eq!(tree.parse(&["a"]).unwrap(), Dispatch::Completed("abc".to_string()));
//! assert_eq!(tree.parse(&["x", "y"]).unwrap(), Dispatch::Completed("xyc".to_string()));
//! assert!(matches!(
//!     tree.parse(&[] as &[&str]),
//!     Err(ParseError::TooFewArguments { .. })
//! ));
//! assert!(matches!(
//!     tree.parse(&["a", "b", "c", "d"]),
//!     Err(ParseError::TooManyArguments { .. })
//! ));
//! ```

mod dispatch;
mod doc;
mod error;
mod handler;
mod presenter;
mod schema;
mod tree;
mod types;
mod validate;

pub use doc::{DocComment, DocEntry};
pub use error::{ParseError, Result, SchemaError};
pub use handler::{Handler, HandlerFn};
pub use presenter::{ChildSummary, HelpView, Presenter, SilentPresenter};
pub use schema::{
    FlagConvention, HELP_FLAG, HELP_SYNONYMS, SchemaBuilder, help_flag, is_help, leading_separator,
};
pub use tree::{CommandNode, CommandTree, Dispatch};
pub use types::{ArgumentSpec, Bindings, Param, Value, dashed, underscored};
pub use validate::validate_arguments;
