//! Token resolution at the terminal node of a parse.

use tracing::debug;

use crate::error::ParseError;
use crate::presenter::Presenter;
use crate::schema::is_help;
use crate::tree::{CommandNode, Dispatch};
use crate::types::{Bindings, Value};

/// Validates `tokens` against `node`, binds them and runs the handler.
///
/// Tokens starting with `-` are flags, everything else is positional. Flag
/// order is irrelevant; positionals bind in the node's positional order.
/// Checks run in a fixed order: unknown flags, then help, then positional
/// counts. The handler runs at most once and only when every check passes.
pub(crate) fn resolve<R, S: AsRef<str>>(
    node: &CommandNode<R>,
    tokens: &[S],
    presenter: &dyn Presenter,
) -> Result<Dispatch<R>, ParseError> {
    let (flag_tokens, positional_tokens): (Vec<&str>, Vec<&str>) = tokens
        .iter()
        .map(|token| token.as_ref())
        .partition(|token| token.starts_with('-'));

    debug!(
        command = %node.name(),
        flags = ?flag_tokens,
        positionals = ?positional_tokens,
        "Resolving tokens"
    );

    let mut help_requested = false;
    for token in &flag_tokens {
        match node.find_flag(token) {
            Some(flag) => help_requested |= is_help(flag),
            None => {
                return Err(ParseError::IllegalFlag {
                    command: node.name().to_string(),
                    flag: token.to_string(),
                });
            }
        }
    }

    if help_requested {
        presenter.present(&node.help_view());
        return Ok(Dispatch::Help);
    }

    let max = node.positionals().len();
    if positional_tokens.len() > max {
        return Err(ParseError::TooManyArguments {
            command: node.name().to_string(),
            max,
            given: positional_tokens.len(),
        });
    }

    let required = node.necessary().len();
    if positional_tokens.len() < required {
        return Err(ParseError::TooFewArguments {
            command: node.name().to_string(),
            required,
            given: positional_tokens.len(),
        });
    }

    let mut bindings = Bindings::new();
    for flag in node.flags().iter().filter(|flag| !is_help(flag)) {
        let present = flag_tokens.iter().any(|token| flag.matches(token));
        bindings.insert(&flag.bound_name, Value::Flag(present));
    }
    for (spec, token) in node.positionals().iter().zip(&positional_tokens) {
        bindings.insert(&spec.bound_name, Value::from(*token));
    }

    Ok(Dispatch::Completed(node.invoke(&bindings)))
}
