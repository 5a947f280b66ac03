//! Error types for schema construction and dispatch.

use thiserror::Error;

/// Errors raised while registering a handler.
///
/// A failed registration never leaves a partially built node behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A handler or parameter name is empty once separators are stripped.
    #[error("name cannot be empty: {0:?}")]
    EmptyName(String),
    /// Two parameters normalize to the same canonical name.
    #[error("duplicate parameter: {0}")]
    DuplicateParameter(String),
    /// Two arguments of one node share a synonym.
    #[error("synonym {synonym} is claimed by both {first} and {second}")]
    SynonymConflict {
        synonym: String,
        first: String,
        second: String,
    },
    /// A subcommand with this name is already registered at the node.
    #[error("duplicate subcommand: {0}")]
    DuplicateSubcommand(String),
}

/// Errors raised while resolving tokens against a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A flag token matches none of the node's flags.
    #[error("illegal flag for {command}: {flag}")]
    IllegalFlag { command: String, flag: String },
    /// More positional tokens than the node has slots for.
    #[error("too many arguments for {command}: expected at most {max}, got {given}")]
    TooManyArguments {
        command: String,
        max: usize,
        given: usize,
    },
    /// Fewer positional tokens than the node's necessary arguments.
    #[error("not enough arguments for {command}: expected at least {required}, got {given}")]
    TooFewArguments {
        command: String,
        required: usize,
        given: usize,
    },
}

/// Convenience alias for registration results.
pub type Result<T> = std::result::Result<T, SchemaError>;
