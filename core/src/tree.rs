//! Command tree: nodes, subcommand registration and routing.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::dispatch;
use crate::error::{ParseError, Result, SchemaError};
use crate::handler::Handler;
use crate::presenter::{ChildSummary, HelpView, Presenter, SilentPresenter};
use crate::schema::{SchemaBuilder, is_help};
use crate::types::{ArgumentSpec, Bindings};

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<R> {
    /// The resolved handler ran and returned this value.
    Completed(R),
    /// A help flag was given; the presenter ran instead of the handler.
    Help,
}

impl<R> Dispatch<R> {
    /// Returns the handler's value, `None` for help.
    pub fn completed(self) -> Option<R> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Help => None,
        }
    }

    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help)
    }
}

/// One handler's schema plus its subcommands.
///
/// Built once by [`SchemaBuilder`]; only `children` changes afterwards, as
/// subcommands are registered. Parsing never mutates a node.
pub struct CommandNode<R> {
    builder: SchemaBuilder,
    handler: Handler<R>,
    description: String,
    ancestors: Vec<String>,
    positionals: Vec<ArgumentSpec>,
    necessary_count: usize,
    flags: Vec<ArgumentSpec>,
    children: BTreeMap<String, CommandNode<R>>,
}

impl<R> CommandNode<R> {
    pub(crate) fn from_parts(
        builder: SchemaBuilder,
        handler: Handler<R>,
        description: String,
        ancestors: Vec<String>,
        necessary: Vec<ArgumentSpec>,
        optional: Vec<ArgumentSpec>,
        flags: Vec<ArgumentSpec>,
    ) -> Self {
        let necessary_count = necessary.len();
        let mut positionals = necessary;
        positionals.extend(optional);
        Self {
            builder,
            handler,
            description,
            ancestors,
            positionals,
            necessary_count,
            flags,
            children: BTreeMap::new(),
        }
    }

    /// Routing name; the root's name is its handler's name.
    pub fn name(&self) -> &str {
        self.handler.name()
    }

    /// First line of the handler documentation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Full handler documentation, if any.
    pub fn doc(&self) -> Option<&str> {
        self.handler.documentation()
    }

    /// Names from the root down to this node's parent.
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Names from the root down to this node.
    pub fn path(&self) -> Vec<String> {
        let mut path = self.ancestors.clone();
        path.push(self.name().to_string());
        path
    }

    /// Positionals, necessary ones first, each group in declaration order.
    pub fn positionals(&self) -> &[ArgumentSpec] {
        &self.positionals
    }

    pub fn necessary(&self) -> &[ArgumentSpec] {
        &self.positionals[..self.necessary_count]
    }

    pub fn optional(&self) -> &[ArgumentSpec] {
        &self.positionals[self.necessary_count..]
    }

    /// Flags in declaration order, the built-in help flag last.
    pub fn flags(&self) -> &[ArgumentSpec] {
        &self.flags
    }

    /// The built-in help flag.
    pub fn help_flag(&self) -> Option<&ArgumentSpec> {
        self.flags.iter().rev().find(|flag| is_help(flag))
    }

    /// Finds the flag answering to `token`.
    pub fn find_flag(&self, token: &str) -> Option<&ArgumentSpec> {
        self.flags.iter().find(|flag| flag.matches(token))
    }

    pub fn children(&self) -> &BTreeMap<String, CommandNode<R>> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&CommandNode<R>> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut CommandNode<R>> {
        self.children.get_mut(name)
    }

    /// Follows a subcommand path from this node.
    pub fn find(&self, path: &[&str]) -> Option<&CommandNode<R>> {
        path.iter()
            .try_fold(self, |node, name| node.children.get(*name))
    }

    /// Registers `handler` as a subcommand named after it, using the builder
    /// that built this node.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateSubcommand`] if the name is taken, or
    /// any error from building the child's schema. The tree is unchanged on
    /// error.
    pub fn subcommand(&mut self, handler: Handler<R>) -> Result<&mut CommandNode<R>> {
        let name = handler.name().to_string();
        if self.children.contains_key(&name) {
            return Err(SchemaError::DuplicateSubcommand(name));
        }

        let child = self.builder.build_at(handler, self.path())?;
        debug!(parent = %self.name(), subcommand = %name, "Registered subcommand");
        Ok(self.children.entry(name).or_insert(child))
    }

    /// Routes `tokens` to the node named by their leading subcommand names
    /// and resolves the rest against it.
    ///
    /// Only the first remaining token is considered for routing at each
    /// level. A token that names no subcommand is an argument of the current
    /// node.
    pub fn parse<S: AsRef<str>>(
        &self,
        tokens: &[S],
        presenter: &dyn Presenter,
    ) -> std::result::Result<Dispatch<R>, ParseError> {
        if let Some((first, rest)) = tokens.split_first() {
            if let Some(child) = self.children.get(first.as_ref()) {
                debug!(from = %self.name(), to = %child.name(), "Routing to subcommand");
                return child.parse(rest, presenter);
            }
        }
        dispatch::resolve(self, tokens, presenter)
    }

    /// Read-only view for presenters.
    pub fn help_view(&self) -> HelpView<'_> {
        HelpView {
            name: self.name(),
            description: &self.description,
            ancestors: &self.ancestors,
            flags: &self.flags,
            necessary: self.necessary(),
            optional: self.optional(),
            children: self
                .children
                .iter()
                .map(|(name, child)| ChildSummary {
                    name,
                    description: child.description(),
                })
                .collect(),
        }
    }

    pub(crate) fn invoke(&self, bindings: &Bindings) -> R {
        self.handler.call(bindings)
    }
}

impl<R> fmt::Debug for CommandNode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name())
            .field("description", &self.description)
            .field("ancestors", &self.ancestors)
            .field("positionals", &self.positionals)
            .field("flags", &self.flags)
            .field("children", &self.children)
            .finish()
    }
}

/// A root command with its presenter.
///
/// # Examples
///
/// ```
/// use argent_core::{params, Bindings, CommandTree, Dispatch, Handler};
///
/// let mut tree = CommandTree::new(
///     Handler::new("first_case", |_: &Bindings| "Some stuff.".to_string())
///         .doc("A test parser using argent."),
/// )
/// .unwrap();
/// tree.subcommand(
///     Handler::new("hello", |args: &Bindings| {
///         if args.flag("__f") {
///             args.text_or("something", "hello").to_string()
///         } else {
///             "goodbye".to_string()
///         }
///     })
///     .params(params![__f, something = "hello"]),
/// )
/// .unwrap();
///
/// assert_eq!(tree.parse(&[] as &[&str]).unwrap(), Dispatch::Completed("Some stuff.".to_string()));
/// assert_eq!(tree.parse(&["hello", "--f"]).unwrap(), Dispatch::Completed("hello".to_string()));
/// assert!(tree.parse(&["hello", "--help"]).unwrap().is_help());
/// assert!(tree.parse(&["--n"]).is_err());
/// ```
pub struct CommandTree<R> {
    root: CommandNode<R>,
    presenter: Box<dyn Presenter + Send + Sync>,
}

impl<R> CommandTree<R> {
    /// Builds the root from `handler` with the default [`SchemaBuilder`] and a
    /// [`SilentPresenter`].
    pub fn new(handler: Handler<R>) -> Result<Self> {
        Self::with_builder(SchemaBuilder::default(), handler)
    }

    /// Builds the root from `handler` with a custom builder.
    pub fn with_builder(builder: SchemaBuilder, handler: Handler<R>) -> Result<Self> {
        Ok(Self {
            root: builder.build(handler)?,
            presenter: Box::new(SilentPresenter),
        })
    }

    /// Replaces the help presenter.
    pub fn with_presenter(mut self, presenter: impl Presenter + Send + Sync + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    pub fn root(&self) -> &CommandNode<R> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut CommandNode<R> {
        &mut self.root
    }

    /// Registers a subcommand of the root.
    pub fn subcommand(&mut self, handler: Handler<R>) -> Result<&mut CommandNode<R>> {
        self.root.subcommand(handler)
    }

    /// Follows a subcommand path from the root.
    pub fn find(&self, path: &[&str]) -> Option<&CommandNode<R>> {
        self.root.find(path)
    }

    /// Parses `tokens` from the root.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> std::result::Result<Dispatch<R>, ParseError> {
        self.root.parse(tokens, self.presenter.as_ref())
    }

    /// Parses the process arguments, program name excluded.
    pub fn command_line(&self) -> std::result::Result<Dispatch<R>, ParseError> {
        let tokens: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&tokens)
    }

    /// Shows help for the root.
    pub fn help(&self) {
        self.presenter.present(&self.root.help_view());
    }

    /// Shows help for the node at `path`. Returns `false` if there is none.
    pub fn help_for(&self, path: &[&str]) -> bool {
        match self.root.find(path) {
            Some(node) => {
                self.presenter.present(&node.help_view());
                true
            }
            None => false,
        }
    }
}

impl<R> fmt::Debug for CommandTree<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTree")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::params;

    use super::*;

    fn named(name: &'static str) -> Handler<String> {
        Handler::new(name, move |_: &Bindings| name.to_string())
    }

    #[test]
    fn test_subcommand_records_ancestry() {
        let mut tree = CommandTree::new(named("logic")).unwrap();
        tree.subcommand(named("gates"))
            .unwrap()
            .subcommand(named("and"))
            .unwrap();

        let and = tree.find(&["gates", "and"]).unwrap();
        assert_eq!(and.ancestors(), ["logic".to_string(), "gates".to_string()]);
        assert_eq!(and.path(), vec!["logic", "gates", "and"]);
    }

    #[test]
    fn test_duplicate_subcommand_is_rejected() {
        let mut tree = CommandTree::new(named("logic")).unwrap();
        tree.subcommand(named("and")).unwrap();

        let result = tree.subcommand(named("and"));
        assert_eq!(
            result.err(),
            Some(SchemaError::DuplicateSubcommand("and".to_string()))
        );
        assert_eq!(tree.root().children().len(), 1);
    }

    #[test]
    fn test_failed_registration_leaves_tree_unchanged() {
        let mut tree = CommandTree::new(named("logic")).unwrap();

        let result = tree.subcommand(named("bad").params(params![__a, __a]));
        assert!(result.is_err());
        assert!(tree.root().children().is_empty());
    }

    #[test]
    fn test_routing_recurses_through_levels() {
        let mut tree = CommandTree::new(named("logic")).unwrap();
        tree.subcommand(named("gates"))
            .unwrap()
            .subcommand(named("and"))
            .unwrap();

        let result = tree.parse(&["gates", "and"]).unwrap();
        assert_eq!(result, Dispatch::Completed("and".to_string()));
    }

    #[test]
    fn test_subcommand_name_deeper_in_tokens_is_not_routed() {
        let mut tree = CommandTree::new(named("root").param("x")).unwrap();
        tree.subcommand(named("hello")).unwrap();

        let result = tree.parse(&["value", "hello"]);
        assert!(matches!(result, Err(ParseError::TooManyArguments { .. })));
    }

    #[test]
    fn test_help_view_lists_children_in_name_order() {
        let mut tree = CommandTree::new(named("logic")).unwrap();
        tree.subcommand(named("or").doc("4071 quad 2-input OR gate."))
            .unwrap();
        tree.subcommand(named("and").doc("4081 quad 2-input AND gate."))
            .unwrap();

        let view = tree.root().help_view();
        let names: Vec<_> = view.children.iter().map(|child| child.name).collect();
        assert_eq!(names, vec!["and", "or"]);
        assert_eq!(view.children[1].description, "4071 quad 2-input OR gate.");
    }

    #[test]
    fn test_find_unknown_path() {
        let tree = CommandTree::new(named("logic")).unwrap();

        assert!(tree.find(&["missing"]).is_none());
        assert!(!tree.help_for(&["missing"]));
        assert!(tree.help_for(&[]));
    }
}
