//! Contract between dispatch and help rendering.
//!
//! Dispatch decides when help is shown; a [`Presenter`] decides how. The
//! presenter only ever sees a read-only [`HelpView`] of the resolved node.

use serde::Serialize;

use crate::types::ArgumentSpec;

/// Name and summary of a subcommand, as listed in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChildSummary<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Read-only view of a command node for help rendering.
#[derive(Debug, Clone, Serialize)]
pub struct HelpView<'a> {
    /// Node name. For the root this is the root handler's name.
    pub name: &'a str,
    /// First line of the handler documentation.
    pub description: &'a str,
    /// Names from the root down to the node's parent.
    pub ancestors: &'a [String],
    /// Flags, the built-in help flag last.
    pub flags: &'a [ArgumentSpec],
    /// Positionals without a default, in declaration order.
    pub necessary: &'a [ArgumentSpec],
    /// Positionals with a default, in declaration order.
    pub optional: &'a [ArgumentSpec],
    /// Subcommands in name order.
    pub children: Vec<ChildSummary<'a>>,
}

impl HelpView<'_> {
    /// Returns `true` for the root of a command tree.
    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Command path for a usage line, with the root spelled `program`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argent_core::{Bindings, Handler, SchemaBuilder};
    ///
    /// let mut root = SchemaBuilder::new()
    ///     .build(Handler::new("logic", |_: &Bindings| ()))
    ///     .unwrap();
    /// root.subcommand(Handler::new("and", |_: &Bindings| ())).unwrap();
    ///
    /// let child = root.child("and").unwrap();
    /// assert_eq!(child.help_view().usage_path("gates"), vec!["gates", "and"]);
    /// assert_eq!(root.help_view().usage_path("gates"), vec!["gates"]);
    /// ```
    pub fn usage_path<'b>(&'b self, program: &'b str) -> Vec<&'b str> {
        let mut path = vec![program];
        path.extend(self.ancestors.iter().skip(1).map(String::as_str));
        if !self.is_root() {
            path.push(self.name);
        }
        path
    }
}

/// Renders help for a node.
pub trait Presenter {
    fn present(&self, view: &HelpView<'_>);
}

/// Presenter that shows nothing.
///
/// Installed by default so that a tree can dispatch before a real presenter
/// is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn present(&self, _view: &HelpView<'_>) {}
}
