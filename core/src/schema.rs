//! Schema construction from handler declarations.

use tracing::debug;

use crate::doc::{DocComment, DocEntry};
use crate::error::Result;
use crate::handler::Handler;
use crate::tree::CommandNode;
use crate::types::{ArgumentSpec, Param};
use crate::validate::{validate_arguments, validate_name};

/// Decides from a declared parameter name whether it is a flag.
pub type FlagConvention = fn(&str) -> bool;

/// Canonical name of the built-in help flag.
pub const HELP_FLAG: &str = "--h";

/// Every spelling of the built-in help flag.
pub const HELP_SYNONYMS: [&str; 2] = [HELP_FLAG, "--help"];

const HELP_DESCRIPTION: &str = "Show this help message and exit";

/// Default convention: a leading underscore or dash marks a flag.
pub fn leading_separator(name: &str) -> bool {
    name.starts_with(['_', '-'])
}

/// Returns the built-in help flag present at every node.
pub fn help_flag() -> ArgumentSpec {
    ArgumentSpec::from_param(&Param::new(HELP_FLAG), true)
        .with_synonyms(HELP_SYNONYMS)
        .with_description(HELP_DESCRIPTION)
}

/// Returns `true` for the built-in help flag.
pub fn is_help(arg: &ArgumentSpec) -> bool {
    arg.is_flag && arg.canonical_name == HELP_FLAG
}

/// Compiles handler declarations into command nodes.
///
/// # Examples
///
/// ```
/// use argent_core::{params, Bindings, Handler, SchemaBuilder};
///
/// let node = SchemaBuilder::new()
///     .build(
///         Handler::new("alphabet", |_: &Bindings| ())
///             .params(params![first, second = "b", third = "c"])
///             .doc("Prints the first three letters of the alphabet.\n\nfirst: A glyph."),
///     )
///     .unwrap();
///
/// assert_eq!(node.description(), "Prints the first three letters of the alphabet.");
/// assert_eq!(node.necessary().len(), 1);
/// assert_eq!(node.optional().len(), 2);
/// assert_eq!(node.positionals()[0].description, "A glyph.");
/// assert_eq!(node.flags().len(), 1); // built-in help
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaBuilder {
    flag_convention: FlagConvention,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self {
            flag_convention: leading_separator,
        }
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the flag classification rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use argent_core::{Bindings, Handler, SchemaBuilder};
    ///
    /// let builder = SchemaBuilder::new().with_flag_convention(|name| name.starts_with("no_"));
    /// let node = builder
    ///     .build(Handler::new("fetch", |_: &Bindings| ()).param("no_cache").param("url"))
    ///     .unwrap();
    ///
    /// assert!(node.find_flag("--no-cache").is_some());
    /// assert_eq!(node.positionals()[0].canonical_name, "url");
    /// ```
    pub fn with_flag_convention(mut self, convention: FlagConvention) -> Self {
        self.flag_convention = convention;
        self
    }

    /// Classifies a declared parameter name.
    pub fn is_flag(&self, name: &str) -> bool {
        (self.flag_convention)(name)
    }

    /// Builds the argument list for `params`, in declaration order, using
    /// descriptions and synonyms from `doc`. The help flag is not included.
    pub fn arguments(&self, params: &[Param], doc: &DocComment) -> Vec<ArgumentSpec> {
        params
            .iter()
            .map(|param| {
                let arg = ArgumentSpec::from_param(param, self.is_flag(&param.name));
                match doc_entry(doc, param, &arg) {
                    Some(entry) => arg
                        .with_description(entry.description.clone())
                        .with_synonyms(&entry.synonyms),
                    None => arg,
                }
            })
            .collect()
    }

    /// Builds the root node for `handler`.
    pub fn build<R>(&self, handler: Handler<R>) -> Result<CommandNode<R>> {
        self.build_at(handler, Vec::new())
    }

    /// Builds a node whose parent path is `ancestors`.
    pub(crate) fn build_at<R>(
        &self,
        handler: Handler<R>,
        ancestors: Vec<String>,
    ) -> Result<CommandNode<R>> {
        validate_name(handler.name())?;

        let doc = handler
            .documentation()
            .map(DocComment::parse)
            .unwrap_or_default();
        let mut arguments = self.arguments(handler.parameters(), &doc);
        for entry in unused_entries(&doc, handler.parameters(), &arguments) {
            debug!(command = %handler.name(), name = %entry.canonical, "Ignoring doc entry");
        }
        arguments.push(help_flag());
        validate_arguments(&arguments)?;

        let (flags, positionals): (Vec<_>, Vec<_>) =
            arguments.into_iter().partition(|arg| arg.is_flag);
        let (necessary, optional): (Vec<_>, Vec<_>) =
            positionals.into_iter().partition(|arg| arg.is_necessary);

        debug!(
            command = %handler.name(),
            necessary = necessary.len(),
            optional = optional.len(),
            flags = flags.len(),
            "Built command schema"
        );

        Ok(CommandNode::from_parts(
            *self,
            handler,
            doc.summary().to_string(),
            ancestors,
            necessary,
            optional,
            flags,
        ))
    }
}

/// The doc entry documenting `param`, found by its declared name or its
/// command-line spelling.
fn doc_entry<'d>(
    doc: &'d DocComment,
    param: &Param,
    arg: &ArgumentSpec,
) -> Option<&'d DocEntry> {
    doc.lookup(&param.name).or_else(|| doc.lookup(&arg.canonical_name))
}

/// Entries of `doc` that document none of `params`.
fn unused_entries<'d>(
    doc: &'d DocComment,
    params: &[Param],
    arguments: &[ArgumentSpec],
) -> Vec<&'d DocEntry> {
    let used: Vec<&DocEntry> = params
        .iter()
        .zip(arguments)
        .filter_map(|(param, arg)| doc_entry(doc, param, arg))
        .collect();
    doc.entries()
        .iter()
        .filter(|entry| !used.iter().any(|found| std::ptr::eq(*found, *entry)))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::error::SchemaError;
    use crate::params;
    use crate::types::{Bindings, Value};

    use super::*;

    fn unit(name: &str) -> Handler<()> {
        Handler::new(name, |_: &Bindings| ())
    }

    #[test]
    fn test_necessary_arguments_precede_optional_ones() {
        let node = SchemaBuilder::new()
            .build(unit("mixed").params(params![a = "1", b, c = "3", d]))
            .unwrap();

        let order: Vec<_> = node
            .positionals()
            .iter()
            .map(|arg| arg.canonical_name.as_str())
            .collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
        assert_eq!(node.necessary().len(), 2);
    }

    #[test]
    fn test_flags_are_never_necessary() {
        let node = SchemaBuilder::new()
            .build(unit("xor").params(params![__a, __b]))
            .unwrap();

        assert!(node.positionals().is_empty());
        assert_eq!(node.flags().len(), 3);
        assert!(node.flags().iter().all(|flag| !flag.is_necessary));
        assert_eq!(node.flags()[0].default, Some(Value::Flag(false)));
    }

    #[test]
    fn test_doc_synonyms_and_descriptions_are_attached() {
        let node = SchemaBuilder::new()
            .build(unit("xor").params(params![__a, __b]).doc(
                "A boolean xor operation.\n\n--a, --i1: The first input.\n--b, --i2: The second input.",
            ))
            .unwrap();

        let a = node.find_flag("--i1").expect("--i1 resolves");
        assert_eq!(a.canonical_name, "--a");
        assert_eq!(a.description, "The first input.");
        assert_eq!(node.find_flag("--i2").unwrap().bound_name, "__b");
    }

    #[test]
    fn test_bare_name_does_not_document_a_flag() {
        let handler = unit("xor")
            .params(params![__a])
            .doc("xor\na: The first input.\n--a: Still the first input.");
        let doc = DocComment::parse(handler.documentation().unwrap());
        let arguments = SchemaBuilder::new().arguments(handler.parameters(), &doc);

        let unused = unused_entries(&doc, handler.parameters(), &arguments);
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].canonical, "a");
        assert_eq!(arguments[0].description, "Still the first input.");
    }

    #[test]
    fn test_every_entry_naming_a_parameter_is_used() {
        let handler = unit("greeter")
            .params(params![name, __loud])
            .doc("greeter\nname: Who.\n--loud, --shout: Louder.");
        let doc = DocComment::parse(handler.documentation().unwrap());
        let arguments = SchemaBuilder::new().arguments(handler.parameters(), &doc);

        assert!(unused_entries(&doc, handler.parameters(), &arguments).is_empty());
    }

    #[test]
    fn test_missing_doc_leaves_descriptions_empty() {
        let node = SchemaBuilder::new()
            .build(unit("positional").param("something"))
            .unwrap();

        assert_eq!(node.description(), "");
        assert_eq!(node.positionals()[0].description, "");
    }

    #[test]
    fn test_doc_synonym_colliding_with_other_argument_is_rejected() {
        let result = SchemaBuilder::new().build(
            unit("xor")
                .params(params![__a, __b])
                .doc("xor\n--a, --b: The first input."),
        );

        assert!(matches!(result, Err(SchemaError::SynonymConflict { .. })));
    }

    #[test]
    fn test_parameter_shadowing_help_is_rejected() {
        let result = SchemaBuilder::new().build(unit("loud").param("__help"));

        assert_eq!(
            result.err(),
            Some(SchemaError::SynonymConflict {
                synonym: "--help".to_string(),
                first: "--help".to_string(),
                second: HELP_FLAG.to_string(),
            })
        );
    }

    #[test]
    fn test_empty_handler_name_is_rejected() {
        let result = SchemaBuilder::new().build(unit(""));

        assert_eq!(result.err(), Some(SchemaError::EmptyName(String::new())));
    }
}
