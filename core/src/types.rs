//! Argument model shared by schema construction and dispatch.
//!
//! A handler declares an ordered list of [`Param`]s. The schema builder turns
//! each one into an [`ArgumentSpec`], and dispatch hands the handler a
//! [`Bindings`] map keyed by each argument's bound name.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value bound to an argument at dispatch time.
///
/// Values are never coerced: flags carry their presence, positionals carry
/// the raw token.
///
/// # Examples
///
/// ```
/// use argent_core::Value;
///
/// assert_eq!(Value::from(true).as_flag(), Some(true));
/// assert_eq!(Value::from("b").as_text(), Some("b"));
/// assert_eq!(Value::from("b").as_flag(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Presence of a boolean switch.
    Flag(bool),
    /// A positional token or a textual default.
    Text(String),
}

impl Value {
    /// Returns the boolean for [`Value::Flag`], `None` otherwise.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(on) => Some(*on),
            Self::Text(_) => None,
        }
    }

    /// Returns the text for [`Value::Text`], `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(on: bool) -> Self {
        Self::Flag(on)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(on) => write!(f, "{on}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Dashed form of `name`, with a `--` prefix for flags lacking a leading dash.
fn spelling(name: &str, is_flag: bool) -> String {
    let mut spelled = dashed(name);
    if is_flag && !spelled.starts_with('-') {
        spelled.insert_str(0, "--");
    }
    spelled
}

/// Returns `name` with every underscore replaced by a dash.
pub fn dashed(name: &str) -> String {
    name.replace('_', "-")
}

/// Returns `name` with every dash replaced by an underscore.
pub fn underscored(name: &str) -> String {
    name.replace('-', "_")
}

/// One declared parameter of a handler.
///
/// # Examples
///
/// ```
/// use argent_core::{Param, Value};
///
/// let first = Param::new("first");
/// assert!(first.default.is_none());
///
/// let second = Param::with_default("second", "b");
/// assert_eq!(second.default, Some(Value::from("b")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Declared name, e.g. `my_arg` or `__verbose`.
    pub name: String,
    /// Declared default, if any.
    pub default: Option<Value>,
}

impl Param {
    /// Creates a parameter without a default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Creates a parameter with a declared default.
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

/// Schema entry for one declared parameter.
///
/// Synonyms are stored in their dashed spelling with the canonical name
/// first. [`matches`](ArgumentSpec::matches) normalizes the candidate before
/// comparing, so the underscore spelling of every synonym matches too.
///
/// # Examples
///
/// ```
/// use argent_core::{ArgumentSpec, Param};
///
/// let flag = ArgumentSpec::from_param(&Param::new("__f"), true)
///     .with_synonyms(["--force"]);
/// assert_eq!(flag.canonical_name, "--f");
/// assert_eq!(flag.bound_name, "__f");
/// assert!(flag.matches("--f"));
/// assert!(flag.matches("__f"));
/// assert!(flag.matches("--force"));
/// assert!(!flag.is_necessary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Dashed name, e.g. `my-arg` or `--verbose`.
    pub canonical_name: String,
    /// Underscored name used as the binding key, e.g. `my_arg`.
    pub bound_name: String,
    /// Dashed spellings this argument answers to, canonical first.
    pub synonyms: Vec<String>,
    /// Boolean switch rather than a positional value.
    pub is_flag: bool,
    /// Default value. Flags always default to `false`.
    pub default: Option<Value>,
    /// Must be supplied on the command line.
    pub is_necessary: bool,
    /// Description from the handler's doc comment, empty if absent.
    pub description: String,
}

impl ArgumentSpec {
    /// Builds the spec for `param`, classified as a flag or positional by the
    /// caller. A flag whose name has no leading separator is spelled with
    /// `--` on the command line.
    pub fn from_param(param: &Param, is_flag: bool) -> Self {
        let canonical_name = spelling(&param.name, is_flag);
        let default = if is_flag {
            Some(Value::Flag(false))
        } else {
            param.default.clone()
        };
        Self {
            synonyms: vec![canonical_name.clone()],
            canonical_name,
            bound_name: underscored(&param.name),
            is_flag,
            is_necessary: !is_flag && default.is_none(),
            default,
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds alternate spellings, skipping ones already known.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for synonym in synonyms {
            let synonym = self.spelling(synonym.as_ref());
            if !self.synonyms.contains(&synonym) {
                self.synonyms.push(synonym);
            }
        }
        self
    }

    /// Returns `true` if the handler declared a default.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// How `name` is typed on the command line for this argument.
    pub fn spelling(&self, name: &str) -> String {
        spelling(name, self.is_flag)
    }

    /// Checks whether `token` spells one of this argument's synonyms.
    pub fn matches(&self, token: &str) -> bool {
        let token = dashed(token);
        self.synonyms.iter().any(|synonym| *synonym == token)
    }
}

/// Values resolved for one handler call, keyed by bound name.
///
/// Lookups accept either spelling of a name. Optional positionals that were
/// not supplied are absent rather than empty, so handlers apply their own
/// defaults through [`text_or`](Bindings::text_or).
///
/// # Examples
///
/// ```
/// use argent_core::{Bindings, Value};
///
/// let mut bindings = Bindings::new();
/// bindings.insert("__f", Value::Flag(true));
/// bindings.insert("first", Value::from("a"));
///
/// assert!(bindings.flag("--f"));
/// assert_eq!(bindings.text("first"), Some("a"));
/// assert_eq!(bindings.text_or("second", "b"), "b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
}

impl Bindings {
    /// Creates an empty binding map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under the underscored form of `name`.
    pub fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(underscored(name), value);
    }

    /// Returns the bound value, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(&underscored(name))
    }

    /// Returns `true` when `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the flag state, `false` when unbound or not a flag.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_flag).unwrap_or(false)
    }

    /// Returns the bound text, if any.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// Returns the bound text or `fallback`.
    pub fn text_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.text(name).unwrap_or(fallback)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(bound name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_without_default_is_necessary() {
        let arg = ArgumentSpec::from_param(&Param::new("my_arg"), false);

        assert_eq!(arg.canonical_name, "my-arg");
        assert_eq!(arg.bound_name, "my_arg");
        assert!(arg.is_necessary);
        assert!(!arg.has_default());
    }

    #[test]
    fn test_falsy_defaults_still_make_argument_optional() {
        let empty = ArgumentSpec::from_param(&Param::with_default("name", ""), false);
        let off = ArgumentSpec::from_param(&Param::with_default("enabled", false), false);

        assert!(!empty.is_necessary);
        assert!(!off.is_necessary);
        assert_eq!(empty.default, Some(Value::from("")));
    }

    #[test]
    fn test_flag_ignores_declared_default() {
        let flag = ArgumentSpec::from_param(&Param::with_default("__v", "loud"), true);

        assert_eq!(flag.default, Some(Value::Flag(false)));
        assert!(!flag.is_necessary);
    }

    #[test]
    fn test_synonyms_are_deduplicated_across_spellings() {
        let arg = ArgumentSpec::from_param(&Param::new("__a"), true)
            .with_synonyms(["--a", "__i1", "--i1"]);

        assert_eq!(arg.synonyms, vec!["--a".to_string(), "--i1".to_string()]);
        assert!(arg.matches("__i1"));
        assert!(!arg.matches("-a"));
    }

    #[test]
    fn test_flag_without_separator_is_spelled_with_dashes() {
        let arg = ArgumentSpec::from_param(&Param::new("no_cache"), true)
            .with_synonyms(["no-store"]);

        assert_eq!(arg.canonical_name, "--no-cache");
        assert_eq!(arg.bound_name, "no_cache");
        assert!(arg.matches("--no-store"));
        assert!(!arg.matches("no-store"));
    }

    #[test]
    fn test_bindings_serialize_as_plain_values() {
        let mut bindings = Bindings::new();
        bindings.insert("first", Value::from("a"));
        bindings.insert("--f", Value::Flag(true));

        let json = serde_json::to_value(&bindings).unwrap();
        assert_eq!(json, serde_json::json!({"__f": true, "first": "a"}));
    }
}
