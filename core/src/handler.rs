//! Handler declarations.
//!
//! A [`Handler`] pairs a body with the signature metadata the schema builder
//! reads: its name, its ordered parameters and its documentation.

use std::fmt;

use crate::types::{Bindings, Param, Value};

/// Boxed handler body.
pub type HandlerFn<R> = Box<dyn Fn(&Bindings) -> R + Send + Sync>;

/// Declares an ordered parameter list.
///
/// `name` declares a parameter without a default, `name = expr` one with a
/// default. Names with a leading underscore are flags under the default
/// convention.
///
/// # Examples
///
/// ```
/// use argent_core::{params, Param};
///
/// let params = params![__f, something = "hello"];
/// assert_eq!(params, vec![Param::new("__f"), Param::with_default("something", "hello")]);
/// ```
#[macro_export]
macro_rules! params {
    (@one $name:ident = $default:expr) => {
        $crate::Param::with_default(stringify!($name), $default)
    };
    (@one $name:ident) => {
        $crate::Param::new(stringify!($name))
    };
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($name:ident $(= $default:expr)?),+ $(,)?) => {
        vec![$($crate::params!(@one $name $(= $default)?)),+]
    };
}

/// A function registered as a command.
///
/// # Examples
///
/// ```
/// use argent_core::{params, Bindings, Handler};
///
/// let hello = Handler::new("hello", |args: &Bindings| {
///     if args.flag("__f") {
///         args.text_or("something", "hello").to_string()
///     } else {
///         "goodbye".to_string()
///     }
/// })
/// .params(params![__f, something = "hello"])
/// .doc("Return `something` if '--f' flag is given; else 'goodbye'");
///
/// assert_eq!(hello.name(), "hello");
/// assert_eq!(hello.parameters().len(), 2);
/// ```
pub struct Handler<R> {
    name: String,
    params: Vec<Param>,
    doc: Option<String>,
    body: HandlerFn<R>,
}

impl<R> Handler<R> {
    /// Creates a handler with no parameters and no documentation.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Bindings) -> R + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            doc: None,
            body: Box::new(body),
        }
    }

    /// Appends parameters in declaration order.
    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    /// Appends a parameter without a default.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param::new(name));
        self
    }

    /// Appends a parameter with a default.
    pub fn param_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param::with_default(name, default));
        self
    }

    /// Sets the documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Param] {
        &self.params
    }

    pub fn documentation(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub(crate) fn call(&self, bindings: &Bindings) -> R {
        (self.body)(bindings)
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_macro_keeps_declaration_order() {
        let params = params![first, second = "b", third = "c"];

        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(params[0].default.is_none());
        assert_eq!(params[2].default, Some(Value::from("c")));
    }

    #[test]
    fn test_params_macro_empty() {
        assert!(params![].is_empty());
    }

    #[test]
    fn test_builder_methods_append() {
        let handler = Handler::new("alphabet", |_: &Bindings| ())
            .param("first")
            .param_default("second", "b")
            .params(params![third = "c"]);

        assert_eq!(handler.parameters().len(), 3);
        assert!(handler.documentation().is_none());
    }

    #[test]
    fn test_call_passes_bindings() {
        let handler = Handler::new("echo", |args: &Bindings| args.text("x").map(String::from));
        let mut bindings = Bindings::new();
        bindings.insert("x", Value::from("y"));

        assert_eq!(handler.call(&bindings), Some("y".to_string()));
    }
}
