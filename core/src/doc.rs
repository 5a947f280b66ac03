//! Doc-comment mini-format.
//!
//! The first line of a handler's documentation is its summary. Any line of
//! the shape `name[, synonym]*: description` documents the argument `name`
//! and registers the extra names as synonyms:
//!
//! ```text
//! A boolean xor operation.
//!
//! --a, --i1: The first input.
//! --b, --i2: The second input.
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{dashed, underscored};

static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\w-]+(?:\s*,\s*[\w-]+)*)\s*:\s?(.*?)\s*$")
        .expect("static regex must compile")
});

/// One documented argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocEntry {
    /// First listed name.
    pub canonical: String,
    /// Remaining names, in listed order.
    pub synonyms: Vec<String>,
    /// Text after the colon, trimmed.
    pub description: String,
}

impl DocEntry {
    fn names_param(&self, param: &str) -> bool {
        underscored(&self.canonical) == underscored(param) || dashed(&self.canonical) == dashed(param)
    }
}

/// Parsed handler documentation.
///
/// # Examples
///
/// ```
/// use argent_core::DocComment;
///
/// let doc = DocComment::parse("Prints the alphabet.\n\nfirst: A cryptic glyph.\n");
/// assert_eq!(doc.summary(), "Prints the alphabet.");
/// assert_eq!(doc.lookup("first").unwrap().description, "A cryptic glyph.");
/// assert!(doc.lookup("second").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocComment {
    summary: String,
    entries: Vec<DocEntry>,
}

impl DocComment {
    /// Parses documentation text line by line. Lines that do not match the
    /// entry format are ignored.
    pub fn parse(text: &str) -> Self {
        let summary = text.lines().next().unwrap_or_default().trim().to_string();
        let entries = text.lines().filter_map(parse_entry).collect();
        Self { summary, entries }
    }

    /// First line of the documentation.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// All entry lines, in document order.
    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// Finds the entry whose canonical name spells `param`, in either its
    /// dashed or underscored form. The first matching line wins.
    pub fn lookup(&self, param: &str) -> Option<&DocEntry> {
        self.entries.iter().find(|entry| entry.names_param(param))
    }
}

fn parse_entry(line: &str) -> Option<DocEntry> {
    let caps = ENTRY_LINE.captures(line)?;
    let mut names = caps[1]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    let canonical = names.next()?;
    Some(DocEntry {
        canonical,
        synonyms: names.collect(),
        description: caps[2].trim().to_string(),
    })
}
