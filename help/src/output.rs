//! Help rendering for a node's [`HelpView`].

use std::path::Path;

use argent_core::{ArgumentSpec, HelpView};

use crate::config::{HelpConfig, OutputFormat};
use crate::error::Result;

/// Renders help for `view` in the configured format.
///
/// # Examples
///
/// ```
/// use argent_core::{params, Bindings, CommandTree, Handler};
/// use argent_help::{render, HelpConfig};
///
/// let tree = CommandTree::new(
///     Handler::new("alphabet", |_: &Bindings| ())
///         .params(params![first, second = "b"])
///         .doc("Prints letters.\n\nfirst: A glyph."),
/// )
/// .unwrap();
///
/// let config = HelpConfig::default().with_program_name("alphabet");
/// let text = render(&tree.root().help_view(), &config).unwrap();
/// assert!(text.starts_with("usage: alphabet [--h] first [second]\n"));
/// assert!(text.contains("necessary arguments:\n  first        A glyph.\n"));
/// ```
pub fn render(view: &HelpView<'_>, config: &HelpConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(to_text(view, config)),
        OutputFormat::Markdown => Ok(to_markdown(view, config)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
    }
}

/// Name shown for the root: the configured name, the executable's basename,
/// or the root handler's name, in that order.
pub fn program_name(view: &HelpView<'_>, config: &HelpConfig) -> String {
    if let Some(name) = &config.program_name {
        return name.clone();
    }
    std::env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| root_name(view).to_string())
}

fn root_name<'a>(view: &'a HelpView<'_>) -> &'a str {
    view.ancestors.first().map(String::as_str).unwrap_or(view.name)
}

/// Usage line: command path, then flags, necessary and optional arguments.
pub fn usage_line(view: &HelpView<'_>, program: &str) -> String {
    let mut parts: Vec<String> = view
        .usage_path(program)
        .into_iter()
        .map(String::from)
        .collect();
    parts.extend(view.flags.iter().map(|f| format!("[{}]", f.canonical_name)));
    parts.extend(view.necessary.iter().map(|a| a.canonical_name.clone()));
    parts.extend(view.optional.iter().map(|a| format!("[{}]", a.canonical_name)));
    format!("usage: {}", parts.join(" "))
}

fn to_text(view: &HelpView<'_>, config: &HelpConfig) -> String {
    let program = program_name(view, config);
    let mut out = usage_line(view, &program);
    out.push_str("\n\n");
    out.push_str(view.description);
    out.push('\n');

    if !view.flags.is_empty() {
        out.push_str("\noptional flags:\n");
        let rows: Vec<_> = view
            .flags
            .iter()
            .map(|f| (f.synonyms.join(", "), f.description.as_str()))
            .collect();
        push_rows(&mut out, &rows, config);
    }

    if !view.children.is_empty() {
        out.push_str("\nSubcommands:\n");
        let rows: Vec<_> = view
            .children
            .iter()
            .map(|c| (c.name.to_string(), c.description))
            .collect();
        push_rows(&mut out, &rows, config);
    }

    if !view.necessary.is_empty() {
        out.push_str("\nnecessary arguments:\n");
        push_rows(&mut out, &argument_rows(view.necessary), config);
    }

    if !view.optional.is_empty() {
        out.push_str("\noptional arguments:\n");
        push_rows(&mut out, &argument_rows(view.optional), config);
    }

    out
}

fn argument_rows(arguments: &[ArgumentSpec]) -> Vec<(String, &str)> {
    arguments
        .iter()
        .map(|a| (a.canonical_name.clone(), a.description.as_str()))
        .collect()
}

/// Two-column rows: the name padded to `name_width`, the description wrapped
/// at `description_width`. A name that does not fit gets a line of its own.
fn push_rows(out: &mut String, rows: &[(String, &str)], config: &HelpConfig) {
    let indent = " ".repeat(config.indent);
    let gap = " ".repeat(config.indent + config.name_width);

    for (name, description) in rows {
        let lines = wrap(description, config.description_width);
        let mut lines = lines.iter();

        if name.len() < config.name_width {
            let first = lines.next().map(String::as_str).unwrap_or_default();
            let row = format!("{indent}{name:<width$}{first}", width = config.name_width);
            out.push_str(row.trim_end());
        } else {
            out.push_str(&format!("{indent}{name}"));
        }
        out.push('\n');

        for line in lines {
            out.push_str(&format!("{gap}{line}\n"));
        }
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn to_markdown(view: &HelpView<'_>, config: &HelpConfig) -> String {
    let program = program_name(view, config);
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", view.usage_path(&program).join(" ")));
    if !view.description.is_empty() {
        out.push_str(&format!("{}\n\n", view.description));
    }
    out.push_str(&format!("```text\n{}\n```\n\n", usage_line(view, &program)));

    if !view.flags.is_empty() {
        out.push_str("## Flags\n\n");
        out.push_str("| Flag | Description |\n");
        out.push_str("|------|-------------|\n");
        for flag in view.flags {
            let names = flag
                .synonyms
                .iter()
                .map(|s| format!("`{s}`"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("| {names} | {} |\n", flag.description));
        }
        out.push('\n');
    }

    if !view.necessary.is_empty() || !view.optional.is_empty() {
        out.push_str("## Arguments\n\n");
        out.push_str("| Argument | Required | Default | Description |\n");
        out.push_str("|----------|----------|---------|-------------|\n");
        for arg in view.necessary.iter().chain(view.optional) {
            let required = if arg.is_necessary { "yes" } else { "no" };
            let default = arg
                .default
                .as_ref()
                .map(|value| format!("`{value}`"))
                .unwrap_or_default();
            out.push_str(&format!(
                "| `{}` | {required} | {default} | {} |\n",
                arg.canonical_name, arg.description
            ));
        }
        out.push('\n');
    }

    if !view.children.is_empty() {
        out.push_str("## Subcommands\n\n");
        out.push_str("| Subcommand | Description |\n");
        out.push_str("|------------|-------------|\n");
        for child in &view.children {
            out.push_str(&format!("| `{}` | {} |\n", child.name, child.description));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five", 9);

        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let lines = wrap("supercalifragilistic yes", 5);

        assert_eq!(lines, vec!["supercalifragilistic", "yes"]);
    }

    #[test]
    fn test_push_rows_puts_long_names_on_their_own_line() {
        let config = HelpConfig::default();
        let mut out = String::new();
        push_rows(
            &mut out,
            &[("--a-rather-long-flag".to_string(), "desc")],
            &config,
        );

        assert_eq!(out, "  --a-rather-long-flag\n               desc\n");
    }

    #[test]
    fn test_push_rows_without_description() {
        let config = HelpConfig::default();
        let mut out = String::new();
        push_rows(&mut out, &[("first".to_string(), "")], &config);

        assert_eq!(out, "  first\n");
    }
}
