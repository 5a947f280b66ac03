//! Presenter that prints rendered help to stdout.

use std::io::Write;

use argent_core::{HelpView, Presenter};
use tracing::warn;

use crate::config::HelpConfig;
use crate::output::render;

/// Writes help for the resolved node to stdout in the configured format.
///
/// # Examples
///
/// ```
/// use argent_core::{Bindings, CommandTree, Handler};
/// use argent_help::{HelpConfig, TextPresenter};
///
/// let tree = CommandTree::new(Handler::new("simplest", |_: &Bindings| ()))
///     .unwrap()
///     .with_presenter(TextPresenter::new(HelpConfig::default().with_program_name("simplest")));
/// assert!(tree.parse(&["--help"]).unwrap().is_help());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextPresenter {
    config: HelpConfig,
}

impl TextPresenter {
    pub fn new(config: HelpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HelpConfig {
        &self.config
    }
}

impl Presenter for TextPresenter {
    fn present(&self, view: &HelpView<'_>) {
        let text = match render(view, &self.config) {
            Ok(text) => text,
            Err(err) => {
                warn!(command = %view.name, error = %err, "Failed to render help");
                return;
            }
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
            warn!(error = %err, "Failed to write help");
        }
    }
}
