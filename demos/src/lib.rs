//! Shared setup for the demo programs.

use std::fmt::Display;
use std::process;

use argent_core::{CommandTree, Dispatch, Handler, SchemaError};
use argent_help::{HelpConfig, TextPresenter};
use tracing::{debug, warn};

/// Environment variable naming a YAML help configuration file.
pub const HELP_CONFIG_ENV: &str = "ARGENT_HELP_CONFIG";

/// Installs a stderr subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Help configuration from [`HELP_CONFIG_ENV`], or the defaults.
pub fn help_config() -> HelpConfig {
    let Some(path) = std::env::var_os(HELP_CONFIG_ENV) else {
        return HelpConfig::default();
    };
    match HelpConfig::load(&path) {
        Ok(config) => {
            debug!(path = %path.to_string_lossy(), "Loaded help config");
            config
        }
        Err(err) => {
            warn!(path = %path.to_string_lossy(), error = %err, "Ignoring help config");
            HelpConfig::default()
        }
    }
}

/// Builds a tree around `root` that prints help with a [`TextPresenter`].
pub fn tree<R>(root: Handler<R>) -> Result<CommandTree<R>, SchemaError> {
    Ok(CommandTree::new(root)?.with_presenter(TextPresenter::new(help_config())))
}

/// Parses the process arguments and hands a completed result to `report`.
///
/// Exits with status 1 on a parse error.
pub fn run<R>(tree: &CommandTree<R>, report: impl FnOnce(R)) {
    match tree.command_line() {
        Ok(Dispatch::Completed(value)) => report(value),
        Ok(Dispatch::Help) => {}
        Err(err) => exit_with(err),
    }
}

/// Prints `err` to stderr and exits with status 1.
pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {err}");
    process::exit(1);
}
