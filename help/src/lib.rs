//! Help rendering for argent command trees.
//!
//! [`render`] turns a node's [`HelpView`](argent_core::HelpView) into text,
//! Markdown, JSON or YAML according to a [`HelpConfig`]. [`TextPresenter`]
//! plugs that into a [`CommandTree`](argent_core::CommandTree) and prints to
//! stdout.

pub mod config;
pub mod error;
pub mod output;
pub mod presenter;

pub use config::{HelpConfig, OutputFormat};
pub use error::{HelpError, Result};
pub use output::{program_name, render, usage_line};
pub use presenter::TextPresenter;
