//! # fibonaccier-cli
//!
//! Input resolution, report formatting, and stderr display helpers.

pub mod input;
pub mod output;
pub mod presenter;
pub mod ui;

pub use input::resolve_input;
pub use output::format_report;
pub use presenter::CLIResultPresenter;
