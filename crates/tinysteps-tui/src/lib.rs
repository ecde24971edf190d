// Terminal UI implementation using ratatui

pub mod app;
pub mod collaborators;
pub mod help_ui;
pub mod runner;
pub mod ui;

pub use app::{App, BundleRow, Effect, InputMode};
pub use runner::run_tui;
