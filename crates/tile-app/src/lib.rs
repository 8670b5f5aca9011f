// ABOUTME: sshtile application: opens one iTerm2 pane per matching ssh host.
// ABOUTME: Wires settings, host selection, layout planning and script execution together.

pub mod app;
pub mod cli;
pub mod prompt;

pub use app::run;
pub use cli::Cli;
