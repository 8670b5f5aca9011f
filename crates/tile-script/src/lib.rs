// ABOUTME: Drives iTerm2 through AppleScript.
// ABOUTME: Renders layout plans to scripts and runs them with osascript.

pub mod applescript;
pub mod osascript;

pub use applescript::{render, RenderError};
pub use osascript::{check_iterm, ItermVersion, Osascript, ScriptError, ScriptRunner};
