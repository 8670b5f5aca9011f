// ABOUTME: Runs AppleScript through the osascript command.
// ABOUTME: Also checks that an iTerm2 new enough for pane scripting is installed.

use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to run osascript: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("osascript failed: {0}")]
    Failed(String),

    #[error("iTerm2 version not supported or iTerm2 is not installed (found {0:?})")]
    Unsupported(String),
}

/// Executes a script and returns what it printed
pub trait ScriptRunner {
    fn run(&self, script: &str) -> Result<String, ScriptError>;
}

/// Pipes scripts into `osascript -`
#[derive(Debug, Clone, Default)]
pub struct Osascript;

impl ScriptRunner for Osascript {
    fn run(&self, script: &str) -> Result<String, ScriptError> {
        run_piped(Command::new("osascript").arg("-"), script)
    }
}

/// Feed `script` to the command's stdin and collect stdout.
/// A failed write still reaps the child; its stderr is preferred over the pipe error.
fn run_piped(command: &mut Command, script: &str) -> Result<String, ScriptError> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(script.as_bytes()),
        None => Ok(()),
    };

    let output = child.wait_with_output()?;
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if let Err(e) = written {
        if stderr.is_empty() {
            return Err(ScriptError::Spawn(e));
        }
        return Err(ScriptError::Failed(stderr));
    }
    if !output.status.success() {
        return Err(ScriptError::Failed(stderr));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

const VERSION_SCRIPT: &str = "get version of application \"iTerm\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItermVersion {
    pub major: u32,
    pub minor: u32,
}

impl ItermVersion {
    /// Read the leading `major.minor` of a version string such as `3.4.19`
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().splitn(3, '.');
        let major = leading_number(parts.next()?)?;
        let minor = leading_number(parts.next()?)?;
        Some(Self { major, minor })
    }

    /// Pane splitting by script needs something newer than 2.9
    pub fn is_supported(&self) -> bool {
        self.major > 2 || (self.major == 2 && self.minor > 9)
    }
}

fn leading_number(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

/// Ask iTerm2 for its version and fail unless it can split panes
pub fn check_iterm(runner: &dyn ScriptRunner) -> Result<ItermVersion, ScriptError> {
    let output = runner.run(VERSION_SCRIPT)?;
    let version = ItermVersion::parse(&output)
        .filter(ItermVersion::is_supported)
        .ok_or_else(|| ScriptError::Unsupported(output.trim().to_string()))?;
    tracing::info!("Found iTerm2 {}.{}", version.major, version.minor);
    Ok(version)
}
