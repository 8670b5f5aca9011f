// ABOUTME: Renders a layout plan into an iTerm2 AppleScript.
// ABOUTME: Emits every split before any pane is given its connection command.

use std::fmt::Write;

use tile_core::{HostMap, Settings};
use tile_layout::{LayoutError, LayoutPlan, LayoutTree, Orientation, PaneBinding, SplitOp};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid layout plan: {0}")]
    Layout(#[from] LayoutError),

    #[error("No address known for host {0}")]
    UnknownHost(String),
}

/// Render the script that opens a new tab and connects each pane to its host
pub fn render(plan: &LayoutPlan, hosts: &HostMap, settings: &Settings) -> Result<String, RenderError> {
    let tree = LayoutTree::from_plan(plan)?;
    tracing::debug!("Pane arrangement: {:?}", tree.panes());

    let profile = match &settings.profile {
        Some(name) => format!("profile \"{}\"", escape(name)),
        None => "default profile".to_string(),
    };

    let mut script = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(script, "tell application \"iTerm\"");
    let _ = writeln!(script, "    activate");
    let _ = writeln!(script, "    if (count of windows) = 0 then");
    let _ = writeln!(script, "        create window with {profile}");
    let _ = writeln!(script, "    else");
    let _ = writeln!(script, "        tell current window");
    let _ = writeln!(script, "            create tab with {profile}");
    let _ = writeln!(script, "        end tell");
    let _ = writeln!(script, "    end if");
    let _ = writeln!(script, "    set pane_1 to (current session of current window)");

    for split in plan.splits() {
        write_split(&mut script, split);
    }
    for binding in plan.bindings() {
        let address = hosts
            .address(binding.host.as_str())
            .ok_or_else(|| RenderError::UnknownHost(binding.host.to_string()))?;
        let command = expand_command(&settings.command, binding.host.as_str(), address);
        write_binding(&mut script, binding, &command, settings.name_panes);
    }

    let _ = writeln!(script, "end tell");

    tracing::debug!(
        "Rendered script with {} splits and {} panes",
        plan.splits().len(),
        plan.pane_count()
    );
    Ok(script)
}

fn write_split(script: &mut String, split: &SplitOp) {
    let direction = match split.orientation {
        Orientation::Vertical => "vertically",
        Orientation::Horizontal => "horizontally",
    };
    let _ = writeln!(script, "    tell pane_{}", split.parent);
    let _ = writeln!(
        script,
        "        set pane_{} to (split {direction} with same profile)",
        split.child
    );
    let _ = writeln!(script, "    end tell");
}

fn write_binding(script: &mut String, binding: &PaneBinding, command: &str, name_pane: bool) {
    let _ = writeln!(script, "    tell pane_{}", binding.pane);
    let _ = writeln!(script, "        write text \"{}\"", escape(command));
    if name_pane {
        let _ = writeln!(script, "        set name to \"{}\"", escape(binding.host.as_str()));
    }
    let _ = writeln!(script, "    end tell");
}

/// Fill `{host}` and `{address}` in a command template
pub fn expand_command(template: &str, host: &str, address: &str) -> String {
    template.replace("{host}", host).replace("{address}", address)
}

/// Escape text for an AppleScript string literal
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
