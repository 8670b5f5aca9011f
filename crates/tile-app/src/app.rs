// ABOUTME: Orchestrates one sshtile invocation.
// ABOUTME: Selects and sorts hosts, then lists, dumps or opens them depending on flags.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tile_core::{sort_hosts, HostFilter, HostMap, HostName, Settings};
use tile_layout::LayoutPlan;
use tile_script::{check_iterm, ScriptRunner};

use crate::prompt;
use crate::Cli;

pub fn run(
    cli: &Cli,
    runner: &dyn ScriptRunner,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let hosts = load_hosts(cli, &settings)?;

    let filter = HostFilter::new(&cli.pattern)?;
    let selected = sort_hosts(filter.select(&hosts));
    if selected.is_empty() {
        writeln!(output, "There are no hosts that match the given filter.")?;
        return Ok(());
    }

    if cli.json {
        let plan = LayoutPlan::new(&selected)?;
        serde_json::to_writer_pretty(&mut *output, &plan)?;
        writeln!(output)?;
        return Ok(());
    }

    print_selection(&selected, output)?;

    if cli.debug {
        let script = render_script(&selected, &hosts, &settings)?;
        write!(output, "\n{script}")?;
        return Ok(());
    }

    if !cli.run {
        writeln!(output, "\nPass --run to open these panes.")?;
        return Ok(());
    }

    if settings.check_version {
        check_iterm(runner)?;
    }

    if settings.confirm && !cli.yes && !prompt::confirm(selected.len(), input, output)? {
        writeln!(output, "Aborted.")?;
        return Ok(());
    }

    let script = render_script(&selected, &hosts, &settings)?;
    let result = runner.run(&script).context("Failed to open panes in iTerm2")?;
    tracing::info!("Opened {} panes", selected.len());
    if !result.trim().is_empty() {
        writeln!(output, "{}", result.trim_end())?;
    }
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::load_or_default()),
    }
}

fn load_hosts(cli: &Cli, settings: &Settings) -> Result<HostMap> {
    let path = cli
        .ssh_config
        .clone()
        .or_else(|| settings.ssh_config_path())
        .context("Could not determine the ssh config path")?;
    Ok(HostMap::load(&path)?)
}

fn print_selection(selected: &[HostName], output: &mut dyn Write) -> Result<()> {
    writeln!(output, "Will open the following terminal panes:\n")?;
    for host in selected {
        writeln!(output, "- {host}")?;
    }
    Ok(())
}

fn render_script(selected: &[HostName], hosts: &HostMap, settings: &Settings) -> Result<String> {
    let plan = LayoutPlan::new(selected)?;
    Ok(tile_script::render(&plan, hosts, settings)?)
}
