// ABOUTME: Command-line arguments for sshtile.
// ABOUTME: Selects between listing, dumping the plan or script, and opening panes.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "sshtile",
    about = "Open one iTerm2 pane per ssh host matching a pattern, arranged in a grid",
    version
)]
pub struct Cli {
    /// Regular expression selecting hosts by alias (case-insensitive)
    pub pattern: String,

    /// Actually open the panes; without this matching hosts are only listed
    #[arg(short, long)]
    pub run: bool,

    /// Print the generated AppleScript instead of executing it
    #[arg(short, long)]
    pub debug: bool,

    /// Print the layout plan as JSON
    #[arg(long, conflicts_with_all = ["debug", "run"])]
    pub json: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// ssh client config to read hosts from
    #[arg(short = 'F', long = "ssh-config", value_name = "PATH")]
    pub ssh_config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["sshtile", "-r", "-y", "-F", "/tmp/cfg", "^web"]).unwrap();
        assert_eq!(cli.pattern, "^web");
        assert!(cli.run && cli.yes && !cli.debug);
        assert_eq!(cli.ssh_config, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn pattern_is_required() {
        assert!(Cli::try_parse_from(["sshtile", "--run"]).is_err());
    }

    #[test]
    fn json_conflicts_with_debug() {
        assert!(Cli::try_parse_from(["sshtile", "--json", "--debug", "web"]).is_err());
    }

    #[test]
    fn json_conflicts_with_run() {
        assert!(Cli::try_parse_from(["sshtile", "--json", "--run", "web"]).is_err());
        assert!(Cli::try_parse_from(["sshtile", "--json", "-r", "web"]).is_err());
    }
}
