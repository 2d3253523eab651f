use anyhow::Result;
use clap::Parser;

/// The top-level command requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the full bootstrap pipeline against the working directory.
    Bootstrap,
    ShowVersion,
}

/// Parse CLI arguments into a high-level command. The bootstrap itself takes
/// no flags: it operates on the working directory's fixed layout.
pub fn parse() -> Result<Command> {
    let cli = Cli::parse();

    if cli.version {
        return Ok(Command::ShowVersion);
    }

    Ok(Command::Bootstrap)
}

#[derive(Parser, Debug)]
#[command(
    name = "bootstrap",
    about = "Validate the Python runtime, provision a virtualenv, and seed the config",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print version information and exit.
    #[arg(short = 'V', long = "version", action = clap::ArgAction::SetTrue)]
    version: bool,
}
