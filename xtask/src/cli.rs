use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtasks")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds the binary and installs it, with its manual page, under a prefix
    Install(InstallArgs),
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Name of the binary to install (defaults to "cumprod")
    #[arg(short, long, default_value = "cumprod")]
    pub name: String,

    /// Installation prefix; files go to PREFIX/bin and PREFIX/share/man/man1 (defaults to ~/.local)
    #[arg(short, long)]
    pub prefix: Option<String>,
}
