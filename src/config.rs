use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sway-ws-tool")]
#[command(about = "Switch, move, rename and redistribute Sway/i3 workspaces", long_about = None)]
pub struct Config {
    /// Action to run: menu, switch, move, next-empty, move-next-empty,
    /// rename, clear-output or move-to-single-output
    #[arg(default_value = "menu")]
    pub action: String,

    /// Destination output (only for move-to-single-output)
    pub destination: Option<String>,

    /// Launcher program used for menus and text input (rofi compatible)
    #[arg(short, long, default_value = "rofi")]
    pub launcher: String,

    /// Log the commands instead of sending them to the window manager
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn parse() -> Self {
        <Config as Parser>::parse()
    }
}
