use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quote-clip")]
#[command(version)]
#[command(about = "Copies a random line from a quote file to the clipboard", long_about = None)]
pub struct Cli {
    /// Quote file, one quote per line
    pub quote_file: Option<PathBuf>,

    /// Keep clipboard ownership until another program replaces the contents
    #[arg(short, long)]
    pub wait: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
