use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// An expression to evaluate once, if not given, starts the interactive prompt instead
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Prints out the AST before every result
    #[arg(long)]
    pub inspect_tree: bool,

    /// Lists the known constants and functions, then exits
    #[arg(long)]
    pub list: bool,

    /// Only report errors, suppress warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
