mod cli;
mod repl;

use clap::Parser;
use env_logger::Builder;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    Builder::new().filter_level(cli.log_level()).init();

    if cli.list {
        repl::print_catalog();
        return Ok(());
    }

    match cli.expression {
        Some(expression) => repl::evaluate_and_print(&expression, cli.inspect_tree)?,
        None => repl::calculator_driver(cli.inspect_tree)?,
    }

    Ok(())
}
