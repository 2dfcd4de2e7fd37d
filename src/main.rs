use std::path::PathBuf;

use clap::Parser;
use folio::cli::commands::Cli;
use folio::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let content = cli.content.as_ref().map(PathBuf::from);

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = folio::tui::run(content.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
