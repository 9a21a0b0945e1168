use clap::Parser;

use comment_guard::EXIT_CONFIG_ERROR;
use comment_guard::cli::Cli;
use comment_guard::commands::{CheckContext, run_check};

fn main() {
    let cli = Cli::parse();

    let exit_code = match CheckContext::from_env() {
        Ok(ctx) => run_check(&cli, &ctx, std::io::stdout().lock()),
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}
