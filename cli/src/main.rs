//! `fruitlookup`: print nutrition facts for one fruit.

use clap::Parser;

use fruit_cli::{logging, run, Cli, UreqTransport, EXIT_USAGE};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            // The exit code still reports the usage error if the terminal is gone.
            err.print().ok();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    match run(&cli, &UreqTransport) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
