// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use tracklog2kml::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::parse_args(std::env::args()) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            eprint!("{}", cli::HELP);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    tracklog2kml::log::init(opts.verbose);
    cli::run(&opts).wrap_err_with(|| format!("converting {}", opts.input.display()))?;
    Ok(())
}
