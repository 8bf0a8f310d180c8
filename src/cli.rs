// src/cli.rs
use std::io::{self, BufWriter, Write};

use crate::config::{AppOptions, OutputFormat};
use crate::error::{Error, Result};
use crate::{csv, file, kml, track};

pub const HELP: &str = include_str!("cli_help.txt");
const PROGRAM: &str = "tracklog2kml";

pub enum Command {
    Help,
    Run(AppOptions),
}

/// Parse a full argv (program name first).
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| s!(PROGRAM));
    let usage = || Error::Usage { program: program.clone() };

    let mut opts = AppOptions::new("");
    let mut positional = Vec::new();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| Error::InvalidArg { flag: s!(flag), value: s!("<missing>") })
        };
        match a.as_str() {
            "--name" => opts.render.name = value("--name")?,
            "--line-color" => opts.render.line_color = value("--line-color")?.parse()?,
            "--fill-color" => opts.render.fill_color = value("--fill-color")?.parse()?,
            "--width" => {
                let v = value("--width")?;
                opts.render.width = v
                    .parse()
                    .map_err(|_| Error::InvalidArg { flag: s!("--width"), value: v })?;
            }
            "--no-extrude" => opts.render.extrude = false,
            "--no-tessellate" => opts.render.tessellate = false,
            "--format" => opts.format = value("--format")?.parse()?,
            "--include-headers" => opts.include_headers = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => return Err(usage()),
            other => positional.push(s!(other)),
        }
    }

    if positional.len() != 1 {
        return Err(usage());
    }
    opts.input = positional.remove(0).into();
    Ok(Command::Run(opts))
}

/// Load, extract and write the chosen output to `out`.
pub fn run_to<W: Write>(opts: &AppOptions, out: W) -> Result<()> {
    let doc = file::load_document(&opts.input)?;
    let points = track::extract(&doc);
    if points.is_empty() {
        logw!("no track points found in {}", opts.input.display());
    }

    match opts.format.delim() {
        None => kml::write_kml(out, &points, &opts.render)?,
        Some(sep) => csv::write_points(out, &points, sep, opts.include_headers)?,
    }
    Ok(())
}

/// Same as [`run_to`], on stdout.
pub fn run(opts: &AppOptions) -> Result<()> {
    let stdout = io::stdout();
    run_to(opts, BufWriter::new(stdout.lock()))
}
