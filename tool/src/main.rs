//! Command line front end for the ordsets containers.
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;

mod commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every distinct line once, in order of first occurrence
    Dedup { input: PathBuf },
    /// Print the distinct lines of INPUT that also occur in KNOWN
    Seen { known: PathBuf, input: PathBuf },
    /// Print the distinct lines of INPUT that do not occur in KNOWN
    Unseen { known: PathBuf, input: PathBuf },
    /// Print how often each whitespace separated word occurs, in ascending word order
    Count { input: PathBuf },
}

fn open(path: &Path) -> color_eyre::Result<BufReader<File>> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {path:?}"))?;
    Ok(BufReader::new(file))
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    ordsets_logger::setup();

    log::info!("{args:?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let written = match &args.command {
        Command::Dedup { input } => commands::dedup(open(input)?, &mut out)?,
        Command::Seen { known, input } => {
            let known = commands::load_known(open(known)?)?;
            commands::filter(&known, open(input)?, &mut out, true)?
        }
        Command::Unseen { known, input } => {
            let known = commands::load_known(open(known)?)?;
            commands::filter(&known, open(input)?, &mut out, false)?
        }
        Command::Count { input } => commands::count(open(input)?, &mut out)?,
    };

    out.flush().wrap_err("failed to write output")?;
    log::info!("wrote {written} lines");

    Ok(())
}
