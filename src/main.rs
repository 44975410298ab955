use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

/// Parse a script and print its syntax tree
#[derive(Parser)]
#[command(name = "scriptparse")]
#[command(about = "Parse a script and print its syntax tree")]
struct Cli {
    /// Input file path, or `-` for standard input
    file: PathBuf,

    /// Print the raw syntax tree instead of re-formatted source
    #[arg(long)]
    debug: bool,
}

fn read_source(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        return Ok(source);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let source = read_source(&cli.file)?;

    match scriptparse::parse(&source) {
        Ok(program) if cli.debug => println!("{program:#?}"),
        Ok(program) => print!("{program}"),
        Err(err) => {
            eprintln!("{}: {err}", cli.file.display());
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
