//! Command-line interface for the repcode tools.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use repcode_communication::Printer;
use repcode_core::{build, parse, tokenize};

use crate::scan::{tabulate_codes, RepFile};

/// Codec and transport tools for the repcode machine-control dialect.
#[derive(Parser)]
#[command(name = "repcode", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump the classified lexical symbols of every line in a file.
    Tokens {
        /// Repcode file to tokenize.
        file: PathBuf,
    },

    /// Decode files and count how often each G/M code appears.
    Tabulate {
        /// Repcode files to scan.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Canonicalize commands and send them to a serial device, framed with
    /// sequence numbers and checksums.
    Send {
        /// Serial device to open.
        #[arg(long, default_value = "/dev/ttyACM0")]
        port: String,

        /// Baud rate for the serial connection.
        #[arg(long, default_value_t = 115_200)]
        baud: u32,

        /// Command lines, e.g. "G4 S2".
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tokens { file } => tokens(&file),
        Command::Tabulate { files } => tabulate(&files),
        Command::Send {
            port,
            baud,
            commands,
        } => send(&port, baud, &commands),
    }
}

fn tokens(file: &Path) -> Result<()> {
    let repfile = RepFile::new(file);
    for (lineno, line) in repfile.lines()? {
        println!("Line {}:", lineno);
        let symbols =
            tokenize(&line).with_context(|| format!("{}:{}", file.display(), lineno))?;
        for symbol in symbols {
            println!("  {}", symbol);
        }
    }
    Ok(())
}

fn tabulate(files: &[PathBuf]) -> Result<()> {
    let counts = tabulate_codes(files)?;
    for (code, count) in counts {
        println!("  {:<5}  {}", code, count);
    }
    Ok(())
}

fn send(port: &str, baud: u32, commands: &[String]) -> Result<()> {
    let mut printer = Printer::open(port, baud)?;
    for command in commands {
        // Round the command through the codec: catches typos before they
        // reach the device and normalizes word order and signs.
        let words = parse(command).with_context(|| format!("invalid command {:?}", command))?;
        let line = build(&words)?;
        let response = printer.send_command(&line)?;
        println!("{} => {}", line, response);
    }
    Ok(())
}
