// src/main.rs

//! `shcrypt` command-line front-end.
//!
//! ```text
//! shcrypt encrypt --file report.pdf --key passphrase.bin [--out report.pdf.shc]
//! shcrypt decrypt --file report.pdf.shc --key passphrase.bin [--out report.pdf]
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shcrypt::{run, Mode, ResourceRequest};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a file; default output is `<name>.shc` in the current directory
    Encrypt(FileArgs),
    /// Decrypt a `.shc` file; default output strips the suffix
    Decrypt(FileArgs),
}

#[derive(Args, Debug)]
struct FileArgs {
    /// File to read
    #[arg(long)]
    file: PathBuf,

    /// Key file; its full contents are hashed into the AES-256 key
    #[arg(long)]
    key: PathBuf,

    /// Output path (empty or omitted: derive from `--file`)
    #[arg(long)]
    out: Option<OsString>,
}

impl Command {
    fn into_request(self) -> ResourceRequest {
        let (args, mode) = match self {
            Command::Encrypt(args) => (args, Mode::Encrypt),
            Command::Decrypt(args) => (args, Mode::Decrypt),
        };
        ResourceRequest::new(args.file, args.key, mode).with_output(args.out.unwrap_or_default())
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let request = cli.command.into_request();
    let mode = request.mode;

    let written = run(&request).with_context(|| format!("{mode} failed"))?;

    println!("{mode}: {} bytes → {}", written.bytes_written, written.path.display());
    Ok(())
}
