use anyhow::{bail, Context, Result};
use caesar::caesar::{break_caesar, caesar_shift, normalize_shift};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

const EXIT_STATUS: &str = "Exit status:
 0  if OK,
 1  if error.";

#[derive(Parser, Debug)]
#[command(
    name = "caesar",
    author,
    version,
    about = "Encrypt/decrypt text using a Caesar cipher.",
    long_about = None,
    after_help = EXIT_STATUS
)]
struct Args {
    /// attempt to decrypt using English-language character frequency analysis;
    /// unreliable for small inputs; overrides -s, --shift
    #[arg(short, long)]
    brute_force: bool,

    /// read text from file (interpret TEXT as file path)
    #[arg(short, long, requires = "text")]
    file: bool,

    /// shift text by SIZE characters
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    shift: i32,

    /// report the shift that was applied on stderr
    #[arg(short, long)]
    verbose: bool,

    /// the text to encrypt/decrypt
    ///
    /// the program will read from stdin if no text is given.
    /// text starting with a hyphen must follow `--`, e.g. `caesar -s 3 -- "-5 apples"`
    text: Option<String>,
}

/// Whether -h/--help appears anywhere before a `--` terminator
fn wants_help(argv: &[OsString]) -> bool {
    argv.iter()
        .skip(1)
        .take_while(|arg| arg.as_os_str() != "--")
        .any(|arg| arg == "-h" || arg == "--help")
}

/// Drop a single trailing newline, along with the carriage return of a CRLF
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Work out the text to operate on, either the argument itself, the file it names or stdin
fn read_input(args: &Args, mut stdin: impl Read) -> Result<String> {
    let text = match (&args.text, args.file) {
        (Some(text), false) => return Ok(text.clone()),
        (Some(path), true) => {
            fs::read_to_string(path).with_context(|| format!("Could not read file {path:?}"))?
        }
        (None, true) => bail!("No file path was given.\nTry passing TEXT along with --file"),
        (None, false) => {
            let mut data = String::new();
            stdin
                .read_to_string(&mut data)
                .context("Reading input text from stdin")?;
            data
        }
    };

    Ok(strip_trailing_newline(text))
}

fn run(args: &Args, stdin: impl Read) -> Result<String> {
    let input = read_input(args, stdin)?;

    if args.brute_force {
        let candidate = break_caesar(&input);
        if args.verbose {
            eprintln!(
                "Decrypting using shift={} (encrypted with shift={}), score={:.5}",
                candidate.shift,
                candidate.encryption_shift(),
                candidate.score
            );
        }
        Ok(candidate.text)
    } else {
        if args.verbose {
            eprintln!(
                "Shifting by {} (normalized from {})",
                normalize_shift(args.shift),
                args.shift
            );
        }
        Ok(caesar_shift(&input, args.shift))
    }
}

fn write_output(out: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}").context("Writing output to stdout")?;
    stdout.flush()?;
    Ok(())
}

/// Status to exit with when argument parsing stops early
fn parse_exit_status(err: &clap::Error) -> u8 {
    match err.kind() {
        // --version is reported through the error path as well
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let argv: Vec<OsString> = env::args_os().collect();

    // help wins over every other argument, even invalid ones
    if wants_help(&argv) {
        return match Args::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_exit_status(&err));
        }
    };

    match run(&args, io::stdin().lock()).and_then(|out| write_output(&out)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("caesar: {err:#}");
            ExitCode::FAILURE
        }
    }
}
