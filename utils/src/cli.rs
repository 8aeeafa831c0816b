//! Argument parsing and exit status conventions shared by the command line programs.
//!
//! Any failure, including bad arguments, exits with status 1. Only `--help` and `--version`
//! exit successfully without running.

use std::{ffi::OsString, process::ExitCode};

use clap::Parser;

pub const FAILURE_EXIT_CODE: u8 = 1;

/// Where a program writes its usage message when the arguments are wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UsageStream {
    Stdout,
    Stderr,
}

/// Result of parsing command line arguments.
#[derive(Debug)]
pub enum ParsedArgs<A> {
    /// Arguments were valid.
    Run(A),
    /// The program should print `message` and exit without running.
    Exit { message: String, failed: bool },
}

impl<A> ParsedArgs<A> {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ParsedArgs::Exit { failed: true, .. } => ExitCode::from(FAILURE_EXIT_CODE),
            _ => ExitCode::SUCCESS,
        }
    }
}

/// Parses `args` (including the program name) without exiting the process.
pub fn parse_args_from<A, I, T>(args: I) -> ParsedArgs<A>
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match A::try_parse_from(args) {
        Ok(parsed) => ParsedArgs::Run(parsed),
        Err(err) => ParsedArgs::Exit {
            message: err.render().to_string(),
            failed: err.use_stderr(),
        },
    }
}

/// Parses the process arguments, or prints the usage/help text and returns the exit code to
/// terminate with.
pub fn parse_args<A: Parser>(usage: UsageStream) -> Result<A, ExitCode> {
    let parsed = parse_args_from::<A, _, _>(std::env::args_os());
    let exit_code = parsed.exit_code();
    match parsed {
        ParsedArgs::Run(args) => Ok(args),
        ParsedArgs::Exit {
            message,
            failed: true,
        } if usage == UsageStream::Stderr => {
            eprint!("{message}");
            Err(exit_code)
        }
        ParsedArgs::Exit { message, .. } => {
            print!("{message}");
            Err(exit_code)
        }
    }
}
