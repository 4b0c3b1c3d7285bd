// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `abacus-ctl`: evaluates single requests against an in-process abacus
//! device and runs its self-test.
//!
//! ```text
//! abacus-ctl eval exp -2 3
//! abacus-ctl --max-sessions 2 selftest
//! RUST_LOG=abacus=debug abacus-ctl eval log 16 4
//! ```

mod selftest;

use abacus_core::{
    command::{Operation, OPERAND_CAPACITY},
    error::MathError,
};
use abacus_device::{
    config::{DeviceConfig, DEFAULT_MAX_SESSIONS},
    device::Device,
    error::DeviceError,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "abacus-ctl")]
#[command(about = "Checked integer arithmetic through a session-limited device", long_about = None)]
struct Cli {
    /// Maximum number of concurrently open sessions.
    #[arg(long, default_value_t = DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one request and print its result.
    Eval {
        /// Operation: `neg`, `add`, `div`, `exp`, `log`, a command name or a
        /// numeric id.
        operation: String,
        /// Input operands, in order.
        #[arg(allow_negative_numbers = true)]
        operands: Vec<i32>,
    },
    /// Run the conformance table and the session-limit probe.
    Selftest,
}

fn main() -> ExitCode {
    env_logger::init();
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("abacus-ctl: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let device = Device::new(DeviceConfig::new().max_sessions(cli.max_sessions));

    match cli.command {
        Command::Eval {
            operation,
            operands,
        } => match eval(&device, &operation, &operands)? {
            Ok(result) => {
                println!("{result}");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                let kind = e.math_error().map_or("ERROR", MathError::name);
                eprintln!("{operation} {operands:?}: {kind}: {e}");
                Ok(ExitCode::from(1))
            }
        },
        Command::Selftest => {
            let report = selftest::run(&device).context("self-test failed")?;
            log::debug!(target: abacus_device::LOG_TARGET, "{:?}", report);
            println!("All tests are passed.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validates the request locally, then serves it through a fresh session.
///
/// The outer error covers usage problems; the inner result is the device's
/// answer.
fn eval(
    device: &Device,
    operation: &str,
    operands: &[i32],
) -> Result<Result<i32, DeviceError>> {
    let op: Operation = operation
        .parse()
        .with_context(|| format!("unknown operation `{operation}`"))?;
    if operands.len() != op.arity() {
        bail!(
            "{} takes {} operand(s), got {}",
            op.mnemonic(),
            op.arity(),
            operands.len()
        );
    }

    let session = device.open().context("cannot open device")?;
    let mut buffer = [0i32; OPERAND_CAPACITY];
    buffer[..operands.len()].copy_from_slice(operands);

    Ok(session.ioctl(op.id(), &mut buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval_with_negative_operands() {
        let cli = Cli::try_parse_from(["abacus-ctl", "eval", "add", "2", "-5"]).unwrap();
        assert_eq!(cli.max_sessions, DEFAULT_MAX_SESSIONS);
        match cli.command {
            Command::Eval {
                operation,
                operands,
            } => {
                assert_eq!(operation, "add");
                assert_eq!(operands, vec![2, -5]);
            }
            Command::Selftest => panic!("expected eval"),
        }
    }

    #[test]
    fn test_parse_selftest_with_limit() {
        let cli = Cli::try_parse_from(["abacus-ctl", "--max-sessions", "3", "selftest"]).unwrap();
        assert_eq!(cli.max_sessions, 3);
        assert!(matches!(cli.command, Command::Selftest));
    }

    #[test]
    fn test_eval_outcomes() {
        let device = Device::default();
        assert_eq!(eval(&device, "div", &[200, -3]).unwrap(), Ok(-66));
        assert_eq!(
            eval(&device, "div", &[1, 0]).unwrap(),
            Err(DeviceError::InvalidArgument(MathError::ZeroDivision))
        );
        assert_eq!(eval(&device, "MATH_EXP", &[-2, 3]).unwrap(), Ok(-8));
        assert!(eval(&device, "neg", &[1, 2]).is_err());
        assert!(eval(&device, "sqrt", &[4]).is_err());
        assert_eq!(device.active_sessions(), 0);
    }
}
