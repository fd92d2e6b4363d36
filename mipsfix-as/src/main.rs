mod args;
mod error;

use std::io::{IsTerminal, Read, Write};
use std::process::{Command, Stdio};

use clap::Parser;

use mipsfix_core::constants::MACRO_INC_PREAMBLE;
use mipsfix_core::{process, ProcessorConfig};

use args::Cli;
use error::DriverError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DriverError> {
    let source = acquire_input(cli)?;

    let cfg = ProcessorConfig {
        sdata_limit: cli.sdata_limit(),
        expand_div: cli.expand_div,
    };

    let mut rewritten = String::new();
    if !cli.no_macro_inc {
        rewritten.push_str(MACRO_INC_PREAMBLE);
        rewritten.push('\n');
    }
    if cli.verbose {
        rewritten.push_str(&format!(
            "# mipsfix: sdata_limit={} expand_div={}\n",
            cfg.sdata_limit, cfg.expand_div
        ));
    }
    rewritten.push_str(&process(&source, &cfg)?);

    if cli.run_assembler {
        run_assembler(cli, &rewritten)
    } else {
        print!("{rewritten}");
        Ok(())
    }
}

/// Reads from stdin when it's not a terminal and non-empty; otherwise falls
/// back to the last positional argument as a file path, unless
/// `--force-stdin` demands stdin succeed or nothing (§6).
fn acquire_input(cli: &Cli) -> Result<String, DriverError> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buf = String::new();
        stdin
            .lock()
            .read_to_string(&mut buf)
            .map_err(|e| DriverError::InputUnavailable(e.to_string()))?;
        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    if cli.force_stdin {
        return Err(DriverError::InputUnavailable(
            "stdin was empty and --force-stdin was given".to_string(),
        ));
    }

    let Some(path) = cli.input_file() else {
        return Err(DriverError::InputUnavailable(
            "no stdin and no input file argument".to_string(),
        ));
    };

    eprintln!("mipsfix: stdin was empty, reading input from {path}");
    std::fs::read_to_string(path).map_err(|e| DriverError::InputUnavailable(format!("{path}: {e}")))
}

/// Pipes the rewritten stream into the real assembler, prepending `-G0`
/// (unless `--dont-force-G0`) and appending `-` to force stdin reading (§6).
fn run_assembler(cli: &Cli, rewritten: &str) -> Result<(), DriverError> {
    let mut assembler_args = Vec::new();
    if !cli.dont_force_g0 {
        assembler_args.push("-G0".to_string());
    }
    assembler_args.extend(cli.assembler_passthrough());
    assembler_args.push("-".to_string());

    eprintln!(
        "mipsfix: invoking {} {}",
        cli.gnu_as_path,
        assembler_args.join(" ")
    );

    let mut child = Command::new(&cli.gnu_as_path)
        .args(&assembler_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| DriverError::AssemblerFailed(format!("failed to spawn {}: {e}", cli.gnu_as_path)))?;

    child
        .stdin
        .take()
        .expect("stdin was requested as piped")
        .write_all(rewritten.as_bytes())
        .map_err(|e| DriverError::AssemblerFailed(e.to_string()))?;

    let finished = child
        .wait_with_output()
        .map_err(|e| DriverError::AssemblerFailed(e.to_string()))?;

    std::io::stdout().write_all(&finished.stdout).ok();
    std::io::stderr().write_all(&finished.stderr).ok();

    if finished.status.success() {
        Ok(())
    } else {
        Err(DriverError::AssemblerFailed(match finished.status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }))
    }
}
