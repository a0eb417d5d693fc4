use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rill::interpreter::evaluator::core::Interpreter;

/// rill is a small, dynamically typed scripting language with C-like
/// syntax.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script to run. Without it, an interactive prompt starts.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // Usage errors exit 64; --help and --version exit cleanly.
            let code = if error.use_stderr() { 64 } else { 0 };
            let _ = error.print();
            return ExitCode::from(code);
        },
    };

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Runs a script file to completion.
///
/// Exit codes: 64 when the file cannot be read, 65 when the source has
/// lexer or parser diagnostics, 70 when evaluation raises a runtime error,
/// 0 otherwise.
fn run_file(path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read '{}': {error}", path.display());
            return ExitCode::from(64);
        },
    };

    let (program, errors) = rill::parse(&source);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        return ExitCode::from(65);
    }

    let mut interpreter = Interpreter::new();
    match interpreter.eval_program(&program) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(70)
        },
    }
}

/// Runs the interactive prompt until the input ends.
///
/// Every line is an independent little program, but the interpreter (and
/// with it the environment) persists across lines. Errors are printed and
/// the session continues.
fn run_prompt() -> ExitCode {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut interpreter = Interpreter::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::from(64);
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => run_line(&line, &mut interpreter),
            Err(_) => return ExitCode::from(64),
        }
    }
}

/// Evaluates one prompt line and prints its result and the environment.
fn run_line(line: &str, interpreter: &mut Interpreter) {
    let (program, errors) = rill::parse(line);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        return;
    }

    match interpreter.eval_program(&program) {
        Ok(value) => {
            println!("{program} -> {value}");
            print_environment(interpreter);
        },
        Err(error) => eprintln!("{error}"),
    }
}

/// Dumps the environment stack, innermost frame first.
fn print_environment(interpreter: &Interpreter) {
    for frame in interpreter.environment().frames().iter().rev() {
        println!("-----");
        for (name, cell) in frame {
            println!("{name} = {}", cell.borrow());
        }
    }
}
