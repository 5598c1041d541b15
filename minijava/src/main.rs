use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use minijava::{CompileError, tokenize};

#[derive(Parser)]
#[command(name = "minijava")]
#[command(about = "Lexer and syntax checker for MiniJava", version)]
struct Cli {
    /// Подробный лог (debug), перекрывает RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Проверяет синтаксис файлов, останавливается на первой ошибке
    Parse {
        /// Исходники
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Печатает поток токенов
    Lex {
        /// Исходник
        input: PathBuf,
    },
}

#[derive(Error, Debug)]
#[error("{}: {error}", .path.display())]
struct FileError {
    path: PathBuf,
    #[source]
    error: CompileError,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Parse { inputs } => inputs.iter().try_for_each(|input| check_file(input)),
        Commands::Lex { input } => dump_tokens(&input),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Каждый файл получает свой лексер и парсер
fn check_file(path: &Path) -> Result<(), FileError> {
    tracing::info!(path = %path.display(), "parsing");

    let source = read_source(path)?;
    minijava::parse(&source).map_err(|error| FileError {
        path: path.to_path_buf(),
        error,
    })?;

    println!("{}: ok", path.display());
    Ok(())
}

fn dump_tokens(path: &Path) -> Result<(), FileError> {
    let source = read_source(path)?;
    let tokens = tokenize(&source).map_err(|error| FileError {
        path: path.to_path_buf(),
        error,
    })?;

    for token in &tokens {
        println!("{}", token);
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| FileError {
        path: path.to_path_buf(),
        error: e.into(),
    })
}
