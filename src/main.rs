use std::{fs, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use lexan::{
    display_error,
    lexer::{comments::strip_comments, lexer::tokenize},
    report::report::Report,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Lexical analyzer for a small C-like language.
#[derive(Parser, Debug)]
#[command(name = "lexan", version, about)]
struct Cli {
    /// Source file to analyze
    input: PathBuf,

    /// Write the report here instead of stdout (overwrites)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tokenize the text as-is, without stripping comments first
    #[arg(long)]
    keep_comments: bool,

    /// Only render the token list
    #[arg(long)]
    tokens_only: bool,
}

/// What a run ended with. Lexical errors are already rendered for the user.
enum Outcome {
    Written,
    Rejected(String),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Written) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected(rendered)) => {
            print!("{}", rendered);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let start = Instant::now();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))?;

    let source = if cli.keep_comments { source } else { strip_comments(&source) };

    let table = match tokenize(&source) {
        Ok(table) => table,
        Err(error) => {
            let file = cli.input.to_string_lossy();
            return Ok(Outcome::Rejected(display_error(&error, &source, &file)));
        }
    };

    info!(tokens = table.len(), elapsed = ?start.elapsed(), "analysis finished");

    let report = Report::new(&table);
    let rendered = if cli.tokens_only { report.token_list() } else { report.to_string() };

    match &cli.output {
        Some(path) => {
            write_report(path, &rendered)?;
            println!("Results saved to '{}'.", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(Outcome::Written)
}

fn write_report(path: &Path, rendered: &str) -> anyhow::Result<()> {
    fs::write(path, rendered).with_context(|| format!("could not write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{run, Cli, Outcome};

    fn cli(input: std::path::PathBuf, output: Option<std::path::PathBuf>) -> Cli {
        Cli {
            input,
            output,
            keep_comments: false,
            tokens_only: false,
        }
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.c");
        let output = dir.path().join("report.txt");
        fs::write(&input, "int main() {\n  return 0; // done\n}\n").unwrap();

        let outcome = run(&cli(input, Some(output.clone()))).unwrap();
        assert!(matches!(outcome, Outcome::Written));

        let report = fs::read_to_string(output).unwrap();
        assert!(report.contains("PR: 3"));
        assert!(report.contains("Total tokens: 9"));
        assert!(report.contains("[2,3] PR: return"));
    }

    #[test]
    fn test_run_rejects_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.c");
        let output = dir.path().join("report.txt");
        fs::write(&input, "int x;\nx = 1 @ 2;\n").unwrap();

        let outcome = run(&cli(input, Some(output.clone()))).unwrap();
        match outcome {
            Outcome::Rejected(rendered) => {
                assert!(rendered.starts_with("Error: UnknownToken `@` at line 2, column 7"));
            }
            Outcome::Written => panic!("expected the run to be rejected"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_run_keep_comments_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.c");
        let output = dir.path().join("tokens.txt");
        fs::write(&input, "/* head\n tail */ int x;\n").unwrap();

        let mut args = cli(input, Some(output.clone()));
        args.keep_comments = true;
        args.tokens_only = true;

        // the unterminated first line falls through to `/` and `*`
        let outcome = run(&args).unwrap();
        assert!(matches!(outcome, Outcome::Written));
        let tokens = fs::read_to_string(output).unwrap();
        assert!(tokens.starts_with("[1,1] OA: /\n[1,2] OA: *\n[1,4] ID: head\n"));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&cli(dir.path().join("missing.c"), None));
        assert!(result.is_err());
    }
}
