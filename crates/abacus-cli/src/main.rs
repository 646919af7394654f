use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use abacus_format::evaluate_expression;
use abacus_lexer::{Scanner, Symbol, Token};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Arithmetic expression evaluator with caret diagnostics")]
#[command(version)]
struct Cli {
    /// Log scanner and parser activity (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an expression and print the result or a diagnostic
    Eval {
        /// Expression; several words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Print the token stream of an expression
    Tokens {
        /// Expression; several words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate expressions from standard input, one per line
    Repl,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exit status when the expression itself is invalid.
const EXIT_DIAGNOSTIC: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Command::Eval { expression } => cmd_eval(&expression.join(" ")),
        Command::Tokens { expression, json } => cmd_tokens(&expression.join(" "), json),
        Command::Repl => cmd_repl(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn cmd_eval(source: &str) -> Result<ExitCode, CliError> {
    match evaluate_expression(source) {
        Ok(result) => {
            println!("{result}");
            Ok(ExitCode::SUCCESS)
        }
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            Ok(ExitCode::from(EXIT_DIAGNOSTIC))
        }
    }
}

fn cmd_tokens(source: &str, json: bool) -> Result<ExitCode, CliError> {
    let tokens = Scanner::scan(source);
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, &tokens)?;
        writeln!(stdout)?;
    } else {
        for line in token_table(&tokens) {
            writeln!(stdout, "{line}")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_repl() -> Result<ExitCode, CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut answer: Option<String> = None;
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']);
        match input.trim() {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        let source = continue_from(answer.as_deref(), input);
        log::debug!("repl evaluating {source:?}");
        match evaluate_expression(&source) {
            Ok(result) => {
                writeln!(stdout, "{}", transcript(&result, &source))?;
                answer = Some(result);
            }
            Err(diagnostic) => writeln!(stdout, "{diagnostic}")?,
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Like the keypad after `=`: a line starting with an operator that cannot
/// begin an expression (`× 2`, `!`) continues from the previous result.
fn continue_from(answer: Option<&str>, input: &str) -> String {
    let first = input.trim_start().chars().next().and_then(Symbol::from_char);
    let continues = matches!(
        first,
        Some(
            Symbol::Multiply
                | Symbol::Divide
                | Symbol::Exponent
                | Symbol::Percentage
                | Symbol::Factorial
        )
    );

    match answer {
        Some(answer) if continues => format!("{answer} {}", input.trim_start()),
        _ => input.to_string(),
    }
}

/// Result, `=`, and the evaluated expression on separate lines.
fn transcript(result: &str, source: &str) -> String {
    format!("{result}\n=\n{source}")
}

fn token_table(tokens: &[Token]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<8} {:>6} {:>6}  {:<10} {}",
        "SYMBOL", "COLUMN", "LENGTH", "VALUE", "MESSAGE"
    )];
    for token in tokens {
        lines.push(
            format!(
                "{:<8} {:>6} {:>6}  {:<10} {}",
                token.symbol.as_str(),
                token.column,
                token.length,
                token.value.as_deref().unwrap_or("-"),
                token.message
            )
            .trim_end()
            .to_string(),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_eval_joins_words() {
        let cli = Cli::try_parse_from(["abacus", "eval", "2", "+", "-3"]).unwrap();
        match cli.command {
            Command::Eval { expression } => assert_eq!(expression.join(" "), "2 + -3"),
            _ => panic!("expected eval"),
        }
    }

    #[test]
    fn test_tokens_json_flag() {
        let cli = Cli::try_parse_from(["abacus", "-v", "tokens", "--json", "1+1"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Tokens { json: true, .. }));
    }

    #[test]
    fn test_continue_from_answer() {
        assert_eq!(continue_from(Some("4"), "\u{00d7} 3"), "4 \u{00d7} 3");
        assert_eq!(continue_from(Some("5"), "!"), "5 !");
        assert_eq!(evaluate_expression(&continue_from(Some("5"), "!")), Ok("120".into()));
    }

    #[test]
    fn test_fresh_expression_ignores_answer() {
        assert_eq!(continue_from(Some("4"), "-3"), "-3");
        assert_eq!(continue_from(Some("4"), "(1)"), "(1)");
        assert_eq!(continue_from(None, "\u{00d7} 3"), "\u{00d7} 3");
    }

    #[test]
    fn test_transcript() {
        assert_eq!(transcript("4", "2 + 2"), "4\n=\n2 + 2");
    }

    #[test]
    fn test_token_table() {
        let lines = token_table(&Scanner::scan("1 + x"));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "number        0      1  1");
        assert_eq!(lines[3], "error         4      1  x          Unknown identifier.");
        assert_eq!(lines[4], "eof           5      0  -");
    }

    #[test]
    fn test_tokens_serialize() {
        let json = serde_json::to_value(Scanner::scan("2")).unwrap();
        assert_eq!(json[0]["symbol"], "number");
        assert_eq!(json[0]["value"], "2");
        assert_eq!(json[1]["symbol"], "eof");
        assert_eq!(json[1]["value"], serde_json::Value::Null);
    }
}
