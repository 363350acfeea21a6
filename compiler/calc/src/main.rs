use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use calc::diagnostics::{render_snippet, Diagnostic};
use calc::{
    format_number, serialize_number, Calculator, ErrorKind, EvaluationError, EvaluationResult,
    EvaluationStep, LexPolicy, Location,
};
use clap::Parser;
use serde::{Serialize, Serializer};

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Evaluate arithmetic expressions with + - * / ^ and parentheses",
    long_about = "calc evaluates arithmetic expressions using the shunting-yard algorithm.\n\n\
        '^' is right-associative and binds tighter than '*' and '/', which bind\n\
        tighter than '+' and '-'. Division by zero yields Infinity or NaN.\n\n\
        EXAMPLES:\n\
        \n  calc '2 + 3 * 4'                 Print 14\n\
        \n  calc --steps '2 ^ 3 ^ 2'         Print 512 and each operation\n\
        \n  calc --json -f exprs.txt         One JSON object per line of the file\n\
        \n  echo '(1 + 2) / 3' | calc        Read expressions from stdin"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print every operator application as `a op b = result`
    #[arg(short, long)]
    steps: bool,

    /// Print the postfix (RPN) form of the expression
    #[arg(short, long)]
    postfix: bool,

    /// Print one JSON object per expression
    #[arg(long)]
    json: bool,

    /// Skip unrecognised characters instead of rejecting them
    #[arg(long)]
    lenient: bool,

    /// Read expressions from a file, one per line
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// The expression to evaluate; read from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    expression: &'a str,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_value"
    )]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postfix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<EvaluationStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

fn serialize_value<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize_number(value, serializer),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Serialize)]
struct JsonError {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

/// Exit status for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Status {
    Ok = 0,
    EvalFailed = 1,
    IoFailed = 2,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn evaluate_line<W: Write, E: Write>(
    cli: &Cli,
    calc: &Calculator<'_>,
    expression: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<Status> {
    let postfix = if cli.postfix {
        calc.postfix(expression).ok().map(|p| p.to_string())
    } else {
        None
    };
    let outcome = if cli.steps {
        calc.evaluate_with_steps(expression)
    } else {
        calc.evaluate(expression).map(|value| EvaluationResult {
            value,
            steps: Vec::new(),
        })
    };

    if cli.json {
        let report = match &outcome {
            Ok(result) => JsonReport {
                expression,
                value: Some(result.value),
                postfix,
                steps: result.steps.clone(),
                error: None,
            },
            Err(e) => JsonReport {
                expression,
                value: None,
                postfix: None,
                steps: Vec::new(),
                error: Some(json_error(e)),
            },
        };
        let json = serde_json::to_string(&report).map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
        return Ok(if outcome.is_ok() { Status::Ok } else { Status::EvalFailed });
    }

    match outcome {
        Ok(result) => {
            if let Some(rpn) = postfix {
                writeln!(out, "postfix: {rpn}")?;
            }
            writeln!(out, "{}", format_number(result.value))?;
            for step in &result.steps {
                writeln!(out, "{step}")?;
            }
            Ok(Status::Ok)
        }
        Err(e) => {
            writeln!(err, "{}", render_snippet(&Diagnostic::from_error(&e), expression))?;
            Ok(Status::EvalFailed)
        }
    }
}

fn json_error(error: &EvaluationError) -> JsonError {
    let diagnostic = Diagnostic::from_error(error);
    JsonError {
        kind: diagnostic.kind,
        message: diagnostic.message,
        location: diagnostic.location,
    }
}

/// Evaluate every non-blank line from `reader`
fn evaluate_lines<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    calc: &Calculator<'_>,
    reader: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<Status> {
    let mut status = Status::Ok;
    for line in reader.lines() {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        status = status.max(evaluate_line(cli, calc, expression, out, err)?);
    }
    Ok(status)
}

fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> i32 {
    let policy = if cli.lenient {
        LexPolicy::Lenient
    } else {
        LexPolicy::Strict
    };
    let calc = Calculator::default().with_policy(policy);

    let result = if let Some(expression) = &cli.expression {
        evaluate_line(cli, &calc, expression, out, err)
    } else if let Some(path) = &cli.file {
        match fs::File::open(path) {
            Ok(file) => evaluate_lines(cli, &calc, BufReader::new(file), out, err),
            Err(e) => {
                let _ = writeln!(err, "error: failed to read '{}': {e}", path.display());
                return Status::IoFailed as i32;
            }
        }
    } else {
        evaluate_lines(cli, &calc, io::stdin().lock(), out, err)
    };

    match result {
        Ok(status) => status as i32,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            Status::IoFailed as i32
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(cli.verbose)))
        .init();

    let code = run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    std::process::exit(code);
}
