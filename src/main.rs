use std::io;
use std::path::PathBuf;
use std::process;

use checkverify::cmd::{CommandResponse, explain, verify};
use checkverify::io::Format;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "checkverify",
    version,
    about = "Verify the shape of suite input variables against declared checks"
)]
struct Cli {
    /// Log to stderr; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Verify an input document against a rules file.
    Verify(VerifyArgs),
    /// Print the checks a rules file declares.
    Explain(ExplainArgs),
}

#[derive(Debug, clap::Args)]
struct VerifyArgs {
    #[arg(long)]
    rules: PathBuf,

    #[arg(long, value_enum)]
    rules_format: Option<CliFormat>,

    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    input_format: Option<CliFormat>,

    /// Treat RFC 3339 strings in the input as dates.
    #[arg(long, default_value_t = false)]
    parse_dates: bool,
}

#[derive(Debug, clap::Args)]
struct ExplainArgs {
    #[arg(long)]
    rules: PathBuf,

    #[arg(long, value_enum)]
    rules_format: Option<CliFormat>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Json,
    Yaml,
    Toml,
}

impl From<CliFormat> for Format {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Json => Self::Json,
            CliFormat::Yaml => Self::Yaml,
            CliFormat::Toml => Self::Toml,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Verify(args) => run_verify(args),
        Commands::Explain(args) => run_explain(args),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_verify(args: VerifyArgs) -> i32 {
    let command_args = verify::VerifyCommandArgs {
        rules: args.rules,
        rules_format: args.rules_format.map(Into::into),
        input: args.input,
        input_format: args.input_format.map(Into::into),
        parse_dates: args.parse_dates,
    };
    tracing::info!(rules = %command_args.rules.display(), "verify");

    let stdin = io::stdin();
    let response = verify::run_with_stdin(&command_args, stdin.lock());
    emit_response("verify", response)
}

fn run_explain(args: ExplainArgs) -> i32 {
    let command_args = explain::ExplainCommandArgs {
        rules: args.rules,
        rules_format: args.rules_format.map(Into::into),
    };
    tracing::info!(rules = %command_args.rules.display(), "explain");

    emit_response("explain", explain::run(&command_args))
}

/// Reports go to stdout, errors to stderr.
fn emit_response(command: &'static str, response: CommandResponse) -> i32 {
    let emitted = match response.exit_code {
        0 | 2 => emit_json_stdout(&response.payload),
        3 | 1 => emit_json_stderr(&response.payload),
        other => {
            emit_error(
                "internal_error",
                format!("unexpected {command} exit code: {other}"),
                json!({"command": command}),
                1,
            );
            return 1;
        }
    };

    if emitted {
        response.exit_code
    } else {
        emit_error(
            "internal_error",
            format!("failed to serialize {command} response"),
            json!({"command": command}),
            1,
        );
        1
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
