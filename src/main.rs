// decafc-parse: run the Decaf front end over a source file and dump the AST

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as ClapParser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use decaf_parser::{parse_with_options, EscapeMode, Lexer, ParseOptions};

#[derive(ClapParser)]
#[command(
    name = "decafc-parse",
    about = "Parse a Decaf source file and print its abstract syntax tree",
    version
)]
struct Cli {
    /// Decaf source file
    input: PathBuf,

    /// Print the token stream instead of the AST
    #[arg(long)]
    tokens: bool,

    /// Unescape only the first escape sequence of each string literal
    #[arg(long)]
    legacy_escapes: bool,

    /// Longest identifier kept intact, in bytes
    #[arg(long, value_name = "N")]
    max_identifier_len: Option<usize>,

    /// Deepest nesting of blocks and expressions accepted
    #[arg(long, value_name = "N")]
    max_nesting_depth: Option<usize>,

    /// Enable verbose logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let directives = log_directives(std::env::var("RUST_LOG").ok(), cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .init();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read '{}'", cli.input.display()))?;

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.tokens {
        for token in &tokens {
            println!("{:>4}  {:<16} {}", token.line, token.kind.to_string(), token.text);
        }
        return Ok(());
    }

    let mut options = ParseOptions::default();
    if cli.legacy_escapes {
        options = options.with_escape_mode(EscapeMode::Legacy);
    }
    if let Some(len) = cli.max_identifier_len {
        options = options.with_max_identifier_len(len);
    }
    if let Some(depth) = cli.max_nesting_depth {
        options = options.with_max_nesting_depth(depth);
    }

    match parse_with_options(tokens, options) {
        Ok(program) => {
            tracing::info!(
                globals = program.globals.len(),
                functions = program.functions.len(),
                "parsed {}",
                cli.input.display()
            );
            println!("{:#?}", program);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Filter directives: `RUST_LOG` when set and non-empty, else the crate's own level
fn log_directives(rust_log: Option<String>, verbose: bool) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "decaf_parser=trace".to_string(),
        _ => "decaf_parser=warn".to_string(),
    }
}
