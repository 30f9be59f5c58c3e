use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use arith_lex::{LexError, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "arith-lex", about = "Tokenize arithmetic expressions")]
struct Cli {
    /// Source file to tokenize (omit to read stdin)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report errors as plain text instead of a graphical diagnostic
    #[arg(long)]
    plain: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn read_source(cli: &Cli) -> Result<(String, String)> {
    match &cli.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read source file '{}'", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read source from stdin")?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for token in tokens {
                println!("{token}");
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(tokens).context("serialize tokens to JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn report_lex_error(err: LexError, plain: bool) {
    if plain {
        eprintln!("{}", err.render());
    } else {
        eprintln!("{:?}", miette::Report::new(err));
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (name, text) = read_source(&cli)?;
    // Trailing line endings are file framing, not part of the expression.
    let text = text.trim_end_matches(['\n', '\r']);

    match arith_lex::run(&name, text) {
        Ok(tokens) => print_tokens(&tokens, cli.format),
        Err(err) => {
            report_lex_error(err, cli.plain);
            bail!("scan failed");
        }
    }
}
