//! `sapling` command-line front end
//!
//! Evaluates one expression given on the command line, or starts a REPL when
//! none is given.

mod render;
mod repl;

use anyhow::Result;
use clap::Parser as _;
use sapling::EvalContext;
use tracing::Level;

use render::{render, Mode, Options};

/// Evaluate arithmetic expressions.
#[derive(clap::Parser, Debug)]
#[command(name = "sapling", version, about)]
struct Cli {
    /// Expression to evaluate; starts an interactive session when omitted
    #[arg(allow_hyphen_values = true)]
    expr: Option<String>,

    /// Print the parsed tree instead of the value
    #[arg(long, conflicts_with = "tokens")]
    ast: bool,

    /// Print the token sequence instead of the value
    #[arg(long)]
    tokens: bool,

    /// Emit JSON
    #[arg(long)]
    json: bool,

    /// Log every evaluated node to stderr
    #[arg(long)]
    trace: bool,

    /// Maximum nesting depth to evaluate
    #[arg(long, default_value_t = EvalContext::default().max_depth)]
    max_depth: usize,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.ast {
            Mode::Ast
        } else if self.tokens {
            Mode::Tokens
        } else {
            Mode::Value
        }
    }

    fn options(&self) -> Options {
        Options {
            json: self.json,
            ctx: EvalContext::with_max_depth(self.max_depth).traced(self.trace),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.trace { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.expr.as_deref() {
        Some(input) => {
            println!("{}", render(input, cli.mode(), &cli.options())?);
            Ok(())
        }
        None => repl::run(cli.options()),
    }
}
