//! Rendering of tokens, trees and values for the terminal

use anyhow::Result;
use sapling::{evaluate, parse, tokenize, EvalContext};
use serde_json::json;

/// What to produce for an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Evaluate and print the value
    Value,
    /// Print the parsed tree
    Ast,
    /// Print the token sequence
    Tokens,
}

/// Output options shared by one-shot and REPL use.
#[derive(Debug, Clone)]
pub struct Options {
    /// Emit JSON instead of plain text
    pub json: bool,
    /// Evaluation settings
    pub ctx: EvalContext,
}

/// Run `input` through the pipeline up to `mode` and format the result.
pub fn render(input: &str, mode: Mode, opts: &Options) -> Result<String> {
    match mode {
        Mode::Tokens => {
            let tokens = tokenize(input)?;
            if opts.json {
                return Ok(serde_json::to_string(&tokens)?);
            }
            let parts: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
            Ok(parts.join(" "))
        }
        Mode::Ast => {
            let expr = parse(input)?;
            if opts.json {
                return Ok(serde_json::to_string_pretty(&expr)?);
            }
            Ok(expr.to_string())
        }
        Mode::Value => {
            let expr = parse(input)?;
            let value = evaluate(&expr, &opts.ctx)?;
            if opts.json {
                return Ok(json!({ "expr": expr.to_string(), "value": value }).to_string());
            }
            Ok(value.to_string())
        }
    }
}
