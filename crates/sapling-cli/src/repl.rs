//! Interactive read-eval-print loop

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::render::{render, Mode, Options};

const PROMPT: &str = "sapling> ";

const HELP: &str = "\
Enter an arithmetic expression to evaluate it, e.g. `-(2 + 3) * 4 ^ 2 % 7`.

Commands:
  :ast <expr>     show the parsed tree
  :tokens <expr>  show the token sequence
  :json           toggle JSON output
  :help           show this help
  :quit           leave (also Ctrl-D)";

/// One line of REPL input, classified.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Eval(Mode, &'a str),
    ToggleJson,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn classify(line: &str) -> Command<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Eval(Mode::Value, line);
    };
    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    match name {
        "ast" => Command::Eval(Mode::Ast, arg.trim()),
        "tokens" => Command::Eval(Mode::Tokens, arg.trim()),
        "json" => Command::ToggleJson,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other),
    }
}

/// Run the loop until EOF, Ctrl-C or `:quit`.
pub fn run(mut opts: Options) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("Sapling {} (type :help for commands)", sapling::VERSION);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match classify(&line) {
            Command::Eval(mode, input) => match render(input, mode, &opts) {
                Ok(out) => println!("{}", out),
                Err(err) => eprintln!("error: {}", err),
            },
            Command::ToggleJson => {
                opts.json = !opts.json;
                println!("json output {}", if opts.json { "on" } else { "off" });
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(name) => eprintln!("unknown command `:{}` (try :help)", name),
        }
    }

    debug!("repl finished");
    Ok(())
}
