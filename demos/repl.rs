//! Simple REPL (Read-Parse-Print Loop) for bsharp
//!
//! Usage: cargo run --example repl
//!
//! Set `RUST_LOG=bsharp=debug` to see parser diagnostics as they are recorded.

use anyhow::{Context, Result};
use bsharp::{Lexer, Parser};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">>> ";

#[derive(Default)]
struct Settings {
    show_tokens: bool,
    show_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("bsharp {} - type 'help' for commands", bsharp::VERSION);

    let mut settings = Settings::default();
    let stdin = io::stdin();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().context("flushing prompt")?;

        let mut input = String::new();
        if stdin.read_line(&mut input).context("reading input")? == 0 {
            break; // EOF
        }

        match input.trim() {
            "" => continue,
            "exit" | "quit" => break,
            "help" => {
                print_help();
                continue;
            }
            ":tokens" => {
                settings.show_tokens = !settings.show_tokens;
                println!("token dump {}", on_off(settings.show_tokens));
                continue;
            }
            ":json" => {
                settings.show_json = !settings.show_json;
                println!("json output {}", on_off(settings.show_json));
                continue;
            }
            _ => {}
        }

        run_line(&settings, &input)?;
    }

    Ok(())
}

fn run_line(settings: &Settings, line: &str) -> Result<()> {
    if settings.show_tokens {
        for token in Lexer::new(line).scan_tokens() {
            println!("  {}", token);
        }
    }

    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if settings.show_json {
        println!("{}", program.to_json()?);
    } else {
        print!("{}", program);
    }

    for diagnostic in parser.errors() {
        eprintln!("  ✗ {}", diagnostic);
    }

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  help     - Show this help");
    println!("  :tokens  - Toggle token dump");
    println!("  :json    - Toggle JSON tree output");
    println!("  exit     - Exit REPL");
    println!();
    println!("Examples:");
    println!("  (+ 1 2)");
    println!("  (print \"Value: %n\" (- (+ 1 2) 5))");
    println!("  [1 2 3]");
    println!("  (fn area [w h] (* w h))");
    println!();
}
