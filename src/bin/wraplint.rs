//! Command-line interface for wraplint
//!
//! Checks one file (or STDIN) for badly wrapped bracketed groups.
//!
//! Usage:
//!   wraplint `<path>`                 - Check a file; `-` reads from STDIN
//!   wraplint `<path>` --format json   - Emit diagnostics as JSON
//!   wraplint `<path>` --format tree   - Print the bracket tree instead
//!   wraplint `<path>` --format tokens - Print the token stream as JSON
//!
//! Exit codes: 0 when clean, 1 when style diagnostics were found, 2 when
//! the input could not be read or checked at all.

use clap::{Arg, Command};
use std::io::Read;

fn main() {
    let matches = Command::new("wraplint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A checker for badly wrapped bracketed groups in Python source")
        .arg(
            Arg::new("path")
                .help("The file to read from. Use '-' to read from STDIN.")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text, json, tree, or tokens")
                .default_value("text"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches.get_one::<String>("format").expect("has a default");

    let source = read_source(path).unwrap_or_else(|err| {
        eprintln!("{}: {}", path, err);
        std::process::exit(2);
    });

    match format.as_str() {
        "text" => handle_check(path, &source, false),
        "json" => handle_check(path, &source, true),
        "tree" => handle_tree(path, &source),
        "tokens" => handle_tokens(path, &source),
        other => {
            eprintln!("Unknown format '{}'", other);
            eprintln!("Available formats: text, json, tree, tokens");
            std::process::exit(2);
        }
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Run the check and print diagnostics, as text or JSON.
fn handle_check(path: &str, source: &str, as_json: bool) {
    let diagnostics = wraplint::check_source(source).unwrap_or_else(|err| {
        eprintln!("{}: {}", path, err);
        std::process::exit(2);
    });

    if as_json {
        let formatted = serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|err| {
            eprintln!("Error formatting diagnostics: {}", err);
            std::process::exit(2);
        });
        println!("{}", formatted);
    } else {
        for diagnostic in &diagnostics {
            println!("{}:{}", path, diagnostic);
        }
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
}

/// Print the bracket tree for inspection.
fn handle_tree(path: &str, source: &str) {
    let tree = wraplint::parse_source(source).unwrap_or_else(|err| {
        eprintln!("{}: {}", path, err);
        std::process::exit(2);
    });

    print!("{}", wraplint::ast::to_treeviz_str(&tree));
}

/// Print the token stream as JSON.
fn handle_tokens(path: &str, source: &str) {
    let tokens = wraplint::lexer::tokenize(source).unwrap_or_else(|err| {
        eprintln!("{}: {}", path, err);
        std::process::exit(2);
    });

    let formatted = serde_json::to_string_pretty(&tokens).unwrap_or_else(|err| {
        eprintln!("Error formatting tokens: {}", err);
        std::process::exit(2);
    });
    println!("{}", formatted);
}
