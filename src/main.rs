//! tinymark CLI - restricted Markdown dialect to HTML fragment converter

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // Simple usage: read from stdin or file
    let input = match read_input(&args) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("tinymark: {err}");
            return ExitCode::FAILURE;
        }
    };

    match tinymark::render_document(&input) {
        Ok(html) => {
            if io::stdout().write_all(html.as_bytes()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tinymark: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(args: &[String]) -> io::Result<String> {
    if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
