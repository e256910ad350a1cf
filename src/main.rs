mod cli;
mod emitter;
mod error_handling;
mod grammar;
mod parser;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut document = match parser::parse_file(&cli.file) {
        Ok(document) => document,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };
    document.grammar.augment_terminals();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut written = emitter::emit(&document.grammar, &mut out);
    if cli.sentence {
        written = written.and_then(|_| {
            emitter::emit_sentence(&parser::lexer::tokenize(&document.sentence), &mut out)
        });
    }

    if let Err(e) = written.and_then(|_| out.flush()) {
        eprintln!("Could not write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
