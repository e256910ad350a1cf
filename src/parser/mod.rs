/*
    This module reads grammar files: a block of rule lines, a blank line,
    then an example sentence
*/

pub mod lexer;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::grammar::*;
use crate::error_handling::*;
use itertools::Itertools;

// Separates the left hand symbol of a rule line from its words
pub const ARROW: &str = " => ";

// Separates the grammar from the example sentence
pub const SECTION_BREAK: &str = "\n\n";

#[derive(Debug)]
pub enum CompileErrorType {
    // The file is not made of exactly a grammar and a sentence
    MalformedSeparator(usize),
    // A rule line has no arrow
    MissingArrow,
    // A rule line has more than one arrow
    UnexpectedArrow,
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompileErrorType::FileError(a), CompileErrorType::FileError(b)) => a.kind() == b.kind(),
            (CompileErrorType::MalformedSeparator(a), CompileErrorType::MalformedSeparator(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other)
        }
    }
}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MalformedSeparator(sections) => write!(
                f,
                "Expected a grammar and a sentence separated by one blank line, found {} section(s)",
                sections
            ),
            CompileErrorType::MissingArrow => write!(f, "Expected `{}` after the symbol", ARROW.trim()),
            CompileErrorType::UnexpectedArrow => write!(f, "Unexpected second `{}` encountered", ARROW.trim()),
            CompileErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

fn io_error(error: std::io::Error, file: &Path) -> CompileError {
    CompileError {
        location: Location::whole_file(file),
        error: CompileErrorType::FileError(error)
    }
}

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

// Everything a grammar file holds
#[derive(Debug, PartialEq)]
pub struct Document {
    pub grammar: Grammar,
    pub sentence: String
}

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    words: Vec<String>,
    location: Location
}

// Splits file contents into the grammar text and the sentence text
pub fn split_sections<'a>(content: &'a str, path: &Path) -> LineResult<(&'a str, &'a str)> {
    let sections = content.split(SECTION_BREAK).collect_vec();

    match sections[..] {
        [grammar, sentence] => Ok((grammar, sentence)),
        _ => Err(CompileError {
            location: Location::whole_file(path),
            error: CompileErrorType::MalformedSeparator(sections.len())
        })
    }
}

// The left hand side is kept verbatim, only the right hand side is split
// into words
fn parse_line(line: &str) -> Result<(String, Vec<String>)> {
    match line.split(ARROW).collect_vec()[..] {
        [symbol, rewrite] => Ok((symbol.to_string(), lexer::tokenize(rewrite))),
        [_] => Err(CompileErrorType::MissingArrow),
        _ => Err(CompileErrorType::UnexpectedArrow)
    }
}

fn parse_located_line(line: &str, location: Location) -> LineResult<Rule> {
    parse_line(line)
        .map(|(symbol, words)| Rule { symbol, words, location: location.clone() })
        .map_err(|error| CompileError { location, error })
}

fn grammar_from_rules(rules: Vec<Rule>) -> Grammar {
    let mut grammar = Grammar::new();
    for rule in rules {
        grammar.add_rule(&rule.symbol, rule.words);
    }

    return grammar;
}

// Builds the grammar from the rule lines. Every malformed line is reported
// and no grammar is built if there is any
pub fn parse_grammar(text: &str, path: &Path) -> FileResult<Grammar> {
    let parsed_lines = text
        .lines()
        .enumerate()
        .map(|(num, line)| parse_located_line(line, Location::at_line(path, num + 1)));

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition(LineResult::is_ok);
    if errors.len() > 0 {
        return Err(errors.into_iter().filter_map(LineResult::err).collect_vec());
    }
    let rules_unwrapped = rules.into_iter().filter_map(LineResult::ok).collect_vec();

    return Ok(grammar_from_rules(rules_unwrapped));
}

// Windows line endings are read as plain newlines
pub fn parse_str(content: &str, path: &Path) -> FileResult<Document> {
    let content = content.replace("\r\n", "\n");
    let (grammar_text, sentence) = split_sections(&content, path).map_err(|e| vec![e])?;
    let grammar = parse_grammar(grammar_text, path)?;

    return Ok(Document {
        grammar,
        sentence: sentence.to_string()
    });
}

pub fn parse_file(path: &PathBuf) -> FileResult<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| vec![io_error(e, path)])?;

    return parse_str(&content, path);
}
