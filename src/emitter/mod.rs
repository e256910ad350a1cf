/*
    This module prints grammars, one alternative per line
*/

use std::io::Write;

use itertools::Itertools;

use crate::grammar::*;

// Formats a single alternative as `symbol : word word ...`. An empty
// alternative keeps the space after the colon
pub fn format_alternative(symbol: &str, alternative: &Alternative) -> String {
    format!("{} : {}", symbol, alternative.iter().join(" "))
}

pub fn emit(grammar: &Grammar, out: &mut impl Write) -> std::io::Result<()> {
    for (symbol, rewrite) in &grammar.rules {
        for alternative in rewrite {
            writeln!(out, "{}", format_alternative(symbol, alternative))?;
        }
    }

    Ok(())
}

#[cfg(test)]
pub fn render(grammar: &Grammar) -> String {
    grammar.rules
        .iter()
        .flat_map(|(symbol, rewrite)| rewrite.iter().map(move |alternative| format_alternative(symbol, alternative)))
        .map(|line| line + "\n")
        .collect()
}

// Prints the words of the example sentence on a line of their own, after a
// blank line
pub fn emit_sentence(words: &[String], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Sentence : {}", words.iter().join(" "))
}
