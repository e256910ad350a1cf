/*
    This module is for storing and manipulating grammars
*/

use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Clone)]
pub enum Symbol {
    // A capitalized word taken from a rule line
    Word(String),
    // The synthetic rewrite of a terminal to itself, printed in quotes
    Literal(String),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Word(text) => write!(f, "{}", text),
            Symbol::Literal(text) => write!(f, "\"{}\"", text),
        }
    }
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

// Rules keep the order their symbol was first defined in, and terminals the
// order they were first used in, so that emitting is reproducible
#[derive(Debug, PartialEq, Default)]
pub struct Grammar {
    pub rules: IndexMap<String, Rewrite>,
    pub terminals: IndexSet<String>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends one alternative for `symbol` and records every word in it as
    // a terminal
    pub fn add_rule(&mut self, symbol: &str, words: Vec<String>) {
        self.terminals.extend(words.iter().cloned());

        let alternative = words.into_iter().map(Symbol::Word).collect();
        self.rules
            .entry(symbol.to_string())
            .or_default()
            .push(alternative);
    }

    // Gives every terminal a rule rewriting it to its quoted literal. If the
    // terminal already has rules the literal becomes one more alternative
    pub fn augment_terminals(&mut self) {
        for terminal in &self.terminals {
            self.rules
                .entry(terminal.clone())
                .or_default()
                .push(vec![Symbol::Literal(terminal.clone())]);
        }
    }
}
