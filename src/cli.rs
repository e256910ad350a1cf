use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar and the example sentence
    #[arg(default_value = "grammar.txt")]
    pub file: PathBuf,

    /// Also print the tokens of the example sentence
    #[arg(short, long)]
    pub sentence: bool
}
