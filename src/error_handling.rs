/*
    Diagnostics shared by every stage of the pipeline
*/

use std::path::{Path, PathBuf};
use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// Where a diagnostic points. Line 0 stands for the file as a whole
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Location {
    pub fn whole_file(file: &Path) -> Self {
        Location {
            file: file.to_path_buf(),
            line: 0
        }
    }

    pub fn at_line(file: &Path, line: usize) -> Self {
        Location {
            file: file.to_path_buf(),
            line
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

pub type Errors<T> = Vec<Error<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Oops;

    impl ErrorType for Oops {}

    impl Display for Oops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "oops")
        }
    }

    #[test]
    fn display_location() {
        let path = PathBuf::from("grammar.txt");
        assert_eq!(Location::whole_file(&path).to_string(), "grammar.txt");
        assert_eq!(Location::at_line(&path, 4).to_string(), "grammar.txt:4");
    }

    #[test]
    fn display_error() {
        let error = Error {
            location: Location::at_line(&PathBuf::from("grammar.txt"), 2),
            error: Oops
        };
        let text = error.to_string();

        assert!(text.contains("[grammar.txt:2]"));
        assert!(text.contains("oops"));
        assert!(text.ends_with("\x1b[0m"));
    }
}
