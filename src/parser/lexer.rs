use itertools::{Itertools, PeekingNext};

// Takes one word starting at the current character, which must be uppercase.
// The word runs until the next uppercase letter or the end, without the
// whitespace that trails it
pub fn lex_word(text: &mut impl PeekingNext<Item = char>) -> String {
    let mut word = String::new();
    if let Some(first) = text.next() {
        word.push(first);
    }
    word.extend(text.peeking_take_while(|&c| !c.is_ascii_uppercase()));
    word.truncate(word.trim_end().len());

    word
}

// Splits capitalized text into its words: "NounPhrase" becomes "Noun" and
// "Phrase". Anything outside a word is dropped
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();

    let mut chars = text.chars().peekable();

    while let Some(c) = chars.peek() {
        if c.is_ascii_uppercase() {
            words.push(lex_word(&mut chars));
        } else {
            chars.next();
        }
    }

    return words;
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn lex_normal_word() {
        let lines = vec![
            "NounPhrase",
            "Det Noun",
            "Verb",
            "Phrase2Go",
            "Big dog  ",
            "The dog ran"
        ];
        // (result from the function, rest of the iterator)
        let answers = vec![
            ("Noun", "Phrase"),
            ("Det", "Noun"),
            ("Verb", ""),
            ("Phrase2", "Go"),
            ("Big dog", ""),
            ("The dog ran", "")
        ];

        for (line, (answer_word, answer_rest)) in zip(lines, answers) {
            let mut chars = line.chars().peekable();
            assert_eq!(lex_word(&mut chars), answer_word);
            assert_eq!(chars.collect::<String>(), answer_rest);
        }
    }

    #[test]
    fn tokenize_normal_text() {
        let lines = vec![
            "FooBarBaz",
            "xFoo",
            "NounPhraseVerbPhrase",
            "Det Noun",
            "  Det   Noun  ",
            "ABC",
            "The dog ran",
            "Big dog",
            "Det, Noun",
            "the Big dog\tRan\n"
        ];
        let answers = vec![
            vec!["Foo", "Bar", "Baz"],
            vec!["Foo"],
            vec!["Noun", "Phrase", "Verb", "Phrase"],
            vec!["Det", "Noun"],
            vec!["Det", "Noun"],
            vec!["A", "B", "C"],
            vec!["The dog ran"],
            vec!["Big dog"],
            vec!["Det,", "Noun"],
            vec!["Big dog", "Ran"]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(tokenize(line), answer);
        }
    }

    #[test]
    fn tokenize_without_words() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("no capitals here").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn tokenize_rebuilds_text() {
        let lines = vec![
            "xyzFooBar",
            "ABc",
            "Q",
            "lowerOnlyThenUPPER",
            "Ünicode",
            "The dog ran",
            "  Det   Noun  ",
            "a Big dog, The Cat"
        ];
        let without_whitespace = |text: &str| text.chars().filter(|c| !c.is_whitespace()).collect::<String>();

        for line in lines {
            let start = line.find(|c: char| c.is_ascii_uppercase()).unwrap_or(line.len());
            assert_eq!(without_whitespace(&tokenize(line).concat()), without_whitespace(&line[start..]));
        }
    }
}
