//! Human-readable titles from internal property names.

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
}

fn classify(c: char) -> CharClass {
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        // Caseless letters join the surrounding word
        CharClass::Lower
    } else {
        CharClass::Separator
    }
}

/// Split an identifier into words at separators, case changes and digit runs.
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let class = classify(c);
        if class == CharClass::Separator {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let prev_class = classify(prev);
            let next_class = chars.get(i + 1).map(|&n| classify(n));

            let boundary = match (prev_class, class) {
                (CharClass::Lower, CharClass::Upper) => true,
                (CharClass::Digit, CharClass::Upper | CharClass::Lower) => true,
                (CharClass::Upper | CharClass::Lower, CharClass::Digit) => true,
                // "HTTPServer": the S starts a new word
                (CharClass::Upper, CharClass::Upper) => next_class == Some(CharClass::Lower),
                _ => false,
            };

            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Start-case a name: `firstName` becomes `First Name`.
///
/// Only the first letter of each word is changed, so acronyms survive
/// (`HTTPServer` becomes `HTTP Server`).
pub fn start_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| upper_first(w))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(start_case("firstName"), "First Name");
        assert_eq!(start_case("maxTurnCount"), "Max Turn Count");
    }

    #[test]
    fn test_separators() {
        assert_eq!(start_case("first_name"), "First Name");
        assert_eq!(start_case("--foo-bar--"), "Foo Bar");
        assert_eq!(start_case("__id"), "Id");
        assert_eq!(start_case("dialog.actions#0"), "Dialog Actions 0");
    }

    #[test]
    fn test_acronyms_and_digits() {
        assert_eq!(start_case("HTTPServer"), "HTTP Server");
        assert_eq!(start_case("__FOO_BAR__"), "FOO BAR");
        assert_eq!(start_case("foo2bar"), "Foo 2 Bar");
        assert_eq!(start_case("item10"), "Item 10");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(start_case(""), "");
        assert_eq!(start_case("___"), "");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(start_case("élanVital"), "Élan Vital");
    }
}
