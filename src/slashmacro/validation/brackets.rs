//! Bracket structure checks
//!
//! These run on the raw text of a command line, so they work before (or without) a
//! syntax tree. Positions are 1-based character offsets within the line.
//!
//! Brackets are matched with a depth counter. A `[` met while another is open is
//! reported as nested, a `]` with nothing open as unexpected, and every `[` still open
//! at the end of the line as unclosed. A line has no unclosed/unexpected errors exactly
//! when its brackets match, and no errors at all exactly when they also never nest
//! (see [is_balanced]).

use super::reference::ReferenceTables;
use crate::slashmacro::lexing::{tokenize_line, Token};

/// Report unclosed, stray and nested brackets in one line
pub fn check_brackets(line: &str, line_number: usize) -> Vec<String> {
    let mut errors = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (i, ch) in line.chars().enumerate() {
        let position = i + 1;
        match ch {
            '[' => {
                if !open.is_empty() {
                    errors.push(format!(
                        "Nested bracket '[' at position {} on line {}",
                        position, line_number
                    ));
                }
                open.push(position);
            }
            ']' => {
                if open.pop().is_none() {
                    errors.push(format!(
                        "Unexpected ']' at position {} on line {}",
                        position, line_number
                    ));
                }
            }
            _ => {}
        }
    }

    for position in open {
        errors.push(format!(
            "Unclosed bracket '[' at position {} on line {}",
            position, line_number
        ));
    }

    errors
}

/// Report comma-joined conditionals written after a bracket group without brackets,
/// e.g. `/cast [mod:shift] @focus,harm Polymorph`
pub fn check_unbracketed_conditionals(
    line: &str,
    line_number: usize,
    tables: &ReferenceTables,
) -> Vec<String> {
    let tokens = tokenize_line(line);
    let mut errors = Vec::new();

    for (i, (token, _)) in tokens.iter().enumerate() {
        if !token.is_bracket_group() {
            continue;
        }
        let next = tokens[i + 1..]
            .iter()
            .map(|(t, _)| t)
            .find(|t| !t.is_whitespace());
        if let Some(Token::Word(word)) = next {
            if looks_like_conditional_list(word, tables) {
                errors.push(format!(
                    "Conditionals must be enclosed in brackets: '{}' on line {}",
                    word, line_number
                ));
            }
        }
    }

    errors
}

fn looks_like_conditional_list(word: &str, tables: &ReferenceTables) -> bool {
    if !word.contains(',') {
        return false;
    }
    if word.starts_with('@') {
        return true;
    }
    let first = word.split(',').next().unwrap_or_default();
    let key = first.split(':').next().unwrap_or_default();
    tables.is_known_key(key)
}

/// Whether the line's brackets are balanced with depth never above one
pub fn is_balanced(line: &str) -> bool {
    let mut open = false;
    for ch in line.chars() {
        match ch {
            '[' if open => return false,
            '[' => open = true,
            ']' if !open => return false,
            ']' => open = false,
            _ => {}
        }
    }
    !open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_line_has_no_errors() {
        assert!(check_brackets("/cast [mod:shift][@focus] Polymorph", 1).is_empty());
    }

    #[test]
    fn test_unclosed_bracket_position() {
        assert_eq!(
            check_brackets("/cast [mod:shift Polymorph", 1),
            vec!["Unclosed bracket '[' at position 7 on line 1".to_string()]
        );
    }

    #[test]
    fn test_stray_close_bracket() {
        assert_eq!(
            check_brackets("/cast mod] Polymorph", 2),
            vec!["Unexpected ']' at position 10 on line 2".to_string()]
        );
    }

    #[test]
    fn test_matched_nesting_reports_only_nesting() {
        assert_eq!(
            check_brackets("/cast [a[b]] X", 1),
            vec!["Nested bracket '[' at position 9 on line 1".to_string()]
        );
    }

    #[test]
    fn test_nested_bracket_sharing_a_close_is_unclosed() {
        assert_eq!(
            check_brackets("/cast [mod[shift] X", 1),
            vec![
                "Nested bracket '[' at position 11 on line 1".to_string(),
                "Unclosed bracket '[' at position 7 on line 1".to_string(),
            ]
        );
        assert!(!is_balanced("/cast [mod[shift] X"));
    }

    #[test]
    fn test_every_open_bracket_left_is_unclosed() {
        let errors = check_brackets("[[", 4);
        assert_eq!(
            errors,
            vec![
                "Nested bracket '[' at position 2 on line 4".to_string(),
                "Unclosed bracket '[' at position 1 on line 4".to_string(),
                "Unclosed bracket '[' at position 2 on line 4".to_string(),
            ]
        );
    }

    #[test]
    fn test_unbracketed_conditionals() {
        let tables = ReferenceTables::standard();
        assert_eq!(
            check_unbracketed_conditionals("/cast [mod:shift] @focus,harm Polymorph", 1, tables),
            vec!["Conditionals must be enclosed in brackets: '@focus,harm' on line 1".to_string()]
        );
        assert_eq!(
            check_unbracketed_conditionals("/cast [mod] harm,nodead Polymorph", 1, tables).len(),
            1
        );
        assert!(
            check_unbracketed_conditionals("/cast [mod] Polymorph, Rank 1", 1, tables).is_empty()
        );
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced("[a][b]"));
        assert!(is_balanced("no brackets"));
        assert!(!is_balanced("[a[b]]"));
        assert!(!is_balanced("[a"));
        assert!(!is_balanced("a]"));
    }
}
