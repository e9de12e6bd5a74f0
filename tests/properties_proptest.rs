//! Property-based tests for parsing, formatting and validation
//!
//! Well-formed macros are generated from small pools of verbs, conditions and words so
//! that every generated text is valid input for the round-trip properties.

use proptest::prelude::*;
use slashmacro::slashmacro::validation::{check_brackets, is_balanced};
use slashmacro::{enhance, format, parse, validate, ErrorCategory, Macro, MacroLine};

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z][a-z]{0,7}"
}

fn argument() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..3).prop_map(|words| words.join(" "))
}

fn condition() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "mod:shift",
        "mod:ctrl",
        "nomod",
        "combat",
        "nocombat",
        "harm",
        "help",
        "nodead",
        "@focus",
        "@mouseover",
        "@player",
        "target=focus",
        "stance:1/2",
    ])
    .prop_map(str::to_string)
}

fn condition_set() -> impl Strategy<Value = String> {
    prop::collection::vec(condition(), 0..3).prop_map(|c| format!("[{}]", c.join(",")))
}

fn clause() -> impl Strategy<Value = String> {
    (prop::collection::vec(condition_set(), 0..3), argument()).prop_map(|(sets, arg)| {
        if sets.is_empty() {
            arg
        } else {
            format!("{} {}", sets.concat(), arg)
        }
    })
}

fn command_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["/cast", "/use", "/castsequence", "/target", "/focus"]),
        prop::collection::vec(clause(), 1..4),
    )
        .prop_map(|(verb, clauses)| format!("{} {}", verb, clauses.join("; ")))
}

fn macro_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => command_line(),
        1 => prop::option::of(word()).prop_map(|arg| match arg {
            Some(arg) => format!("#showtooltip {}", arg),
            None => "#showtooltip".to_string(),
        }),
        1 => argument().prop_map(|text| format!("; {}", text)),
    ]
}

fn macro_text() -> impl Strategy<Value = String> {
    prop::collection::vec(macro_line(), 1..5).prop_map(|lines| lines.join("\n"))
}

/// Same macro with extra spacing around brackets, separators and line ends, plus
/// blank lines between lines. Spacing between argument words is left alone since
/// arguments keep it.
fn spaced(text: &str, pad: usize) -> String {
    let padding = " ".repeat(pad);
    text.lines()
        .map(|line| {
            if line.starts_with('/') {
                line.replace('[', &format!("{}[", padding))
                    .replace(']', &format!("]{}", padding))
                    .replace(',', &format!("{},{}", padding, padding))
                    .replace(';', &format!("{};", padding))
            } else {
                line.to_string()
            }
        })
        .map(|line| format!("{}{}{}", padding, line, padding))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Remainders built from bracket, separator and condition characters, mostly malformed
fn malformed_command() -> impl Strategy<Value = String> {
    "[\\[\\];, :a@]{1,12}".prop_map(|tail| format!("/cast {}", tail))
}

/// Whether brackets match under a depth counter, ignoring how deep they go
fn brackets_match(line: &str) -> bool {
    let mut depth = 0usize;
    for ch in line.chars() {
        match ch {
            '[' => depth += 1,
            ']' if depth == 0 => return false,
            ']' => depth -= 1,
            _ => {}
        }
    }
    depth == 0
}

fn squeeze(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace() && *c != ';').collect()
}

fn argument_text(m: &Macro) -> String {
    m.lines
        .iter()
        .filter_map(|line| match line {
            MacroLine::Command(command) => Some(command),
            _ => None,
        })
        .flat_map(|command| command.clauses.iter().map(|c| c.argument.clone()))
        .collect()
}

proptest! {
    #[test]
    fn round_trip_preserves_structure(text in macro_text()) {
        let first = parse(&text).unwrap();
        let rendered = format(&first, false);
        let second = parse(&rendered).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn trim_is_idempotent(text in prop_oneof![macro_text(), malformed_command()]) {
        let once = format(&parse(&text).unwrap(), true);
        let twice = format(&parse(&once).unwrap(), true);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn incidental_whitespace_does_not_change_the_tree(text in macro_text(), pad in 0usize..3) {
        let tight = parse(&text).unwrap();
        let loose = parse(&spaced(&text, pad)).unwrap();
        prop_assert_eq!(format(&tight, false), format(&loose, false));
        prop_assert_eq!(validate(&tight), validate(&loose));
    }

    #[test]
    fn bracket_errors_match_balance(line in "/cast [\\[\\]a-z; ]{0,24}") {
        let errors = check_brackets(&line, 1);
        let unmatched = errors
            .iter()
            .filter(|e| e.starts_with("Unclosed") || e.starts_with("Unexpected"))
            .count();
        prop_assert_eq!(unmatched == 0, brackets_match(&line));
        prop_assert_eq!(errors.is_empty(), is_balanced(&line));
    }

    #[test]
    fn parser_is_total(text in "\\PC{0,80}") {
        if !text.is_empty() {
            prop_assert!(parse(&text).is_ok());
        }
    }

    #[test]
    fn unpaired_brackets_stay_in_the_arguments(
        tail in "[a-z ;\\[]{1,20}",
        close in any::<bool>(),
    ) {
        // with only one bracket kind there are no groups, so every character is text
        let tail = if close { tail.replace('[', "]") } else { tail };
        let m = parse(&format!("/cast {}", tail)).unwrap();
        prop_assert_eq!(squeeze(&argument_text(&m)), squeeze(&tail));
    }

    #[test]
    fn length_ceiling_is_monotone(len in 200usize..320) {
        let text = format!("/cast {}", "A".repeat(len - 6));
        let m = parse(&text).unwrap();
        let length = format(&m, false).chars().count();
        let errors = validate(&m);
        let limit_errors = errors.iter().filter(|e| e.contains("character limit")).count();
        let near = enhance(&errors, &text)
            .into_iter()
            .filter(|r| r.category == ErrorCategory::CharacterLimit && r.code.as_deref() == Some("near_limit"))
            .count();

        prop_assert_eq!(length, len);
        if length > 255 {
            prop_assert_eq!(limit_errors, 1);
            prop_assert_eq!(near, 0);
        } else if length >= 215 {
            prop_assert_eq!(limit_errors, 0);
            prop_assert_eq!(near, 1);
        } else {
            prop_assert_eq!(limit_errors, 0);
            prop_assert_eq!(near, 0);
        }
    }
}
