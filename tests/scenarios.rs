//! End-to-end scenarios through the public engine surface

use rstest::rstest;
use slashmacro::slashmacro::testing::{assert_macro, sample, valid_samples, SAMPLES};
use slashmacro::{
    allowed_values_for, enhance, format, known_commands, known_conditional_keys, parse,
    validate, validate_text, ErrorCategory, InputError,
};

#[test]
fn tooltip_directive_with_argument() {
    let m = parse("#showtooltip Fireball").unwrap();
    assert_macro(&m).line_count(1).line(0, |line| {
        line.assert_directive()
            .directive("#showtooltip")
            .argument(Some("Fireball"));
    });
    assert!(validate(&m).is_empty());
}

#[test]
fn single_condition_clause() {
    let m = parse("/cast [mod:shift] Polymorph").unwrap();
    assert_macro(&m).line_count(1).line(0, |line| {
        line.assert_command()
            .verb("/cast")
            .clause_count(1)
            .clause(0, |c| {
                c.sets(&["[mod:shift]"]).argument("Polymorph");
            });
    });
    assert!(validate(&m).is_empty());
}

#[test]
fn unknown_command_and_key_are_reported() {
    let m = parse("/notacommand [badkey] Foo").unwrap();
    assert_eq!(
        validate(&m),
        vec!["Invalid command: /notacommand", "Invalid condition: badkey"]
    );

    let records = enhance(&validate(&m), "/notacommand [badkey] Foo");
    assert_eq!(records[0].category, ErrorCategory::CommandError);
    assert_eq!(records[1].category, ErrorCategory::ConditionalError);
}

#[test]
fn trailing_semicolon_is_a_structure_advisory() {
    let text = "/cast Fireball;";
    let m = parse(text).unwrap();
    let errors = validate(&m);
    assert!(errors.is_empty());

    let structure: Vec<_> = enhance(&errors, text)
        .into_iter()
        .filter(|r| r.category == ErrorCategory::StructureError)
        .collect();
    assert_eq!(structure.len(), 1);
    assert_eq!(
        structure[0].message.to_lowercase(),
        "trailing semicolon creates empty clause"
    );
}

#[test]
fn length_ceiling_is_an_error() {
    let text = format!("/cast {}", "A".repeat(300));
    let m = parse(&text).unwrap();
    let errors = validate(&m);
    assert_eq!(errors, vec!["Macro exceeds 255 character limit (306 characters)"]);

    let limits: Vec<_> = enhance(&errors, &text)
        .into_iter()
        .filter(|r| r.category == ErrorCategory::CharacterLimit)
        .collect();
    assert_eq!(limits.len(), 1);
}

#[test]
fn stacked_condition_sets_share_a_clause() {
    let m = parse("/cast [mod:shift][@focus] Polymorph").unwrap();
    assert_macro(&m).line(0, |line| {
        line.assert_command()
            .clause_count(1)
            .arguments(&["Polymorph"])
            .clause(0, |c| {
                c.sets(&["[mod:shift]", "[@focus]"]);
            });
    });
}

#[rstest]
#[case("/cast [] Frost Nova", &["[]"], "Frost Nova")]
#[case("/cast [mod:shift;mod:ctrl] Blink", &["[mod:shift]", "[mod:ctrl]"], "Blink")]
#[case("/cast [ mod : shift ] Blink", &["[mod:shift]"], "Blink")]
#[case("/use [@player,  nodead] 13", &["[@player,nodead]"], "13")]
fn conditional_shapes(#[case] text: &str, #[case] sets: &[&str], #[case] argument: &str) {
    let m = parse(text).unwrap();
    assert_macro(&m).line(0, |line| {
        line.assert_command().clause(0, |c| {
            c.sets(sets).argument(argument);
        });
    });
}

#[rstest]
#[case("/cast [mod:shift Polymorph", "/cast [mod:shift Polymorph")]
#[case("/cast [mod:shift Fire[b] Ball", "/cast [mod:shift Fire; [b] Ball")]
#[case("/cast mod:shift] Polymorph", "/cast mod:shift] Polymorph")]
#[case("/cast [a[b]] X", "/cast [a; [b] ] X")]
fn malformed_brackets_render_as_literal_text(#[case] text: &str, #[case] rendered: &str) {
    assert_eq!(format(&parse(text).unwrap(), false), rendered);
}

#[rstest]
#[case("/cast [mod:shift Polymorph")]
#[case("/cast mod:shift] Polymorph")]
#[case("/cast [a[b]] X")]
#[case("/cast [[[")]
fn malformed_brackets_parse_and_fail_validation(#[case] text: &str) {
    let m = parse(text).unwrap();
    let errors = validate(&m);
    assert!(
        errors.iter().any(|e| e.contains("bracket") || e.contains("']'")),
        "expected a bracket error for {:?}, got {:?}",
        text,
        errors
    );
    for error in validate_text(text).unwrap() {
        assert!(errors.contains(&error), "{:?} missing from {:?}", error, errors);
    }
}

#[rstest]
#[case("/CAST Fireball", true)]
#[case("/Cast Fireball", true)]
#[case("/cats Fireball", false)]
#[case("/castsequence reset=10 A, B", true)]
#[case("/1 hello", true)]
fn command_membership(#[case] text: &str, #[case] known: bool) {
    let m = parse(text).unwrap();
    let has_command_error = validate(&m).iter().any(|e| e.starts_with("Invalid command"));
    assert_eq!(has_command_error, !known);
}

#[rstest]
#[case("mod", "shift", true)]
#[case("mod", "Shift", false)]
#[case("nomod", "alt", true)]
#[case("mod", "shift/ctrl", true)]
#[case("mod", "shift/hyper", false)]
#[case("stance", "3", true)]
#[case("stance", "11", false)]
#[case("combat", "anything", true)]
#[case("@focustarget", "", true)]
#[case("target=party3", "", true)]
#[case("@party5", "", false)]
fn conditional_membership(#[case] key: &str, #[case] value: &str, #[case] accepted: bool) {
    let condition = if value.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", key, value)
    };
    let m = parse(&format!("/cast [{}] Fireball", condition)).unwrap();
    assert_eq!(validate(&m).is_empty(), accepted, "condition {}", condition);
}

#[test]
fn reference_accessors_agree_with_validation() {
    for verb in known_commands().iter().take(40) {
        let m = parse(&format!("{} x", verb)).unwrap();
        assert!(
            validate(&m).iter().all(|e| !e.starts_with("Invalid command")),
            "{} reported unknown",
            verb
        );
    }
    for key in known_conditional_keys() {
        let values = allowed_values_for(&key);
        let condition = match values.first() {
            Some(value) => format!("{}:{}", key, value),
            None => key.clone(),
        };
        let m = parse(&format!("/cast [{}] x", condition)).unwrap();
        assert!(validate(&m).is_empty(), "{} rejected", condition);
    }
}

#[test]
fn sample_corpus_validity() {
    for s in SAMPLES {
        let m = parse(s.text).unwrap();
        assert_eq!(validate(&m).is_empty(), s.valid, "sample {}", s.name);
    }
    assert!(valid_samples().count() >= 5);
    assert!(sample("fallback-clause").is_some());
}

#[test]
fn whitespace_variants_share_a_length_verdict() {
    let padded = format!("/cast{}{}", " ".repeat(20), "A".repeat(245));
    let tight = format!("/cast {}", "A".repeat(245));
    let a = validate(&parse(&padded).unwrap());
    let b = validate(&parse(&tight).unwrap());
    assert_eq!(a, b);
    assert!(a.is_empty());
}

#[test]
fn empty_input_is_distinct() {
    assert_eq!(parse(""), Err(InputError::Empty));
    assert_eq!(validate_text(""), Err(InputError::Empty));
    let blank = parse(" \n\t\n").unwrap();
    assert_eq!(validate(&blank), vec!["Macro is empty"]);
}

#[test]
fn comments_only_macro() {
    let m = parse("; just a note").unwrap();
    assert_eq!(validate(&m), vec!["Macro contains no commands or directives"]);
    assert_eq!(format(&m, false), "; just a note");
}
