//! Heuristic detectors for common authoring mistakes
//!
//! Every detector reads the raw macro text and returns at most one diagnostic, for
//! the first occurrence of its pattern. Detectors share nothing and never fail, so
//! any subset can run in any combination. [`DETECTORS`] fixes the order in which
//! their diagnostics are reported.

use super::diagnostic::{DiagnosticRecord, ErrorCategory};
use crate::slashmacro::formats::format_macro;
use crate::slashmacro::lexing::{classify_line, split_lines, tokenize_line, LineKind, ScannedLine, Token};
use crate::slashmacro::parsing::{parse_macro, split_verb};
use crate::slashmacro::validation::{Limits, ReferenceTables};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub type DetectFn = fn(&str, &Limits) -> Option<DiagnosticRecord>;

/// A named entry in the detector catalogue
#[derive(Clone, Copy)]
pub struct Detector {
    pub name: &'static str,
    /// Category of the diagnostics this detector usually reports
    pub category: ErrorCategory,
    pub run: DetectFn,
}

impl Detector {
    /// Run the detector and tag its diagnostic with the detector name
    pub fn detect(&self, text: &str, limits: &Limits) -> Option<DiagnosticRecord> {
        (self.run)(text, limits).map(|record| record.with_code(self.name))
    }
}

pub const DETECTORS: &[Detector] = &[
    Detector {
        name: "arguments_before_conditional",
        category: ErrorCategory::StructureError,
        run: arguments_before_conditional,
    },
    Detector {
        name: "multiple_gcd_commands",
        category: ErrorCategory::StructureError,
        run: multiple_gcd_commands,
    },
    Detector {
        name: "empty_conditional_clause",
        category: ErrorCategory::StructureError,
        run: empty_conditional_clause,
    },
    Detector {
        name: "trailing_semicolon",
        category: ErrorCategory::StructureError,
        run: trailing_semicolon,
    },
    Detector {
        name: "extra_whitespace",
        category: ErrorCategory::GeneralError,
        run: extra_whitespace,
    },
    Detector {
        name: "whitespace_inside_brackets",
        category: ErrorCategory::GeneralError,
        run: whitespace_inside_brackets,
    },
    Detector {
        name: "missing_slash",
        category: ErrorCategory::CommandError,
        run: missing_slash,
    },
    Detector {
        name: "multiple_commands_one_line",
        category: ErrorCategory::StructureError,
        run: multiple_commands_one_line,
    },
    Detector {
        name: "empty_target",
        category: ErrorCategory::ConditionalError,
        run: empty_target,
    },
    Detector {
        name: "directive_after_command",
        category: ErrorCategory::StructureError,
        run: directive_after_command,
    },
    Detector {
        name: "near_limit",
        category: ErrorCategory::CharacterLimit,
        run: near_limit,
    },
    Detector {
        name: "only_directives",
        category: ErrorCategory::StructureError,
        run: only_directives,
    },
    Detector {
        name: "item_name",
        category: ErrorCategory::CommandError,
        run: item_name,
    },
    Detector {
        name: "nested_brackets",
        category: ErrorCategory::SyntaxError,
        run: nested_brackets,
    },
    Detector {
        name: "typo",
        category: ErrorCategory::CommandError,
        run: typo,
    },
    Detector {
        name: "mixed_case_verb",
        category: ErrorCategory::CommandError,
        run: mixed_case_verb,
    },
    Detector {
        name: "duplicate_conditions",
        category: ErrorCategory::ConditionalError,
        run: duplicate_conditions,
    },
];

/// Look a detector up by name
pub fn detector(name: &str) -> Option<&'static Detector> {
    DETECTORS.iter().find(|d| d.name == name)
}

/// Run the named detectors, in catalogue order, with default limits
///
/// Unknown names are ignored.
pub fn run_detectors(text: &str, names: &[&str]) -> Vec<DiagnosticRecord> {
    let limits = Limits::default();
    DETECTORS
        .iter()
        .filter(|d| names.contains(&d.name))
        .filter_map(|d| d.detect(text, &limits))
        .collect()
}

const GCD_VERBS: &[&str] = &["/cast", "/use", "/castsequence", "/castrandom", "/userandom"];

// Verbs that do nothing without an argument
const ARGUMENT_VERBS: &[&str] = &[
    "/cast",
    "/use",
    "/castsequence",
    "/castrandom",
    "/userandom",
    "/equip",
    "/equipslot",
];

const TYPOS: &[(&str, &str)] = &[
    ("/cats", "/cast"),
    ("/csat", "/cast"),
    ("/casr", "/cast"),
    ("/sue", "/use"),
    ("/ues", "/use"),
    ("/tagret", "/target"),
    ("/taregt", "/target"),
    ("/castsequnce", "/castsequence"),
    ("/stopcastign", "/stopcasting"),
    ("/startatack", "/startattack"),
    ("#showtoolip", "#showtooltip"),
    ("#showtootip", "#showtooltip"),
    ("#showtooltips", "#showtooltip"),
    ("mod:shfit", "mod:shift"),
    ("mod:crtl", "mod:ctrl"),
    ("@mousover", "@mouseover"),
    ("@mouseovr", "@mouseover"),
    ("@fcous", "@focus"),
    ("nocombta", "nocombat"),
];

static INSIDE_BRACKET_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\s|\s\]").unwrap());
static ITEM_BY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|[\s\];])item\s+[a-z]").unwrap());

fn scanned(text: &str) -> Vec<(ScannedLine<'_>, LineKind)> {
    split_lines(text)
        .into_iter()
        .map(|line| {
            let kind = classify_line(line.text);
            (line, kind)
        })
        .collect()
}

fn command_lines(text: &str) -> impl Iterator<Item = ScannedLine<'_>> {
    split_lines(text)
        .into_iter()
        .filter(|line| classify_line(line.text) == LineKind::Command)
}

/// Split a command remainder on `;` outside brackets
fn clause_segments(remainder: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in remainder.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                segments.push(&remainder[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&remainder[start..]);
    segments
}

/// Interiors of the complete bracket groups of a line
fn bracket_groups(line: &str) -> Vec<String> {
    tokenize_line(line)
        .into_iter()
        .filter_map(|(token, _)| match token {
            Token::Bracket(interior) => Some(interior),
            _ => None,
        })
        .collect()
}

fn arguments_before_conditional(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text).find_map(|line| {
        let (verb, remainder) = split_verb(line.text);
        clause_segments(remainder).into_iter().find_map(|segment| {
            let (before, _) = segment.trim().split_once('[')?;
            let before = before.trim();
            if before.is_empty() {
                return None;
            }
            Some(
                DiagnosticRecord::new(
                    ErrorCategory::StructureError,
                    format!(
                        "Argument '{}' appears before its conditional on line {}",
                        before, line.number
                    ),
                )
                .with_line(line.number)
                .with_quick_fix(format!("Put the conditional first: {} [conditions] {}", verb, before))
                .with_example("/cast [@mouseover,harm] Fireball")
                .with_explanation("A conditional only applies to the argument that follows it."),
            )
        })
    })
}

fn multiple_gcd_commands(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    let mut unconditional = command_lines(text).filter(|line| {
        let (verb, remainder) = split_verb(line.text);
        GCD_VERBS.contains(&verb.to_lowercase().as_str()) && !remainder.contains('[')
    });
    let _first = unconditional.next()?;
    let second = unconditional.next()?;

    Some(
        DiagnosticRecord::new(
            ErrorCategory::StructureError,
            format!(
                "Multiple cooldown-triggering commands without conditionals (line {})",
                second.number
            ),
        )
        .with_line(second.number)
        .with_quick_fix("Merge them into one command with conditionals, or add conditionals")
        .with_example("/cast [mod:shift] Polymorph; Frostbolt")
        .with_explanation(
            "Only one ability on the global cooldown can fire per click, the rest are ignored.",
        ),
    )
}

fn empty_conditional_clause(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text).find_map(|line| {
        let (verb, remainder) = split_verb(line.text);
        if !ARGUMENT_VERBS.contains(&verb.to_lowercase().as_str()) {
            return None;
        }
        clause_segments(remainder)
            .into_iter()
            .any(|segment| segment.trim_end().ends_with(']'))
            .then(|| {
                DiagnosticRecord::new(
                    ErrorCategory::StructureError,
                    format!("Conditional has no action after it on line {}", line.number),
                )
                .with_line(line.number)
                .with_quick_fix("Add the spell or item to use after the closing bracket")
                .with_example("/cast [@focus] Polymorph")
                .with_explanation(format!("{} needs an argument to do anything.", verb))
            })
    })
}

fn trailing_semicolon(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text)
        .find(|line| line.text.ends_with(';'))
        .map(|line| {
            DiagnosticRecord::new(
                ErrorCategory::StructureError,
                "Trailing semicolon creates empty clause",
            )
            .with_line(line.number)
            .with_quick_fix("Remove the final ';'")
            .with_example("/cast [mod:shift] Polymorph; Frostbolt")
        })
}

fn extra_whitespace(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    split_lines(text)
        .into_iter()
        .find(|line| line.text.contains("  ") || line.text.contains('\t'))
        .map(|line| {
            DiagnosticRecord::new(
                ErrorCategory::GeneralError,
                format!("Extra whitespace on line {}", line.number),
            )
            .with_line(line.number)
            .with_quick_fix("Use single spaces, or format with trimming enabled")
            .with_explanation("Every whitespace character counts against the character limit.")
        })
}

fn whitespace_inside_brackets(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text)
        .find(|line| INSIDE_BRACKET_SPACE.is_match(line.text))
        .map(|line| {
            DiagnosticRecord::new(
                ErrorCategory::GeneralError,
                format!("Whitespace inside brackets on line {}", line.number),
            )
            .with_line(line.number)
            .with_quick_fix("Remove the spaces right after '[' and right before ']'")
            .with_example("/cast [mod:shift] Polymorph")
        })
}

fn missing_slash(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    let tables = ReferenceTables::standard();
    scanned(text).into_iter().find_map(|(line, kind)| {
        if kind != LineKind::Passthrough {
            return None;
        }
        let word = line.text.split_whitespace().next()?;
        let verb = format!("/{}", word);
        tables.is_known_command(&verb).then(|| {
            DiagnosticRecord::new(
                ErrorCategory::CommandError,
                format!("Command '{}' is missing its leading '/' on line {}", word, line.number),
            )
            .with_line(line.number)
            .with_quick_fix(format!("Write it as {}", verb))
            .with_explanation("Lines that do not start with '/' or '#' are not run.")
        })
    })
}

fn multiple_commands_one_line(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text).find_map(|line| {
        let (_, remainder) = split_verb(line.text);
        let second = tokenize_line(remainder).into_iter().find_map(|(token, _)| match token {
            Token::Word(word)
                if word.starts_with('/')
                    && word.chars().nth(1).is_some_and(|c| c.is_alphabetic()) =>
            {
                Some(word)
            }
            _ => None,
        })?;
        Some(
            DiagnosticRecord::new(
                ErrorCategory::StructureError,
                format!(
                    "Multiple commands on one line ({} on line {})",
                    second, line.number
                ),
            )
            .with_line(line.number)
            .with_quick_fix(format!("Move {} to its own line", second))
            .with_explanation("Each line runs exactly one command."),
        )
    })
}

fn empty_target(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text).find_map(|line| {
        bracket_groups(line.text)
            .iter()
            .any(|group| {
                group
                    .split([';', ','])
                    .map(str::trim)
                    .any(|piece| piece == "@" || piece.eq_ignore_ascii_case("target="))
            })
            .then(|| {
                DiagnosticRecord::new(
                    ErrorCategory::ConditionalError,
                    format!("Target '@' with no unit on line {}", line.number),
                )
                .with_line(line.number)
                .with_quick_fix("Name the unit, e.g. @focus or @mouseover")
                .with_example("/cast [@mouseover] Renew")
            })
    })
}

fn directive_after_command(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    let mut seen_command = false;
    for (line, kind) in scanned(text) {
        match kind {
            LineKind::Command => seen_command = true,
            LineKind::Directive if seen_command => {
                return Some(
                    DiagnosticRecord::new(
                        ErrorCategory::StructureError,
                        format!("Directive after command on line {}", line.number),
                    )
                    .with_line(line.number)
                    .with_quick_fix("Move directives to the top of the macro")
                    .with_example("#showtooltip\n/cast Fireball"),
                );
            }
            _ => {}
        }
    }
    None
}

fn near_limit(text: &str, limits: &Limits) -> Option<DiagnosticRecord> {
    let m = parse_macro("", text).ok()?;
    let length = format_macro(&m, false).chars().count();
    if length < limits.near_limit || length > limits.max_characters {
        return None;
    }
    Some(
        DiagnosticRecord::new(
            ErrorCategory::CharacterLimit,
            format!(
                "Macro is {} characters, close to the {} character limit",
                length, limits.max_characters
            ),
        )
        .with_quick_fix("Format with trimming enabled to reclaim whitespace")
        .with_explanation(format!(
            "{} characters are left before the macro is rejected.",
            limits.max_characters - length
        )),
    )
}

fn only_directives(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    let kinds: Vec<LineKind> = scanned(text).into_iter().map(|(_, kind)| kind).collect();
    let has_directive = kinds.contains(&LineKind::Directive);
    let has_command = kinds.contains(&LineKind::Command);
    (has_directive && !has_command).then(|| {
        DiagnosticRecord::new(
            ErrorCategory::StructureError,
            "Macro contains only directives and does nothing when clicked",
        )
        .with_quick_fix("Add at least one command")
        .with_example("#showtooltip\n/cast Fireball")
    })
}

fn item_name(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text)
        .find(|line| ITEM_BY_NAME.is_match(split_verb(line.text).1))
        .map(|line| {
            DiagnosticRecord::new(
                ErrorCategory::CommandError,
                format!("Item referenced as 'item <name>' on line {}", line.number),
            )
            .with_line(line.number)
            .with_quick_fix("Use the item's name alone, or item:<id>")
            .with_example("/use item:6948")
        })
}

fn nested_brackets(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text)
        .find(|line| {
            let mut depth = 0usize;
            line.text.chars().any(|ch| {
                match ch {
                    '[' => depth += 1,
                    ']' => depth = depth.saturating_sub(1),
                    _ => {}
                }
                depth > 1
            })
        })
        .map(|line| {
            DiagnosticRecord::new(
                ErrorCategory::SyntaxError,
                format!("Nested brackets on line {}", line.number),
            )
            .with_line(line.number)
            .with_quick_fix("Write alternatives as separate groups: [a][b] or [a;b]")
            .with_example("/cast [mod:shift][@focus] Polymorph")
        })
}

fn typo(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    split_lines(text).into_iter().find_map(|line| {
        line.text
            .split(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | ',' | ';'))
            .find_map(|word| {
                let lower = word.to_lowercase();
                let (wrong, right) = TYPOS.iter().find(|(wrong, _)| *wrong == lower)?;
                let category = if wrong.starts_with('/') || wrong.starts_with('#') {
                    ErrorCategory::CommandError
                } else {
                    ErrorCategory::ConditionalError
                };
                Some(
                    DiagnosticRecord::new(
                        category,
                        format!(
                            "Possible typo '{}' on line {}, did you mean '{}'?",
                            word, line.number, right
                        ),
                    )
                    .with_line(line.number)
                    .with_quick_fix(format!("Replace '{}' with '{}'", word, right)),
                )
            })
    })
}

fn mixed_case_verb(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text).find_map(|line| {
        let (verb, _) = split_verb(line.text);
        let lower = verb.to_lowercase();
        (lower != verb).then(|| {
            DiagnosticRecord::new(
                ErrorCategory::CommandError,
                format!("Command '{}' on line {} should be lowercase", verb, line.number),
            )
            .with_line(line.number)
            .with_quick_fix(format!("Write it as {}", lower))
        })
    })
}

fn duplicate_conditions(text: &str, _: &Limits) -> Option<DiagnosticRecord> {
    command_lines(text).find_map(|line| {
        bracket_groups(line.text).into_iter().find_map(|group| {
            let mut seen = BTreeSet::new();
            let duplicate = group
                .split([';', ','])
                .map(|piece| piece.trim().to_lowercase())
                .filter(|piece| !piece.is_empty())
                .find(|piece| !seen.insert(piece.clone()))?;
            Some(
                DiagnosticRecord::new(
                    ErrorCategory::ConditionalError,
                    format!("Duplicate condition '{}' on line {}", duplicate, line.number),
                )
                .with_line(line.number)
                .with_quick_fix(format!("Remove the repeated '{}'", duplicate)),
            )
        })
    })
}
