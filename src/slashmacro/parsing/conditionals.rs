//! Conditional and argument parsing
//!
//! Works on the remainder of a command line after its verb:
//!
//!     [mod:shift,@focus][harm] Polymorph; [] Frostbolt
//!
//! Clause assembly walks the bracket-aware tokens left to right:
//! - A bracket group adds its condition sets to the clause being built. Adjacent groups
//!   therefore become OR-ed alternatives of the same conditional.
//! - A bracket group that follows argument text closes the current clause first, so
//!   every bracket-group boundary opens a new argument slot.
//! - `;` outside brackets closes the current clause, even an empty one, so that a
//!   trailing `;` survives as an empty clause.
//! - Any other token is argument text; the argument is sliced from the source between
//!   the first and last text token, so interior spacing is kept.
//!
//! Inside a group, `;` separates condition sets, `,` separates conditions and the first
//! `:` separates key from value. An empty group `[]` is one empty condition set.

use crate::slashmacro::ast::{Clause, Condition, ConditionSet, Conditional};
use crate::slashmacro::lexing::{tokenize_line, Token};
use std::ops::Range;

/// Parse the interior of one bracket group into condition sets
pub fn parse_group(interior: &str) -> Vec<ConditionSet> {
    interior
        .split(';')
        .map(|set| ConditionSet::new(set.split(',').filter_map(parse_condition).collect()))
        .collect()
}

/// Parse one `key` or `key:value` piece; blank pieces and blank keys yield nothing
fn parse_condition(piece: &str) -> Option<Condition> {
    let piece = piece.trim();
    if piece.is_empty() {
        return None;
    }
    match piece.split_once(':') {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                None
            } else {
                Some(Condition::new(key).with_value(value.trim()))
            }
        }
        None => Some(Condition::new(piece)),
    }
}

/// Clause under construction
#[derive(Default)]
struct ClauseBuilder {
    sets: Vec<ConditionSet>,
    argument: Option<Range<usize>>,
}

impl ClauseBuilder {
    fn is_blank(&self) -> bool {
        self.sets.is_empty() && self.argument.is_none()
    }

    fn extend_argument(&mut self, span: Range<usize>) {
        self.argument = match self.argument.take() {
            Some(existing) => Some(existing.start..span.end),
            None => Some(span),
        };
    }

    fn finish(&mut self, source: &str) -> Clause {
        let argument = self
            .argument
            .take()
            .map(|span| source[span].to_string())
            .unwrap_or_default();
        let sets = std::mem::take(&mut self.sets);
        Clause::new(Conditional::from_sets(sets), argument)
    }
}

/// Assemble the ordered clauses of a command line remainder.
///
/// Always returns at least one clause; a remainder without brackets yields exactly one
/// unconditional clause.
pub fn parse_clauses(remainder: &str) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let mut builder = ClauseBuilder::default();
    let mut after_separator = false;

    for (token, span) in tokenize_line(remainder) {
        match token {
            Token::Whitespace => continue,
            Token::Bracket(interior) => {
                if builder.argument.is_some() {
                    clauses.push(builder.finish(remainder));
                }
                builder.sets.extend(parse_group(&interior));
            }
            Token::Semicolon => {
                clauses.push(builder.finish(remainder));
                after_separator = true;
                continue;
            }
            Token::Word(_) | Token::OpenBracket | Token::CloseBracket => {
                builder.extend_argument(span);
            }
        }
        after_separator = false;
    }

    if !builder.is_blank() || after_separator || clauses.is_empty() {
        clauses.push(builder.finish(remainder));
    }

    clauses
}

/// Flattened view of a remainder: every condition set in order, and every non-empty
/// argument in order.
///
/// Returns `None` for the conditional when no bracket group was found.
pub fn parse_conditionals_and_arguments(remainder: &str) -> (Option<Conditional>, Vec<String>) {
    let clauses = parse_clauses(remainder);
    let sets: Vec<ConditionSet> = clauses
        .iter()
        .filter_map(|clause| clause.conditional.as_ref())
        .flat_map(|conditional| conditional.sets.iter().cloned())
        .collect();
    let arguments = clauses
        .into_iter()
        .map(|clause| clause.argument)
        .filter(|argument| !argument.is_empty())
        .collect();
    (Conditional::from_sets(sets), arguments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(key: &str) -> Condition {
        Condition::new(key)
    }

    fn cond_v(key: &str, value: &str) -> Condition {
        Condition::new(key).with_value(value)
    }

    #[test]
    fn test_group_splits_sets_conditions_and_values() {
        let sets = parse_group("mod:shift, @focus; harm,nodead");
        assert_eq!(
            sets,
            vec![
                ConditionSet::new(vec![cond_v("mod", "shift"), cond("@focus")]),
                ConditionSet::new(vec![cond("harm"), cond("nodead")]),
            ]
        );
    }

    #[test]
    fn test_empty_group_is_one_empty_set() {
        assert_eq!(parse_group(""), vec![ConditionSet::empty()]);
        assert_eq!(parse_group("  "), vec![ConditionSet::empty()]);
    }

    #[test]
    fn test_value_splits_on_first_colon_only() {
        assert_eq!(parse_group("a:b:c"), vec![ConditionSet::new(vec![cond_v("a", "b:c")])]);
    }

    #[test]
    fn test_blank_key_and_value_are_handled() {
        assert_eq!(parse_group(":x"), vec![ConditionSet::empty()]);
        assert_eq!(parse_group("mod:"), vec![ConditionSet::new(vec![cond("mod")])]);
    }

    #[test]
    fn test_no_brackets_is_single_unconditional_clause() {
        assert_eq!(
            parse_clauses(" Fire  Ball "),
            vec![Clause::unconditional("Fire  Ball")]
        );
        assert_eq!(parse_clauses(""), vec![Clause::unconditional("")]);
    }

    #[test]
    fn test_adjacent_groups_share_a_clause() {
        let clauses = parse_clauses(" [mod:shift][@focus] Polymorph");
        assert_eq!(clauses.len(), 1);
        let conditional = clauses[0].conditional.as_ref().unwrap();
        assert_eq!(conditional.sets.len(), 2);
        assert_eq!(clauses[0].argument, "Polymorph");
    }

    #[test]
    fn test_semicolons_separate_clauses() {
        let clauses = parse_clauses(" [harm] Fireball; [help] Heal; Wand");
        let arguments: Vec<&str> = clauses.iter().map(|c| c.argument.as_str()).collect();
        assert_eq!(arguments, vec!["Fireball", "Heal", "Wand"]);
        assert!(clauses[2].is_fallback());
    }

    #[test]
    fn test_bracket_after_argument_opens_new_clause() {
        let clauses = parse_clauses(" [a] X [b] Y");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].argument, "X");
        assert_eq!(clauses[1].argument, "Y");
    }

    #[test]
    fn test_trailing_semicolon_keeps_empty_clause() {
        let clauses = parse_clauses(" Fireball;");
        assert_eq!(
            clauses,
            vec![Clause::unconditional("Fireball"), Clause::unconditional("")]
        );
    }

    #[test]
    fn test_empty_bracket_is_present_conditional() {
        let clauses = parse_clauses(" [] Fireball");
        assert_eq!(
            clauses[0].conditional,
            Some(Conditional {
                sets: vec![ConditionSet::empty()]
            })
        );
    }

    #[test]
    fn test_unterminated_bracket_is_literal_text() {
        assert_eq!(
            parse_clauses(" [mod:shift Polymorph"),
            vec![Clause::unconditional("[mod:shift Polymorph")]
        );
    }

    #[test]
    fn test_unterminated_bracket_before_group_keeps_its_text() {
        let clauses = parse_clauses(" [mod:shift Fire[b] Ball");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0], Clause::unconditional("[mod:shift Fire"));
        assert_eq!(clauses[1].argument, "Ball");
        assert_eq!(
            clauses[1].conditional.as_ref().unwrap().sets,
            vec![ConditionSet::new(vec![cond("b")])]
        );
    }

    #[test]
    fn test_stray_brackets_are_literal_text() {
        assert_eq!(
            parse_clauses(" [[]"),
            vec![
                Clause::unconditional("["),
                Clause::new(Conditional::from_sets(vec![ConditionSet::empty()]), ""),
            ]
        );
        assert_eq!(parse_clauses(" mod:shift] X"), vec![Clause::unconditional("mod:shift] X")]);
    }

    #[test]
    fn test_flattened_view() {
        let (conditional, arguments) =
            parse_conditionals_and_arguments(" [mod:shift] Polymorph; [@focus] Sheep; Frostbolt");
        assert_eq!(conditional.unwrap().sets.len(), 2);
        assert_eq!(arguments, vec!["Polymorph", "Sheep", "Frostbolt"]);

        let (conditional, arguments) = parse_conditionals_and_arguments(" Fireball");
        assert!(conditional.is_none());
        assert_eq!(arguments, vec!["Fireball"]);
    }
}
