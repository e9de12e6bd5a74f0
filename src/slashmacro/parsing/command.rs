//! Command line parsing
//!
//! A command line is a verb followed by clauses:
//!
//!     /cast [mod:shift] Polymorph; Frostbolt
//!     └┬──┘ └──────────────┬──────────────┘
//!      verb            remainder -> clauses
//!
//! The verb is the longest leading run of `/` followed by word characters. Everything
//! after it goes to [parse_clauses](super::conditionals::parse_clauses).

use super::conditionals::parse_clauses;
use crate::slashmacro::ast::CommandLine;
use once_cell::sync::Lazy;
use regex::Regex;

static VERB: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/\w*").unwrap());

/// Split a trimmed command line into its verb and the remainder after it
pub fn split_verb(line: &str) -> (&str, &str) {
    match VERB.find(line) {
        Some(m) => (m.as_str(), &line[m.end()..]),
        None => ("", line),
    }
}

/// Parse a trimmed line that starts with `/`
pub fn parse_command(line: &str, line_number: usize) -> CommandLine {
    let (verb, remainder) = split_verb(line);
    CommandLine::new(line_number, verb, parse_clauses(remainder)).with_raw(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slashmacro::ast::{Clause, Condition, ConditionSet};

    #[test]
    fn test_split_verb() {
        assert_eq!(split_verb("/cast Fireball"), ("/cast", " Fireball"));
        assert_eq!(split_verb("/cast[harm]Fireball"), ("/cast", "[harm]Fireball"));
        assert_eq!(split_verb("/"), ("/", ""));
        assert_eq!(split_verb("/2 hello"), ("/2", " hello"));
    }

    #[test]
    fn test_parse_command_with_conditional() {
        let command = parse_command("/cast [mod:shift] Polymorph", 3);
        assert_eq!(command.verb, "/cast");
        assert_eq!(command.line_number, 3);
        assert_eq!(command.raw, "/cast [mod:shift] Polymorph");
        assert_eq!(command.clauses.len(), 1);
        let conditional = command.clauses[0].conditional.as_ref().unwrap();
        assert_eq!(
            conditional.sets,
            vec![ConditionSet::new(vec![
                Condition::new("mod").with_value("shift")
            ])]
        );
        assert_eq!(command.clauses[0].argument, "Polymorph");
    }

    #[test]
    fn test_bare_command_has_one_empty_clause() {
        let command = parse_command("/startattack", 1);
        assert_eq!(command.clauses, vec![Clause::unconditional("")]);
    }
}
