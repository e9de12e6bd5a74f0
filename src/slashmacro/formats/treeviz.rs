//! Treeviz formatter for macro trees
//!
//! One line per node, nesting drawn with box connectors, labels truncated to 30
//! characters:
//!
//!     ⧉ Poly - 2 line(s)
//!     ├─ # #showtooltip
//!     └─ / /cast (1 clause(s))
//!       └─ ⋯ Polymorph
//!         └─ ? 1 set(s)
//!           └─ ☐ [mod:shift]
//!             └─ ◦ mod:shift
//!
//! Icons
//!     Macro: ⧉
//!     DirectiveLine: #
//!     CommandLine: /
//!     CommentLine: ;
//!     Clause: ⋯
//!     Conditional: ?
//!     ConditionSet: ☐
//!     Condition: ◦

use super::registry::{FormatError, Formatter};
use crate::slashmacro::ast::{snapshot_from_macro, AstSnapshot, Macro};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Macro" => "⧉",
        "DirectiveLine" => "#",
        "CommandLine" => "/",
        "CommentLine" => ";",
        "Clause" => "⋯",
        "Conditional" => "?",
        "ConditionSet" => "☐",
        "Condition" => "◦",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum = match (show_linum, snapshot.line) {
        (true, Some(line)) => format!("{:02} ", line),
        (true, None) => "   ".to_string(),
        (false, _) => String::new(),
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum,
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == count, show_linum, output);
    }
}

/// Render the tree view, optionally prefixing each node with its line number
pub fn to_treeviz_str(m: &Macro, show_linum: bool) -> String {
    let snapshot = snapshot_from_macro(m);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );

    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == count, show_linum, &mut output);
    }

    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, m: &Macro) -> Result<String, FormatError> {
        Ok(to_treeviz_str(m, false))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slashmacro::parsing::parse_macro;

    #[test]
    fn test_treeviz_output() {
        let m = parse_macro("Poly", "#showtooltip\n/cast [mod:shift] Polymorph").unwrap();
        let expected = "\
⧉ Poly - 2 line(s)
├─ # #showtooltip
└─ / /cast (1 clause(s))
  └─ ⋯ Polymorph
    └─ ? 1 set(s)
      └─ ☐ [mod:shift]
        └─ ◦ mod:shift
";
        assert_eq!(to_treeviz_str(&m, false), expected);
    }

    #[test]
    fn test_line_numbers() {
        let m = parse_macro("Poly", "; note").unwrap();
        assert_eq!(to_treeviz_str(&m, true), "⧉ Poly - 1 line(s)\n01 └─ ; note\n");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let long = format!("; {}", "x".repeat(40));
        let m = parse_macro("Notes", &long).unwrap();
        let output = to_treeviz_str(&m, false);
        assert!(output.contains(&format!("{}...", "x".repeat(30))));
    }
}
