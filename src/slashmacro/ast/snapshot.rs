//! Normalized snapshot of a macro tree
//!
//! Tree views do not need to know every node type. A snapshot flattens the tree into
//! uniform nodes (type, label, line, children) built through [`AstNode`].

use super::elements::conditional::Conditional;
use super::elements::line::MacroLine;
use super::elements::macro_doc::Macro;
use super::traits::AstNode;

#[derive(Debug, Clone, PartialEq)]
pub struct AstSnapshot {
    pub node_type: String,
    pub label: String,
    pub line: Option<usize>,
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    fn leaf(node: &dyn AstNode, line: Option<usize>) -> Self {
        Self {
            node_type: node.node_type().to_string(),
            label: node.display_label(),
            line,
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children = children;
        self
    }
}

pub fn snapshot_from_macro(m: &Macro) -> AstSnapshot {
    let lines = m.lines.iter().map(snapshot_line).collect();
    AstSnapshot::leaf(m, None).with_children(lines)
}

fn snapshot_line(line: &MacroLine) -> AstSnapshot {
    let number = Some(line.line_number());
    let node = AstSnapshot::leaf(line, number);
    match line {
        MacroLine::Command(command) => {
            let clauses = command
                .clauses
                .iter()
                .map(|clause| {
                    let children = clause
                        .conditional
                        .as_ref()
                        .map(|c| vec![snapshot_conditional(c, number)])
                        .unwrap_or_default();
                    AstSnapshot::leaf(clause, number).with_children(children)
                })
                .collect();
            node.with_children(clauses)
        }
        MacroLine::Directive(_) | MacroLine::Comment(_) => node,
    }
}

fn snapshot_conditional(conditional: &Conditional, line: Option<usize>) -> AstSnapshot {
    let sets = conditional
        .sets
        .iter()
        .map(|set| {
            let conditions = set
                .conditions
                .iter()
                .map(|condition| AstSnapshot::leaf(condition, line))
                .collect();
            AstSnapshot::leaf(set, line).with_children(conditions)
        })
        .collect();
    AstSnapshot::leaf(conditional, line).with_children(sets)
}
