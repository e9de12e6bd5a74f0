//! Conditional elements
//!
//! A conditional is the content of one or more bracket groups gating a clause:
//!
//!     [mod:shift,@focus][harm]
//!
//! Structure:
//! - Conditional: ordered condition sets, OR-ed together
//! - ConditionSet: ordered conditions, AND-ed together (may be empty: `[]`)
//! - Condition: a case-insensitive key with an optional value (`key` or `key:value`)

use super::super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `key` or `key:value` test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub key: String,
    pub value: Option<String>,
}

impl Condition {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Attach a value. Blank values are dropped so that `value` is never empty.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.value = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
        self
    }

    /// Key normalised for table lookups
    pub fn normalized_key(&self) -> String {
        self.key.to_lowercase()
    }

    /// Whether this condition names a target unit (`@unit` or `target=unit`)
    pub fn is_target(&self) -> bool {
        let key = self.normalized_key();
        key.starts_with('@') || key.starts_with("target=")
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}

impl AstNode for Condition {
    fn node_type(&self) -> &'static str {
        "Condition"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

/// Conditions that must all hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    pub conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// The always-true set written as `[]`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Renders the bracket group, e.g. `[mod:shift,harm]`
impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", condition)?;
        }
        write!(f, "]")
    }
}

impl AstNode for ConditionSet {
    fn node_type(&self) -> &'static str {
        "ConditionSet"
    }

    fn display_label(&self) -> String {
        if self.conditions.is_empty() {
            "[] (always)".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Alternative condition sets, any of which satisfies the conditional.
///
/// A conditional always holds at least one set; "no conditional" is modelled as
/// `Option::None` on the owning clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub sets: Vec<ConditionSet>,
}

impl Conditional {
    /// Build a conditional, or `None` when there are no sets
    pub fn from_sets(sets: Vec<ConditionSet>) -> Option<Self> {
        if sets.is_empty() {
            None
        } else {
            Some(Self { sets })
        }
    }

    /// Iterate every condition across all sets
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.sets.iter().flat_map(|set| set.conditions.iter())
    }
}

impl fmt::Display for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.sets {
            write!(f, "{}", set)?;
        }
        Ok(())
    }
}

impl AstNode for Conditional {
    fn node_type(&self) -> &'static str {
        "Conditional"
    }

    fn display_label(&self) -> String {
        format!("{} set(s)", self.sets.len())
    }
}
