//! Common behavior shared by tree nodes
//!
//! Tooling (the treeviz format, diagnostics) walks nodes through this trait rather than
//! matching every concrete type.

/// Common interface for all syntax tree nodes
pub trait AstNode {
    /// Short type name used by tree views (e.g. "CommandLine")
    fn node_type(&self) -> &'static str;

    /// One-line human readable label for the node
    fn display_label(&self) -> String;
}
