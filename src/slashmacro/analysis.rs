//! Heuristic analysis of raw macro text
//!
//!     Analysis is a second pass, independent of the syntax tree. It reads the raw text
//!     and reports advisory [`DiagnosticRecord`]s: each names a likely mistake and usually
//!     carries a quick fix, an example and a short explanation. Nothing here blocks a
//!     macro; validation is the only gate.
//!
//!     The catalogue of [detectors](detectors) is a flat registry of independent
//!     functions. The [`Analyzer`] runs the enabled ones in catalogue order after lifting
//!     validation messages into records.

pub mod analyzer;
pub mod detectors;
pub mod diagnostic;

pub use analyzer::{enhance, lift_error, Analyzer, MISSING_TOOLTIP};
pub use detectors::{detector, run_detectors, DetectFn, Detector, DETECTORS};
pub use diagnostic::{DiagnosticRecord, ErrorCategory};
