//! # sbcc_core - Embodied Carbon & Green Mark Estimation Engine
//!
//! `sbcc_core` is the computational heart of SBCC, turning a list of building
//! material rows into embodied carbon figures and a Green Mark certification
//! score. All inputs and outputs are JSON-serializable, making it ideal for
//! integration with web front ends, AI assistants, or batch pipelines.
//!
//! ## Design Philosophy
//!
//! - **One trusted state**: every surface edits through [`Calculator`]
//!   mutators; invalid input never reaches the trusted state
//! - **Derived, never stale**: every accepted mutation recomputes and
//!   publishes a fresh [`Output`] synchronously
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured, field-scoped error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use sbcc_core::calculator::{Calculator, FieldEdit};
//! use sbcc_core::catalogue::Catalogue;
//!
//! // Start a session: one default row, output already computed
//! let mut calc = Calculator::new(Catalogue::builtin());
//!
//! // Edit through the calculator; the output tracks every change
//! calc.set_field(0, FieldEdit::Quantity("35".to_string())).unwrap();
//! assert_eq!(calc.output().rows.len(), 1);
//!
//! // Serialize the published output for export or transmission
//! let json = serde_json::to_string_pretty(calc.output()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Session state and the validated mutation API
//! - [`catalogue`] - Reference data: components, countries, ports, vehicles
//! - [`row`] - Row schema, coercion, and validation
//! - [`project`] - Trusted state container (rows plus metadata)
//! - [`cascade`] - Dependent-field rules run inside mutations
//! - [`compute`] - The pure emissions and score calculation
//! - [`output`] - Published derived-output schema
//! - [`options`] - Lazy option-list state for large choosers
//! - [`export`] - JSON artifact serialization and atomic file writes
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod cascade;
pub mod catalogue;
pub mod compute;
pub mod errors;
pub mod export;
pub mod options;
pub mod output;
pub mod project;
pub mod row;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculator::{Calculator, FieldEdit, MetadataEdit};
pub use catalogue::Catalogue;
pub use compute::calculate_green_mark;
pub use errors::{CarbonError, CarbonResult};
pub use export::{output_json, write_output, EXPORT_FILE_NAME};
pub use options::{ChooserOption, ChooserState};
pub use output::{Output, RowOutput};
pub use project::Project;
pub use row::{GreenMarkCategory, RawRow, Row, Units};
