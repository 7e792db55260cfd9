//! UI module for the SBCC GUI
//!
//! This module organizes the GUI into panels and components.
//!
//! # Panel Structure
//! - `toolbar` - Session operations (New, Export JSON), Settings
//! - `metadata_panel` - Gross floor area and the reference benchmark
//! - `rows_table` - Editable material rows with their transport legs
//! - `results_panel` - Right panel: totals, score, per-row breakdown
//! - `status_bar` - Bottom status messages

// Top-level panels
pub mod toolbar;
pub mod metadata_panel;
pub mod rows_table;
pub mod results_panel;
pub mod status_bar;

// Note: Functions are accessed via module paths (e.g., ui::toolbar::view_toolbar)
