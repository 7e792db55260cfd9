//! # Output Export
//!
//! Turns the published [`Output`] into the JSON artifact and, on targets
//! with a filesystem, writes it atomically (temp file, sync, rename) so a
//! crashed export never leaves a half-written file behind.
//!
//! Exporting is read-only with respect to the session: it serializes the
//! output that is already published and mutates nothing.
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::calculator::Calculator;
//! use sbcc_core::catalogue::Catalogue;
//! use sbcc_core::export::output_json;
//!
//! let calc = Calculator::new(Catalogue::builtin());
//! let json = output_json(calc.output()).unwrap();
//! assert!(json.contains("\"greenMarkScore\""));
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::errors::{CarbonError, CarbonResult};
use crate::output::Output;

/// Default file name for the export artifact
pub const EXPORT_FILE_NAME: &str = "output.sbcc.json";

/// Serialize an output to pretty-printed JSON.
pub fn output_json(output: &Output) -> CarbonResult<String> {
    serde_json::to_string_pretty(output).map_err(|e| CarbonError::SerializationError {
        reason: e.to_string(),
    })
}

/// Write an output to `path` atomically.
///
/// The JSON is written to a sibling `.tmp` file, synced, then renamed over
/// the target. On failure the temp file is removed and `path` is left as
/// it was.
pub fn write_output(output: &Output, path: &Path) -> CarbonResult<()> {
    let json = output_json(output)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CarbonError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CarbonError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CarbonError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CarbonError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::catalogue::Catalogue;

    fn test_output() -> Output {
        Calculator::new(Catalogue::builtin()).output().clone()
    }

    #[test]
    fn test_output_json_wire_fields() {
        let json = output_json(&test_output()).unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"totalEmissions\""));
        assert!(json.contains("\"embodiedCarbonPerGfa\""));
        assert!(json.contains("\"embodiedCarbonPerGfaComparedToReference\""));
        assert!(json.contains("\"greenMarkScore\""));
        assert!(json.contains("\"rows\""));
    }

    #[test]
    fn test_write_output_roundtrip() {
        let output = test_output();
        let path = std::env::temp_dir().join("sbcc_export_roundtrip.sbcc.json");

        write_output(&output, &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let loaded: Output = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, output);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_output_leaves_no_temp_file() {
        let output = test_output();
        let path = std::env::temp_dir().join("sbcc_export_clean.sbcc.json");

        write_output(&output, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(EXPORT_FILE_NAME, "output.sbcc.json");
    }

    #[test]
    fn test_exporting_does_not_mutate_output() {
        let output = test_output();
        let snapshot = output.clone();

        let _ = output_json(&output).unwrap();
        assert_eq!(output, snapshot);
    }
}
