//! Application configuration
//!
//! All settings live in an optional `proforma.json` next to the working
//! directory. Keys are camelCase and omitted keys keep their defaults.
//!
//! ```json
//! {
//!   "input": "calculation.xlsx",
//!   "template": "proforma Sonepat 20_.docx",
//!   "outputDir": "output_proformas",
//!   "hsnCode": "998222",
//!   "sheet": null,
//!   "anchors": { "buyerName": "Municipal Corporation Sonepat" }
//! }
//! ```

use crate::{ProformaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use template::Anchors;
use tracing::info;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "proforma.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Spreadsheet with one invoice per row
    pub input: PathBuf,

    /// DOCX template containing the anchors
    pub template: PathBuf,

    /// Directory receiving the generated files
    pub output_dir: PathBuf,

    /// Code written into the HSN/SAC column
    pub hsn_code: String,

    /// Worksheet name (first worksheet when unset)
    pub sheet: Option<String>,

    /// Template anchors
    pub anchors: Anchors,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("calculation.xlsx"),
            template: PathBuf::from("proforma Sonepat 20_.docx"),
            output_dir: PathBuf::from("output_proformas"),
            hsn_code: "998222".to_string(),
            sheet: None,
            anchors: Anchors::default(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProformaError::Config(e.to_string()))
    }

    /// Load `path` when it exists, otherwise use the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)
            .map_err(|e| ProformaError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}
