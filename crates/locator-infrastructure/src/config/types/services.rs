//! Service configuration document settings

use crate::constants::DEFAULT_SERVICES_PATH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// On-disk format of the service configuration document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// TOML with one `[[entries]]` table per entry
    #[default]
    Toml,
    /// Pretty-printed JSON
    Json,
}

impl DocumentFormat {
    /// Format implied by a file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Location of the service configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Document path
    pub path: PathBuf,

    /// Explicit format; inferred from the extension when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DocumentFormat>,
}

impl ServicesConfig {
    /// Format to read and write the document with
    pub fn resolved_format(&self) -> DocumentFormat {
        self.format
            .unwrap_or_else(|| DocumentFormat::from_path(&self.path))
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SERVICES_PATH),
            format: None,
        }
    }
}
