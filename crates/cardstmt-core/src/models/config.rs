//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardstmtConfig {
    /// Statement extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for CardstmtConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Statement extraction configuration.
///
/// The defaults reproduce the documented output contract: at most ten
/// transactions per record, sampled from the first fifteen matching
/// lines of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of transactions returned per statement.
    pub max_transactions: usize,

    /// Kept-candidate count at which the transaction line scan stops.
    pub transaction_scan_limit: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_transactions: 10,
            transaction_scan_limit: 15,
        }
    }
}

impl CardstmtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
