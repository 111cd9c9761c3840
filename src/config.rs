//! Engine settings loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid config.
//! Out-of-range values are clamped rather than rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;
use crate::search::piece_square_tables::PstPreset;

pub const MIN_SEARCH_DEPTH: u8 = 1;
pub const MAX_SEARCH_DEPTH: u8 = 50;
pub const MAX_TT_SIZE_MB: usize = 16_384;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search_depth: u8,
    /// Transposition table budget in megabytes; 0 disables the table.
    pub tt_size_mb: usize,
    pub pst: PstPreset,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 6,
            tt_size_mb: 256,
            pst: PstPreset::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.clamped())
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn clamped(self) -> Self {
        Self {
            search_depth: self.search_depth.clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH),
            tt_size_mb: self.tt_size_mb.min(MAX_TT_SIZE_MB),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.search_depth, 6);
        assert_eq!(config.tt_size_mb, 256);
    }

    #[test]
    fn values_are_read_and_clamped() {
        let config = EngineConfig::from_toml_str(
            "search_depth = 99\ntt_size_mb = 100000\npst = \"zeroed\"\n",
        )
        .expect("config parses");
        assert_eq!(config.search_depth, MAX_SEARCH_DEPTH);
        assert_eq!(config.tt_size_mb, MAX_TT_SIZE_MB);
        assert_eq!(config.pst, PstPreset::Zeroed);

        let shallow = EngineConfig::from_toml_str("search_depth = 0").expect("config parses");
        assert_eq!(shallow.search_depth, MIN_SEARCH_DEPTH);
    }

    #[test]
    fn bad_documents_are_reported() {
        assert!(matches!(
            EngineConfig::from_toml_str("search_depth = \"deep\""),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_file("/nonexistent/jungle.toml"),
            Err(EngineError::Io(_))
        ));
    }
}
