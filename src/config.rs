use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemmerError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Directory holding one `<category>.txt` file per reference list.
    pub data_dir: PathBuf,
    /// Strip punctuation and diacritics from tokens of running text.
    pub normalize: bool,
    /// Leave tokens listed as strange words unstemmed.
    pub skip_strange: bool,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("stemmer_files"),
            normalize: true,
            skip_strange: true,
        }
    }
}

impl StemmerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StemmerConfig = serde_json::from_str(json)?;
        if config.data_dir.as_os_str().is_empty() {
            return Err(StemmerError::Config("data_dir must not be empty".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = StemmerConfig::from_json(r#"{"data_dir": "/opt/stemmer"}"#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/opt/stemmer"));
        assert!(config.normalize);
        assert!(config.skip_strange);
    }

    #[test]
    fn test_empty_data_dir_rejected() {
        assert!(matches!(
            StemmerConfig::from_json(r#"{"data_dir": ""}"#),
            Err(StemmerError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_json_is_an_error() {
        assert!(matches!(
            StemmerConfig::from_json("normalize = true"),
            Err(StemmerError::Json(_))
        ));
    }
}
